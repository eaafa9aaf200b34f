//! Alpha Monitor CLI
//!
//! Runs the token listing proxy, or queries the upstream listing directly.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use alpha_api::{ApiConfig, ApiServer, ListingOrigin, TokenListService};
use alpha_cache::TokenListCache;
use alpha_core::network::{normalize_network, Network};
use alpha_core::types::TokenListResponse;
use alpha_core::DEFAULT_PORT;
use alpha_upstream::AlphaClient;

/// Alpha Monitor - Binance Alpha token listing proxy
#[derive(Parser)]
#[command(name = "alpha-monitor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Fetch the token listing once and print it
    Tokens {
        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
        /// Show at most this many tokens
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Normalize chain names the way the proxy does
    Network {
        /// Raw chain names; lists the table when empty
        names: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "alpha=debug,tower_http=debug,info"
    } else {
        "alpha=info,warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, &bind).await,
        Commands::Tokens { json, limit } => cmd_tokens(json, limit).await,
        Commands::Network { names } => cmd_network(&names),
    }
}

/// Run API server
async fn cmd_serve(port: u16, bind: &str) -> Result<()> {
    println!("{}", "🚀 Alpha Monitor Server Started".cyan().bold());
    println!("   {} http://{}:{}", "Listening on:".green(), bind, port);
    println!("   {} http://{}:{}/health", "Health check:".dimmed(), bind, port);
    println!("   {} http://{}:{}/api/alpha-tokens", "API endpoint:".dimmed(), bind, port);
    println!("\n   Press Ctrl+C to stop.\n");

    let config = ApiConfig {
        port,
        ..ApiConfig::from_env()
    };
    debug!(
        upstream = %config.upstream_url,
        cache_ttl_ms = config.cache_ttl_ms,
        public_dir = %config.public_dir.display(),
        "Loaded server configuration"
    );
    let server = ApiServer::new(config).context("Failed to configure server")?;

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", bind, port))?;
    server.run(addr).await.context("Server error")?;

    Ok(())
}

/// Fetch the listing once through the same cache/fallback path the server uses
async fn cmd_tokens(json: bool, limit: Option<usize>) -> Result<()> {
    let config = ApiConfig::from_env();
    let client = AlphaClient::with_config(config.upstream()).context("Invalid upstream configuration")?;
    let service = TokenListService::new(Arc::new(client), TokenListCache::with_config(config.cache()));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("Fetching Alpha tokens...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let listing = service.get_token_list().await;
    spinner.finish_and_clear();

    match listing.origin {
        ListingOrigin::Fallback => warn!("Upstream unavailable, showing fallback dataset"),
        _ => info!(origin = listing.origin.as_header(), tokens = listing.response.len(), "Token listing ready"),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(listing.response.as_ref())?);
        return Ok(());
    }

    match listing.origin {
        ListingOrigin::Fallback => println!(
            "{} {}",
            "⚠️  Upstream unavailable:".yellow().bold(),
            listing.response.error.as_deref().unwrap_or_default()
        ),
        _ => println!("{} {} tokens", "✅ Fetched".green().bold(), listing.response.len()),
    }

    print_tokens(&listing.response, limit);
    Ok(())
}

fn print_tokens(response: &TokenListResponse, limit: Option<usize>) {
    let shown = limit.unwrap_or(response.len()).min(response.len());

    println!(
        "\n   {:<12} {:<24} {:<12} {}",
        "SYMBOL".dimmed(),
        "NAME".dimmed(),
        "NETWORK".dimmed(),
        "CONTRACT".dimmed()
    );
    for token in response.data.iter().take(shown) {
        println!(
            "   {:<12} {:<24} {:<12} {}",
            token.symbol().unwrap_or("-").yellow(),
            token.name().unwrap_or("-"),
            token.network.cyan(),
            token.contract_address().unwrap_or("-").dimmed()
        );
    }

    if shown < response.len() {
        println!("\n   ... and {} more", response.len() - shown);
    }
}

/// Normalize chain names
fn cmd_network(names: &[String]) -> Result<()> {
    if names.is_empty() {
        println!("{}", "Known networks:".cyan().bold());
        for network in Network::ALL {
            println!("   {:<10} {}", network.to_string().green(), network.aliases().join(", ").dimmed());
        }
        return Ok(());
    }

    for name in names {
        println!("   {:?} {} {}", name, "→".dimmed(), normalize_network(Some(name)).green());
    }
    Ok(())
}
