//! Pokedex - An interactive command-line client for a paginated REST service
//!
//! Browses location areas page by page, caching every response body for a
//! configurable time-to-live.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::{Config, PokeApiClient, Repl, ResponseCache};

/// Main entry point for the Pokedex client.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables and CLI flags
/// 3. Create the response cache, which starts its sweep task
/// 4. Run the read loop on stdin until `exit` or end of input
#[tokio::main]
async fn main() -> ExitCode {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match Config::from_env().with_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Configuration loaded: cache_ttl={:?}, base_url={}",
        config.cache_ttl, config.base_url
    );

    let cache = Arc::new(ResponseCache::new(config.cache_ttl));
    let client = PokeApiClient::new(config.base_url, Arc::clone(&cache));
    let mut repl = Repl::new(client, std::io::stdout());

    let result = repl.run(BufReader::new(tokio::io::stdin())).await;
    cache.stop();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Read loop failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
