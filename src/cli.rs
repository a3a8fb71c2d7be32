//! Command-line interface parsing for the Pokedex client
//!
//! Flags given here take precedence over the environment (see [`crate::config`]).

use clap::Parser;

/// Pokedex - browse the Pokémon world from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex backed by a response cache")]
#[command(version)]
pub struct Cli {
    /// Seconds a cached response stays valid (also the sweep interval)
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// Root URL of the REST service
    ///
    /// Example: --base-url http://localhost:8080/api/v2
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}
