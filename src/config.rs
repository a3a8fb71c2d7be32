//! Configuration Module
//!
//! Handles loading client configuration from environment variables and
//! applying command-line overrides.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;
use crate::cli::Cli;
use crate::error::{PokedexError, Result};

/// Default root of the REST service
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lifetime of cached responses, also the sweep interval
    pub cache_ttl: Duration,
    /// Root URL of the REST service, without a trailing slash
    pub base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 5)
    /// - `POKEDEX_BASE_URL` - REST service root (default: https://pokeapi.co/api/v2)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_ttl: lookup("POKEDEX_CACHE_TTL")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(DEFAULT_TTL_SECS)),
            base_url: lookup("POKEDEX_BASE_URL")
                .map(|v| normalize_base_url(&v))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Applies command-line values on top of this configuration.
    ///
    /// Returns an error if the resulting TTL is zero.
    pub fn with_cli(mut self, cli: &Cli) -> Result<Self> {
        if let Some(secs) = cli.cache_ttl {
            self.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(url) = &cli.base_url {
            self.base_url = normalize_base_url(url);
        }

        if self.cache_ttl.is_zero() {
            return Err(PokedexError::InvalidConfig(
                "cache TTL must be at least one second".to_string(),
            ));
        }
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
