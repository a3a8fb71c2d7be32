//! Pokedex - An interactive command-line client for a paginated REST service
//!
//! Responses are kept in a time-expiring in-memory cache that sweeps itself
//! in the background.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
pub use tasks::spawn_sweep_task;
