//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; everything here comes from the network, decoding, or user input.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for commands and API calls.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("error getting request: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body did not match the expected schema
    #[error("error unmarshalling data: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading from or writing to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was invoked without a required argument
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// `map` was used after the last page
    #[error("you're on the last page")]
    NoNextPage,

    /// `mapb` was used on the first page
    #[error("you're on the first page")]
    NoPreviousPage,

    /// No command is registered under this name
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Configuration could not be applied
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
