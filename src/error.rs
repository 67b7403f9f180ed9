//! Error types for the dicemdp crate

use thiserror::Error;

/// Main error type for the dicemdp crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("{state} is not a valid state for the current game")]
    InvalidState { state: String },

    #[error("{action} is not a valid action for the current game")]
    InvalidAction { action: String },

    #[error("game already over")]
    GameOver,

    #[error("policy has no entry for state {state}")]
    MissingPolicyEntry { state: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
