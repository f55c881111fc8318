//! Error types for the KARDS stats client

use std::fmt;

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, KardsError>;

#[derive(Error, Debug)]
pub enum KardsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("GraphQL request returned errors: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Invalid player id: {value} (expected 6 digits)")]
    InvalidPlayerId { value: String },

    #[error("Invalid player tag: {value} (expected 4 digits)")]
    InvalidTag { value: String },

    #[error("Invalid environment: {value} (expected `production` or `local`)")]
    InvalidEnvironment { value: String },

    #[error("Invalid timeout: {value} (expected a positive number of seconds)")]
    InvalidTimeout { value: String },

    #[error("No player is loaded")]
    NoPlayerLoaded,

    #[error("Another request is still in flight")]
    RequestInFlight,
}

/// User-visible failure of a search or update, as stored in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// Search text matched neither accepted format; never reaches the network.
    Validation,
    /// The server answered with an explicit `Error` payload.
    Domain(String),
    /// The payload matched no known variant.
    Protocol,
    /// The request itself failed (network, HTTP status, GraphQL errors, deadline).
    Transport,
}

impl RequestFailure {
    pub const VALIDATION_MESSAGE: &'static str = "Invalid player name / id format";
    pub const PROTOCOL_MESSAGE: &'static str = "Unknown Response";
    pub const TRANSPORT_MESSAGE: &'static str = "Unknown error";

    pub fn message(&self) -> &str {
        match self {
            RequestFailure::Validation => Self::VALIDATION_MESSAGE,
            RequestFailure::Domain(message) => message,
            RequestFailure::Protocol => Self::PROTOCOL_MESSAGE,
            RequestFailure::Transport => Self::TRANSPORT_MESSAGE,
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
