//! Error types shared by the Pokédex crates

use thiserror::Error;

/// Unified error type for directory, enrichment and detail operations
#[derive(Debug, Error)]
pub enum PokedexError {
    /// HTTP request failed (connection refused, DNS, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Upstream returned a non-success status
    #[error("HTTP error: {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Upstream has no record under this name
    #[error("Pokémon not found: {0}")]
    NotFound(String),

    /// Species record carries no English flavor text
    #[error("No English description for: {0}")]
    DescriptionNotFound(String),

    /// At least one entry of an all-or-nothing enrichment batch failed.
    /// `source` is the first failure in directory order.
    #[error("Enrichment failed for {failed} of {total} entries: {source}")]
    BatchFailed {
        failed: usize,
        total: usize,
        #[source]
        source: Box<PokedexError>,
    },

    /// The listing session was closed before the operation ran
    #[error("Session closed")]
    SessionClosed,
}

impl PokedexError {
    /// True for transport-level failures (the upstream could not be reached)
    pub fn is_network(&self) -> bool {
        match self {
            PokedexError::Network(_) => true,
            PokedexError::BatchFailed { source, .. } => source.is_network(),
            _ => false,
        }
    }
}

/// Result alias for Pokédex operations
pub type Result<T> = std::result::Result<T, PokedexError>;
