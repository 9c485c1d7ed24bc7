//! Error types for the query engine.

use thiserror::Error;

/// Errors that can occur when building matchers or loading statistics.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A threshold condition named a field outside the known stat columns.
    #[error("unknown field '{0}' (expected goals, assists or points)")]
    UnknownField(String),

    /// The player provider could not supply records.
    #[error("player provider failed: {0}")]
    ProviderFailure(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
