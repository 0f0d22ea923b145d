//! Application-wide error types.
//!
//! This module provides a unified error hierarchy for the service.
//! Library modules use specific error types via `thiserror`, while
//! `main` uses `anyhow` for convenient error propagation.
//!
//! The HTTP status for each variant is decided at the API boundary
//! (see `api`); nothing here knows about transports or drivers beyond
//! the one `From<sqlx::Error>` conversion.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Enrichment service error (fetch or publish)
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] crate::enrichment::EnrichmentError),

    /// Missing or malformed client input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation targeted a nonexistent song
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate (group, title) on create
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The enrichment service does not recognize this song
    #[error("Unknown song: {group} - {title}")]
    UnknownSong { group: String, title: String },
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Classify a store error from a write against the songs table.
    ///
    /// A unique-constraint violation means the (group, title) pair already
    /// exists and becomes [`Error::Conflict`]; everything else stays a
    /// generic database error. This is the single place that inspects the
    /// driver's error representation.
    pub fn from_store(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound("no matching row".to_string()),
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                Self::Conflict("song with this group and title already exists".to_string())
            }
            other => Self::Database(other),
        }
    }
}
