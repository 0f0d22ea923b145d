//! Internal domain models for song enrichment.
//!
//! These types are OUR types - they don't change when the external API
//! changes. External responses get converted into them via the adapter.

use chrono::NaiveDate;

/// Metadata the enrichment service knows about a song.
///
/// An absent `release_date` means the service does not recognize the
/// song; the Add-Song workflow refuses to catalog such songs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentResult {
    /// Release date; `None` means "unknown to the enrichment service"
    pub release_date: Option<NaiveDate>,
    /// Lyrics text, possibly multi-paragraph
    pub text: String,
    /// Source link (URL)
    pub link: String,
}

impl EnrichmentResult {
    /// Whether the enrichment service recognized the song at all.
    pub fn is_recognized(&self) -> bool {
        self.release_date.is_some()
    }
}

/// Errors that can occur talking to the enrichment service.
///
/// A well-formed "not found" response is NOT an error; `fetch` folds it
/// into an unrecognized [`EnrichmentResult`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Publish rejected with status {status}")]
    Rejected { status: u16 },
}
