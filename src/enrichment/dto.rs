//! Enrichment API Data Transfer Objects
//!
//! These types match EXACTLY what the external metadata service sends and
//! receives. DO NOT add fields that aren't in the wire contract.
//! DO NOT use these types outside the enrichment module - convert to
//! domain types via the adapter.
//!
//! The same shape is used in both directions: the `/info` lookup returns
//! it, and the publish call sends it back tagged with the catalog id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Song metadata as the external service represents it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InfoPayload {
    /// Release date; the service omits it for songs it doesn't know
    #[serde(rename = "releaseDate")]
    pub release_date: Option<NaiveDate>,
    /// Lyrics text
    pub text: Option<String>,
    /// Source link
    pub link: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
