//! Converts enrichment API DTOs to/from domain models.

use super::domain::EnrichmentResult;
use super::dto;

/// Convert an info response into our domain result.
pub fn to_result(payload: dto::InfoPayload) -> EnrichmentResult {
    EnrichmentResult {
        release_date: payload.release_date,
        text: payload.text.unwrap_or_default(),
        link: payload.link.unwrap_or_default(),
    }
}

/// Convert a domain result into the wire shape for publishing.
pub fn to_payload(result: &EnrichmentResult) -> dto::InfoPayload {
    dto::InfoPayload {
        release_date: result.release_date,
        text: Some(result.text.clone()),
        link: Some(result.link.clone()),
    }
}
