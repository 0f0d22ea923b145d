//! Enrichment service HTTP client
//!
//! Handles communication with the external metadata service. Two calls:
//! a lenient lookup (`fetch`) and a strict confirmation push (`publish`).
//!
//! `fetch` is lenient because "song has no known metadata yet" is an
//! expected outcome; `publish` is strict because a failure there means
//! the service rejected data this system itself produced.

use std::time::Duration;

use super::{adapter, dto};
use crate::enrichment::domain::{EnrichmentError, EnrichmentResult};

/// User agent string sent on every outbound call
const USER_AGENT: &str = concat!("SongCatalog/", env!("CARGO_PKG_VERSION"));

/// Enrichment API client
pub struct EnrichmentClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl EnrichmentClient {
    /// Create a new client against the given base URL.
    ///
    /// Every call carries a bounded timeout so an inbound request can
    /// never hang indefinitely on a slow external dependency.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Look up metadata for a (group, title) pair.
    ///
    /// A non-success status from the service means "song unknown" and
    /// returns an unrecognized result rather than an error. Only
    /// transport failures and malformed bodies are errors.
    pub async fn fetch(&self, group: &str, title: &str) -> Result<EnrichmentResult, EnrichmentError> {
        let url = format!(
            "{}/info?group={}&song={}",
            self.base_url,
            urlencoding::encode(group),
            urlencoding::encode(title)
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Ok(EnrichmentResult::default());
        }

        let payload = response
            .json::<dto::InfoPayload>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))?;

        Ok(adapter::to_result(payload))
    }

    /// Push a fetched result back to the service's confirmation endpoint,
    /// tagged with the catalog id that now owns it.
    ///
    /// Any non-success status is a hard error; this call has no
    /// silent-failure mode.
    pub async fn publish(&self, result: &EnrichmentResult, id: i64) -> Result<(), EnrichmentError> {
        let url = format!("{}/change-info?id={}", self.base_url, id);

        let response = self
            .http_client
            .post(&url)
            .json(&adapter::to_payload(result))
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
