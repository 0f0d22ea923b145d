//! Trait definition for the enrichment client.
//!
//! The Add-Song workflow and the HTTP handlers depend on this trait
//! rather than the concrete reqwest client, so tests can substitute
//! mock implementations.

use async_trait::async_trait;

use super::domain::{EnrichmentError, EnrichmentResult};

/// External enrichment service operations.
#[async_trait]
pub trait EnrichmentApi: Send + Sync {
    /// Look up metadata for a (group, title) pair. A song the service
    /// does not know yields an unrecognized result, not an error.
    async fn fetch(&self, group: &str, title: &str) -> Result<EnrichmentResult, EnrichmentError>;

    /// Push a fetched result to the confirmation endpoint, tagged with
    /// the catalog id that owns it. Non-success is a hard error.
    async fn publish(&self, result: &EnrichmentResult, id: i64) -> Result<(), EnrichmentError>;
}

#[async_trait]
impl EnrichmentApi for super::client::EnrichmentClient {
    async fn fetch(&self, group: &str, title: &str) -> Result<EnrichmentResult, EnrichmentError> {
        self.fetch(group, title).await
    }

    async fn publish(&self, result: &EnrichmentResult, id: i64) -> Result<(), EnrichmentError> {
        self.publish(result, id).await
    }
}
