//! Enrichment module - resolves song identities into metadata via an
//! external service.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`dto.rs`) - Exact wire shapes of the external service
//! - **Adapter** - Converts DTOs to domain models and back
//! - **Client** - reqwest HTTP client for the external API
//! - **Traits** - The `EnrichmentApi` seam used by the workflow, with test mocks
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test the wire contract independently
//! 3. The workflow and handlers can be tested without a live service

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod traits;

pub use client::EnrichmentClient;
pub use domain::{EnrichmentError, EnrichmentResult};
pub use traits::EnrichmentApi;
