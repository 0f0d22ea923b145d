//! HTTP surface: route wiring, shared state, and the response envelope.
//!
//! Handlers stay thin - parse parameters, delegate to the store or the
//! Add-Song workflow, serialize the result. Every failure path produces
//! the structured envelope `{description, error}`; success acks are
//! `{description: "Ok"}`.
//!
//! Error class to status mapping:
//! - invalid input / unrecognized song -> 400
//! - missing id target -> 404
//! - duplicate (group, title) -> 409
//! - enrichment dependency failure (fetch or publish) -> 502
//! - anything else -> 500

mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::Json;
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

use crate::enrichment::EnrichmentApi;
use crate::error::Error;

/// Shared state handed to every handler: the connection pool and the
/// enrichment client, both process-wide and safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub enrichment: Arc<dyn EnrichmentApi>,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create-song", post(handlers::add_song))
        .route("/change-info", put(handlers::change_info))
        .route("/delete-song", delete(handlers::delete_song))
        .route("/text-song", get(handlers::text_song))
        .route("/library", get(handlers::library))
        .route("/info", get(handlers::info))
        .with_state(state)
}

/// Acknowledgment body for write operations.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub description: &'static str,
}

/// The success acknowledgment.
pub fn ok_ack() -> Json<Ack> {
    Json(Ack { description: "Ok" })
}

/// Structured error body returned on every failure path.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub description: String,
    pub error: String,
}

/// Wrapper tying the application error taxonomy to HTTP responses.
///
/// Handlers return `Result<_, ApiError>` and use `?`; the `From<Error>`
/// impl picks up everything the store, workflow and client produce.
pub struct ApiError(pub Error);

impl<E: Into<Error>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            Error::InvalidInput(_) | Error::UnknownSong { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Enrichment(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self.0, "request failed");
        } else {
            tracing::warn!(%status, error = %self.0, "request rejected");
        }

        let body = ErrorBody {
            description: status.canonical_reason().unwrap_or("Error").to_string(),
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
