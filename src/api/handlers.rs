//! The six HTTP handlers.
//!
//! Each handler parses its required parameters, delegates to the store
//! or the Add-Song workflow, and serializes the outcome. Extractor
//! rejections are caught explicitly so even malformed requests get the
//! structured error envelope.

use std::collections::HashMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use tracing::info;

use super::{Ack, ApiError, AppState, ok_ack};
use crate::catalog;
use crate::db;
use crate::error::Error;
use crate::model::{CatalogEntry, NewSong, SongInfo};

/// Pull a numeric `id` out of the query string.
fn parse_id(params: &HashMap<String, String>) -> Result<i64, Error> {
    let raw = params
        .get("id")
        .ok_or_else(|| Error::invalid_input("missing required query parameter: id"))?;
    raw.parse()
        .map_err(|_| Error::invalid_input(format!("id must be an integer, got {raw:?}")))
}

/// Unwrap a JSON body extraction, mapping rejections to invalid input.
fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(Error::invalid_input(format!(
            "error decoding request body: {rejection}"
        ))),
    }
}

/// POST /create-song
pub async fn add_song(
    State(state): State<AppState>,
    body: Result<Json<NewSong>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let song = parse_body(body)?;
    let id = catalog::add_song(&state.pool, state.enrichment.as_ref(), &song.group, &song.title)
        .await?;
    info!(id, "song successfully added");
    Ok(ok_ack())
}

/// PUT /change-info?id=
pub async fn change_info(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    body: Result<Json<SongInfo>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let id = parse_id(&params)?;
    let patch = parse_body(body)?;

    let found = db::update_info(&state.pool, id, &patch)
        .await
        .map_err(Error::from_store)?;
    if !found {
        return Err(Error::not_found(format!("no song with id {id}")).into());
    }

    info!(id, "song info successfully changed");
    Ok(ok_ack())
}

/// DELETE /delete-song?id=
pub async fn delete_song(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Ack>, ApiError> {
    let id = parse_id(&params)?;

    let deleted = db::delete_song(&state.pool, id)
        .await
        .map_err(Error::from_store)?;
    if deleted == 0 {
        return Err(Error::not_found(format!("no song with id {id}")).into());
    }

    info!(id, "song successfully deleted");
    Ok(ok_ack())
}

/// GET /text-song?id=
pub async fn text_song(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<String>, ApiError> {
    let id = parse_id(&params)?;

    let text = db::get_text(&state.pool, id)
        .await
        .map_err(Error::from_store)?
        .ok_or_else(|| Error::not_found(format!("no song with id {id}")))?;

    info!(id, "song lyrics successfully received");
    Ok(Json(text))
}

/// GET /library
pub async fn library(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogEntry>>, ApiError> {
    let entries = db::list_catalog(&state.pool)
        .await
        .map_err(Error::from_store)?;
    info!(count = entries.len(), "library successfully received");
    Ok(Json(entries))
}

/// GET /info?group=&title=
pub async fn info(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SongInfo>, ApiError> {
    let group = params
        .get("group")
        .ok_or_else(|| Error::invalid_input("missing required query parameter: group"))?;
    let title = params
        .get("title")
        .ok_or_else(|| Error::invalid_input("missing required query parameter: title"))?;

    let info = db::find_info(&state.pool, group, title)
        .await
        .map_err(Error::from_store)?
        .unwrap_or_default();

    info!(%group, %title, "song info successfully received");
    Ok(Json(info))
}
