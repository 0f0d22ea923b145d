//! Domain models for the song catalog.
//!
//! These are the types the store persists and the API serializes. Wire
//! names follow the original service contract: the identity carries
//! `group`/`title`, metadata uses camelCase `releaseDate`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for adding a song: the natural key only.
///
/// `(group, title)` is unique across the catalog; the surrogate id is
/// generated by the store on create. Identities are never mutated after
/// creation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewSong {
    pub group: String,
    pub title: String,
}

/// Song metadata, one row per song.
///
/// Doubles as the merge-patch body for updates: `None` fields leave the
/// stored value untouched, present fields overwrite it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SongInfo {
    #[serde(rename = "releaseDate")]
    pub release_date: Option<NaiveDate>,
    pub text: Option<String>,
    pub link: Option<String>,
}

/// Listing read model: a song joined with its metadata.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CatalogEntry {
    pub id: i64,
    #[sqlx(rename = "music_group")]
    pub group: String,
    pub title: String,
    #[serde(rename = "releaseDate")]
    pub release_date: Option<NaiveDate>,
    pub text: Option<String>,
    pub link: Option<String>,
}
