//! Add-Song workflow - the one compound, multi-system operation.
//!
//! Orchestrates the enrichment client and the catalog store in a fixed
//! sequence: validate input, fetch enrichment, reject unrecognized
//! songs, persist identity + metadata, publish the result back to the
//! enrichment service. Fetch strictly precedes persist, which strictly
//! precedes publish: nothing is written without a recognized result, and
//! the publish references the id the store just generated.
//!
//! Partial failure policy: a publish failure after a successful persist
//! is reported to the caller but the created row is NOT rolled back; the
//! record is complete locally and a later update call can repair the
//! external side.

use sqlx::sqlite::SqlitePool;
use tracing::{info, warn};

use crate::db;
use crate::enrichment::EnrichmentApi;
use crate::error::{Error, Result};
use crate::model::SongInfo;

/// Add a song to the catalog, enriching it along the way.
///
/// Returns the id of the newly cataloged song.
///
/// # Errors
///
/// - [`Error::InvalidInput`] - empty group or title; nothing was called
/// - [`Error::Enrichment`] - the enrichment service was unreachable or
///   sent a malformed response, or rejected the publish after the row
///   was created
/// - [`Error::UnknownSong`] - the enrichment service does not recognize
///   the song; no row was created
/// - [`Error::Conflict`] - (group, title) already cataloged
pub async fn add_song(
    pool: &SqlitePool,
    enrichment: &dyn EnrichmentApi,
    group: &str,
    title: &str,
) -> Result<i64> {
    let group = group.trim();
    let title = title.trim();
    if group.is_empty() || title.is_empty() {
        return Err(Error::invalid_input("group and title must be non-empty"));
    }

    let result = enrichment.fetch(group, title).await?;
    if !result.is_recognized() {
        return Err(Error::UnknownSong {
            group: group.to_string(),
            title: title.to_string(),
        });
    }

    let id = db::create_song(pool, group, title)
        .await
        .map_err(Error::from_store)?;

    // Fill the freshly created (empty) metadata row with the fetched
    // result. The merge-patch is a full overwrite here since every field
    // starts NULL.
    let patch = SongInfo {
        release_date: result.release_date,
        text: Some(result.text.clone()),
        link: Some(result.link.clone()),
    };
    db::update_info(pool, id, &patch)
        .await
        .map_err(Error::from_store)?;

    if let Err(err) = enrichment.publish(&result, id).await {
        warn!(id, %err, "publish failed after persist; row kept");
        return Err(err.into());
    }

    info!(id, group, title, "song added to catalog");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::traits::mocks::MockEnrichment;
    use crate::test_utils::temp_db;
    use chrono::NaiveDate;

    fn release_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1975, 10, 31).unwrap()
    }

    #[tokio::test]
    async fn test_add_song_persists_identity_and_metadata() {
        let (pool, _dir) = temp_db().await;
        let mock = MockEnrichment::recognized(release_date(), "Is this the real life?", "http://example.com");

        let id = add_song(&pool, &mock, "Queen", "Bohemian Rhapsody").await.unwrap();

        let entries = db::list_catalog(&pool).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].group, "Queen");
        assert_eq!(entries[0].title, "Bohemian Rhapsody");
        // Open question resolved: the fetched metadata IS written on create.
        assert_eq!(entries[0].release_date, Some(release_date()));
        assert_eq!(entries[0].text.as_deref(), Some("Is this the real life?"));
        assert_eq!(entries[0].link.as_deref(), Some("http://example.com"));

        // Publish ran last and referenced the persisted id.
        assert_eq!(*mock.published_ids.lock().unwrap(), vec![id]);
    }

    #[tokio::test]
    async fn test_add_song_trims_input() {
        let (pool, _dir) = temp_db().await;
        let mock = MockEnrichment::recognized(release_date(), "", "");

        add_song(&pool, &mock, "  Queen  ", " '39 ").await.unwrap();

        let entries = db::list_catalog(&pool).await.unwrap();
        assert_eq!(entries[0].group, "Queen");
        assert_eq!(entries[0].title, "'39");
    }

    #[tokio::test]
    async fn test_empty_input_rejected_before_any_side_effect() {
        let (pool, _dir) = temp_db().await;
        let mock = MockEnrichment::recognized(release_date(), "", "");

        let err = add_song(&pool, &mock, "Queen", "   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        // No fetch, no publish, no rows.
        assert_eq!(*mock.fetch_calls.lock().unwrap(), 0);
        assert!(mock.published_ids.lock().unwrap().is_empty());
        assert!(db::list_catalog(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_song_creates_no_rows() {
        let (pool, _dir) = temp_db().await;
        let mock = MockEnrichment::unrecognized();

        let err = add_song(&pool, &mock, "Unknown", "Nonexistent Song").await.unwrap_err();
        assert!(matches!(err, Error::UnknownSong { .. }));

        assert!(db::list_catalog(&pool).await.unwrap().is_empty());
        assert!(mock.published_ids.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_creates_no_rows() {
        let (pool, _dir) = temp_db().await;
        let mock = MockEnrichment::fetch_failure();

        let err = add_song(&pool, &mock, "Queen", "'39").await.unwrap_err();
        assert!(matches!(err, Error::Enrichment(_)));

        assert!(db::list_catalog(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts_and_keeps_one_row() {
        let (pool, _dir) = temp_db().await;
        let mock = MockEnrichment::recognized(release_date(), "text", "link");

        add_song(&pool, &mock, "Queen", "'39").await.unwrap();
        let err = add_song(&pool, &mock, "Queen", "'39").await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));

        assert_eq!(db::list_catalog(&pool).await.unwrap().len(), 1);
        // The failed attempt never reached publish.
        assert_eq!(mock.published_ids.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_publish_failure_keeps_persisted_row() {
        let (pool, _dir) = temp_db().await;
        let mock = MockEnrichment::publish_failure(release_date());

        let err = add_song(&pool, &mock, "Queen", "'39").await.unwrap_err();
        assert!(matches!(err, Error::Enrichment(_)));

        // The row stays, metadata already filled; repair happens via a
        // later update call.
        let entries = db::list_catalog(&pool).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].release_date, Some(release_date()));
    }
}
