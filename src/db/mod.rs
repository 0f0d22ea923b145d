//! Catalog store: persistence of song identities and their metadata.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! Provides async operations for:
//! - Song create/delete keyed by id
//! - Merge-patch metadata updates
//! - Lyrics and metadata reads, by id and by natural key
//! - Catalog listing (identity joined with metadata)
//!
//! Functions return `sqlx::Result`; callers classify driver errors into
//! the application taxonomy via `Error::from_store`.
//!
//! # Example
//!
//! ```ignore
//! use song_catalog::db::{init_db, list_catalog};
//!
//! let pool = init_db("sqlite:songs.db").await?;
//! let entries = list_catalog(&pool).await?;
//! ```

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::model::{CatalogEntry, SongInfo};

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "song_catalog.db";

/// Build a SQLite database URL from an optional path.
///
/// If no path is provided, uses [`DEFAULT_DB_NAME`] in the current directory.
pub fn db_url(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("sqlite:{}", p.display()),
        None => format!("sqlite:{DEFAULT_DB_NAME}"),
    }
}

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to 5 connections, and runs all pending migrations. Foreign
/// keys are enabled on every connection; the metadata cascade delete
/// depends on it.
///
/// # Errors
///
/// Returns an error if:
/// - The URL is malformed
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Execute a schema bootstrap script.
///
/// The original deployment seeds the catalog from an operator-provided SQL
/// file named by the `INIT_SQL_PATH` environment variable; `main` calls
/// this when that variable is set.
pub async fn run_init_script(pool: &SqlitePool, path: &Path) -> crate::error::Result<()> {
    let sql = std::fs::read_to_string(path)?;
    sqlx::raw_sql(&sql).execute(pool).await?;
    tracing::info!("executed init script {:?}", path);
    Ok(())
}

/// Create a song identity together with its empty metadata row.
///
/// Both inserts run in one transaction: an identity is never visible
/// without a metadata row, and a failure creating the metadata row rolls
/// the identity back. The unique constraint on `(music_group, title)`
/// rejects duplicates; callers map that violation to a conflict error.
///
/// # Returns
///
/// The store-generated id of the new song.
pub async fn create_song(pool: &SqlitePool, group: &str, title: &str) -> sqlx::Result<i64> {
    let mut tx = pool.begin().await?;

    let id: i64 =
        sqlx::query_scalar("INSERT INTO songs (music_group, title) VALUES (?, ?) RETURNING id")
            .bind(group)
            .bind(title)
            .fetch_one(&mut *tx)
            .await?;

    sqlx::query("INSERT INTO song_info (song_id) VALUES (?)")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(id)
}

/// Apply a merge-patch to a song's metadata.
///
/// Fields present in the patch overwrite the stored value; `None` fields
/// are left untouched (`COALESCE` against the existing column). Returns
/// `false` when no song with this id exists, so callers can report
/// not-found instead of silently doing nothing. Every song has exactly
/// one metadata row, so the update's own rows-affected count is the
/// existence signal; a separate pre-check would race with a concurrent
/// delete.
pub async fn update_info(pool: &SqlitePool, id: i64, patch: &SongInfo) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE song_info
        SET
            release_date = COALESCE(?, release_date),
            text = COALESCE(?, text),
            link = COALESCE(?, link)
        WHERE song_id = ?
        "#,
    )
    .bind(patch.release_date)
    .bind(patch.text.as_deref())
    .bind(patch.link.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a song by id.
///
/// The metadata row goes with it via `ON DELETE CASCADE`. Returns the
/// number of identity rows deleted; 0 means the id did not exist and is a
/// client error at the surface, not a server error.
pub async fn delete_song(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Get the stored lyrics for a song.
///
/// Returns `None` when no metadata row exists for the id, which is
/// distinct from lyrics that are present but empty.
pub async fn get_text(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<String>> {
    sqlx::query_scalar("SELECT COALESCE(text, '') FROM song_info WHERE song_id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List every song joined with its metadata.
///
/// Ordered by id for stable output within a query; no long-term ordering
/// guarantee is implied.
pub async fn list_catalog(pool: &SqlitePool) -> sqlx::Result<Vec<CatalogEntry>> {
    sqlx::query_as::<_, CatalogEntry>(
        r#"
        SELECT s.id, s.music_group, s.title, i.release_date, i.text, i.link
        FROM songs s
        JOIN song_info i ON s.id = i.song_id
        ORDER BY s.id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Look up a song's metadata by natural key instead of id.
pub async fn find_info(
    pool: &SqlitePool,
    group: &str,
    title: &str,
) -> sqlx::Result<Option<SongInfo>> {
    sqlx::query_as::<_, SongInfo>(
        r#"
        SELECT i.release_date, i.text, i.link
        FROM songs s
        JOIN song_info i ON s.id = i.song_id
        WHERE s.music_group = ? AND s.title = ?
        "#,
    )
    .bind(group)
    .bind(title)
    .fetch_optional(pool)
    .await
}
