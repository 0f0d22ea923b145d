//! Test utilities and fixtures for song-catalog tests.
//!
//! Provides the temp-database helper used across store, workflow and
//! handler tests.

use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;

/// Creates a temporary database for testing.
///
/// The database lives in a temp directory that is cleaned up when the
/// returned `TempDir` is dropped; keep it alive for the duration of the
/// test. Migrations are run automatically.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db_url = format!("sqlite:{}", db_path.display());

    let pool = crate::db::init_db(&db_url)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_temp_db_creates_working_database() {
        let (pool, _dir) = temp_db().await;

        let entries = crate::db::list_catalog(&pool).await.unwrap();
        assert!(entries.is_empty());
    }
}
