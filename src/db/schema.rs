use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::debug;

/// Create the `posts` table if it does not exist yet.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row again.
pub async fn ensure(pool: &SqlitePool) -> Result<()> {
    debug!("Ensuring posts table exists");

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await
    .context("Failed to create posts table")?;

    Ok(())
}
