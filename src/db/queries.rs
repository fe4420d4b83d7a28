use chrono::Utc;
use sqlx::SqlitePool;

use super::models::{Post, PostDraft};
use super::StoreError;

/// Current UTC time in the sortable form stored in `created_at`.
fn now_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Insert a new post and return it with its assigned id and timestamp.
pub async fn create_post(pool: &SqlitePool, draft: &PostDraft) -> Result<Post, StoreError> {
    let created_at = now_timestamp();

    let result = sqlx::query(
        r"
        INSERT INTO posts (title, author, content, created_at)
        VALUES (?, ?, ?, ?)
        ",
    )
    .bind(draft.title())
    .bind(draft.author())
    .bind(draft.content())
    .bind(&created_at)
    .execute(pool)
    .await?;

    Ok(Post {
        id: result.last_insert_rowid(),
        title: draft.title().to_string(),
        author: draft.author().map(str::to_string),
        content: draft.content().to_string(),
        created_at,
    })
}

/// Get a post by id.
pub async fn get_post(pool: &SqlitePool, id: i64) -> Result<Post, StoreError> {
    sqlx::query_as("SELECT id, title, author, content, created_at FROM posts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound(id))
}

/// All posts, newest first.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, StoreError> {
    let posts = sqlx::query_as(
        "SELECT id, title, author, content, created_at FROM posts ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Replace a post's title, author and content.
///
/// `id` and `created_at` are left untouched.
pub async fn update_post(
    pool: &SqlitePool,
    id: i64,
    draft: &PostDraft,
) -> Result<Post, StoreError> {
    // Dropping the transaction on an early return rolls it back.
    let mut tx = pool.begin().await?;

    let result = sqlx::query("UPDATE posts SET title = ?, author = ?, content = ? WHERE id = ?")
        .bind(draft.title())
        .bind(draft.author())
        .bind(draft.content())
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(id));
    }

    let post: Post =
        sqlx::query_as("SELECT id, title, author, content, created_at FROM posts WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

    tx.commit().await?;

    Ok(post)
}

/// Permanently delete a post.
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(id));
    }

    Ok(())
}

/// Count stored posts.
pub async fn count_posts(pool: &SqlitePool) -> Result<i64, StoreError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
