/**
 * Database Operations for Sharing and Comments
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{Comment, CommentView, PublicUser};

/// Add `user_id` to the entry's read grants
///
/// Returns `false` if the grant already existed.
pub async fn add_reader(pool: &SqlitePool, entry_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("INSERT OR IGNORE INTO entry_shared_with (entry_id, user_id) VALUES (?, ?)")
        .bind(entry_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

/// Add `user_id` to the entry's edit grants; a no-op if already present
pub async fn add_editor(pool: &SqlitePool, entry_id: Uuid, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT OR IGNORE INTO entry_editors (entry_id, user_id) VALUES (?, ?)")
        .bind(entry_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove a read grant; edit grants are left alone
pub async fn remove_reader(pool: &SqlitePool, entry_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM entry_shared_with WHERE entry_id = ? AND user_id = ?")
        .bind(entry_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    entry_id: Uuid,
    author: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            entry_id: row.entry_id,
            author: row.author,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentViewRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<CommentViewRow> for CommentView {
    fn from(row: CommentViewRow) -> Self {
        CommentView {
            author_profile: PublicUser {
                id: row.comment.author,
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
            },
            comment: row.comment.into(),
        }
    }
}

const COMMENT_COLUMNS: &str = "c.id, c.entry_id, c.author, c.content, c.created_at, c.updated_at";

pub async fn insert_comment(
    pool: &SqlitePool,
    entry_id: Uuid,
    author: Uuid,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    let now = Utc::now();
    let row = sqlx::query_as::<_, CommentRow>(
        r#"
        INSERT INTO comments (id, entry_id, author, content, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, entry_id, author, content, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(entry_id)
    .bind(author)
    .bind(content)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

pub async fn get_comment_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
    let row = sqlx::query_as::<_, CommentRow>(&format!(
        "SELECT {COMMENT_COLUMNS} FROM comments c WHERE c.id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Comment::from))
}

pub async fn get_comment_view(pool: &SqlitePool, id: Uuid) -> Result<Option<CommentView>, sqlx::Error> {
    let row = sqlx::query_as::<_, CommentViewRow>(&format!(
        r#"
        SELECT {COMMENT_COLUMNS}, u.first_name, u.last_name, u.email
        FROM comments c
        JOIN users u ON u.id = c.author
        WHERE c.id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(CommentView::from))
}

/// Comments on an entry with their authors, newest first
pub async fn list_comments_for_entry(pool: &SqlitePool, entry_id: Uuid) -> Result<Vec<CommentView>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CommentViewRow>(&format!(
        r#"
        SELECT {COMMENT_COLUMNS}, u.first_name, u.last_name, u.email
        FROM comments c
        JOIN users u ON u.id = c.author
        WHERE c.entry_id = ?
        ORDER BY c.created_at DESC, c.rowid DESC
        "#
    ))
    .bind(entry_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(CommentView::from).collect())
}

pub async fn delete_comment(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}
