/**
 * Database Operations for Journal Entries
 *
 * Entry rows hold the scalar fields; read and edit grants live in
 * `entry_shared_with` and `entry_editors`. Every function here returns a
 * fully assembled [`Entry`] with both grant lists filled in.
 */

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{Classification, Entry, EntryFields, Intensity, Mood, Sentiment};

#[derive(sqlx::FromRow)]
struct EntryRow {
    id: Uuid,
    created_by: Uuid,
    entry_date: NaiveDate,
    title: String,
    content: String,
    mood: String,
    sentiment_score: i32,
    sentiment_intensity: String,
    sentiment_comparative: Option<f64>,
    is_favorite: bool,
    is_public: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const ENTRY_COLUMNS: &str = "e.id, e.created_by, e.entry_date, e.title, e.content, e.mood, \
     e.sentiment_score, e.sentiment_intensity, e.sentiment_comparative, e.is_favorite, \
     e.is_public, e.created_at, e.updated_at";

/// Same columns, unqualified, for `RETURNING`
const RETURNED_COLUMNS: &str = "id, created_by, entry_date, title, content, mood, \
     sentiment_score, sentiment_intensity, sentiment_comparative, is_favorite, \
     is_public, created_at, updated_at";

const ENTRY_ORDER: &str = "ORDER BY e.entry_date DESC, e.created_at DESC, e.rowid DESC";

fn decode_error(err: crate::shared::SharedError) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

async fn user_ids(pool: &SqlitePool, table: &str, entry_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(&format!(
        "SELECT user_id FROM {table} WHERE entry_id = ? ORDER BY rowid"
    ))
    .bind(entry_id)
    .fetch_all(pool)
    .await
}

async fn assemble(pool: &SqlitePool, row: EntryRow) -> Result<Entry, sqlx::Error> {
    let mood: Mood = row.mood.parse().map_err(decode_error)?;
    let intensity: Intensity = row.sentiment_intensity.parse().map_err(decode_error)?;

    Ok(Entry {
        shared_with: user_ids(pool, "entry_shared_with", row.id).await?,
        can_edit: user_ids(pool, "entry_editors", row.id).await?,
        id: row.id,
        created_by: row.created_by,
        date: row.entry_date,
        title: row.title,
        content: row.content,
        mood,
        sentiment: Sentiment {
            score: row.sentiment_score,
            intensity,
            comparative: row.sentiment_comparative,
        },
        is_favorite: row.is_favorite,
        is_public: row.is_public,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

async fn assemble_all(pool: &SqlitePool, rows: Vec<EntryRow>) -> Result<Vec<Entry>, sqlx::Error> {
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        entries.push(assemble(pool, row).await?);
    }
    Ok(entries)
}

pub async fn insert_entry(
    pool: &SqlitePool,
    owner: Uuid,
    fields: &EntryFields,
    classification: &Classification,
) -> Result<Entry, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, EntryRow>(&format!(
        r#"
        INSERT INTO entries (id, created_by, entry_date, title, content, mood,
            sentiment_score, sentiment_intensity, sentiment_comparative, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {RETURNED_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(owner)
    .bind(fields.date)
    .bind(&fields.title)
    .bind(&fields.content)
    .bind(classification.mood.symbol())
    .bind(classification.score)
    .bind(classification.intensity.label())
    .bind(classification.comparative)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    assemble(pool, row).await
}

pub async fn get_entry(pool: &SqlitePool, id: Uuid) -> Result<Option<Entry>, sqlx::Error> {
    let row = sqlx::query_as::<_, EntryRow>(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries e WHERE e.id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => assemble(pool, row).await.map(Some),
        None => Ok(None),
    }
}

/// Entry `id` if it is owned by `owner`
pub async fn get_owned_entry(pool: &SqlitePool, id: Uuid, owner: Uuid) -> Result<Option<Entry>, sqlx::Error> {
    let row = sqlx::query_as::<_, EntryRow>(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries e WHERE e.id = ? AND e.created_by = ?"
    ))
    .bind(id)
    .bind(owner)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => assemble(pool, row).await.map(Some),
        None => Ok(None),
    }
}

/// Entries owned by `owner`, newest date first
pub async fn list_entries_by_owner(pool: &SqlitePool, owner: Uuid) -> Result<Vec<Entry>, sqlx::Error> {
    let rows = sqlx::query_as::<_, EntryRow>(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries e WHERE e.created_by = ? {ENTRY_ORDER}"
    ))
    .bind(owner)
    .fetch_all(pool)
    .await?;

    assemble_all(pool, rows).await
}

/// Entries whose read grants include `user_id`, newest date first
pub async fn list_entries_shared_with(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Entry>, sqlx::Error> {
    let rows = sqlx::query_as::<_, EntryRow>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM entries e
        JOIN entry_shared_with s ON s.entry_id = e.id
        WHERE s.user_id = ?
        {ENTRY_ORDER}
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    assemble_all(pool, rows).await
}

/// Overwrite the editable fields and derived sentiment
///
/// Returns `None` if the entry vanished in the meantime.
pub async fn update_entry(
    pool: &SqlitePool,
    id: Uuid,
    fields: &EntryFields,
    classification: &Classification,
) -> Result<Option<Entry>, sqlx::Error> {
    let row = sqlx::query_as::<_, EntryRow>(&format!(
        r#"
        UPDATE entries
        SET entry_date = ?, title = ?, content = ?, mood = ?, sentiment_score = ?,
            sentiment_intensity = ?, sentiment_comparative = ?, updated_at = ?
        WHERE id = ?
        RETURNING {RETURNED_COLUMNS}
        "#
    ))
    .bind(fields.date)
    .bind(&fields.title)
    .bind(&fields.content)
    .bind(classification.mood.symbol())
    .bind(classification.score)
    .bind(classification.intensity.label())
    .bind(classification.comparative)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => assemble(pool, row).await.map(Some),
        None => Ok(None),
    }
}

pub async fn set_favorite(pool: &SqlitePool, id: Uuid, is_favorite: bool) -> Result<Option<Entry>, sqlx::Error> {
    let row = sqlx::query_as::<_, EntryRow>(&format!(
        r#"
        UPDATE entries
        SET is_favorite = ?, updated_at = ?
        WHERE id = ?
        RETURNING {RETURNED_COLUMNS}
        "#
    ))
    .bind(is_favorite)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => assemble(pool, row).await.map(Some),
        None => Ok(None),
    }
}

/// Hard delete; grants go with the entry, comments stay
pub async fn delete_entry(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM entries WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() == 1)
}
