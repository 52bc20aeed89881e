/**
 * User Model and Database Operations
 *
 * Emails are stored lower-cased, so every lookup lower-cases its input
 * first. The streak columns are written only by entry creation.
 */

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{PublicUser, StreakState, UserProfile};

/// User row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    /// Lower-cased, unique
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// bcrypt hash; never serialized
    pub password_hash: String,
    pub last_entry_date: Option<NaiveDate>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            last_entry_date: self.last_entry_date,
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
        }
    }

    pub fn streak(&self) -> StreakState {
        StreakState {
            last_entry_date: self.last_entry_date,
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
        }
    }
}

/// Fields needed to register a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

const USER_COLUMNS: &str = "id, email, first_name, last_name, password_hash, last_entry_date, \
     current_streak, longest_streak, created_at, updated_at";

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Create a new user with an empty streak
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (id, email, first_name, last_name, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(normalize_email(&new_user.email))
    .bind(new_user.first_name.trim())
    .bind(new_user.last_name.trim())
    .bind(&new_user.password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email, ignoring case
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
        .bind(normalize_email(email))
        .fetch_optional(pool)
        .await
}

pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Persist a new streak state
///
/// Returns `false` when the user no longer exists.
pub async fn save_streak(pool: &SqlitePool, user_id: Uuid, streak: &StreakState) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET last_entry_date = ?, current_streak = ?, longest_streak = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(streak.last_entry_date)
    .bind(streak.current_streak)
    .bind(streak.longest_streak)
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}
