//! Entry Lifecycle Service
//!
//! Validation, permission checks and side effects for journal entries.
//! Every operation classifies the request (422/400, 404, 403) before it
//! writes anything.
//!
//! Side effects:
//! - create records the writing streak; failures there are logged and the
//!   entry is still created
//! - update publishes `entry-updated` to every real-time subscriber
//!
//! Search text is regex-escaped before matching, so `.*` or `(` match
//! literally instead of acting as patterns.

use chrono::{DateTime, Utc};
use regex::RegexBuilder;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::{get_user_by_id, save_streak};
use crate::backend::entries::db;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::realtime::Publisher;
use crate::backend::server::state::AppState;
use crate::shared::analytics::{summarize, MoodAnalytics};
use crate::shared::export::{render, ExportFile, ExportFormat};
use crate::shared::permissions::{can_edit, can_view};
use crate::shared::validation::{validate_entry, validate_search, EntryOperation};
use crate::shared::{classify, update_streak, Entry, EntryInput, LexiconScorer, RealtimeEvent, StreakUpdate};

pub struct EntryService<'a> {
    pub db: &'a SqlitePool,
    pub lexicon: &'a dyn LexiconScorer,
    pub publisher: &'a dyn Publisher,
}

impl<'a> EntryService<'a> {
    pub fn new(db: &'a SqlitePool, lexicon: &'a dyn LexiconScorer, publisher: &'a dyn Publisher) -> Self {
        Self { db, lexicon, publisher }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.db, state.lexicon.as_ref(), &state.realtime_broadcast)
    }

    pub async fn create(&self, actor: Uuid, input: &EntryInput) -> BackendResult<Entry> {
        let fields = validate_entry(input, EntryOperation::Create)?;
        let classification = classify(self.lexicon, &fields.sentiment_text());

        let entry = db::insert_entry(self.db, actor, &fields, &classification).await?;
        tracing::info!("Entry {} created by {} with mood {}", entry.id, actor, entry.mood);

        self.record_streak(actor, &entry).await;
        Ok(entry)
    }

    /// Best-effort streak bookkeeping for a freshly created entry
    async fn record_streak(&self, user_id: Uuid, entry: &Entry) {
        let user = match get_user_by_id(self.db, user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!("Streak not updated: user {} not found", user_id);
                return;
            }
            Err(e) => {
                tracing::error!("Streak not updated: failed to load user {}: {:?}", user_id, e);
                return;
            }
        };

        match update_streak(user.streak(), entry.date) {
            StreakUpdate::Unchanged => {}
            StreakUpdate::Changed(next) => match save_streak(self.db, user_id, &next).await {
                Ok(true) => tracing::debug!(
                    "Streak for {} is now {} (longest {})",
                    user_id,
                    next.current_streak,
                    next.longest_streak
                ),
                Ok(false) => tracing::warn!("Streak not saved: user {} vanished", user_id),
                Err(e) => tracing::error!("Failed to save streak for {}: {:?}", user_id, e),
            },
        }
    }

    pub async fn update(&self, actor: Uuid, entry_id: Uuid, input: &EntryInput) -> BackendResult<Entry> {
        let fields = validate_entry(input, EntryOperation::Update)?;

        let existing = db::get_entry(self.db, entry_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Entry not found!"))?;
        if !can_edit(&existing, actor) {
            tracing::warn!("User {} may not edit entry {}", actor, entry_id);
            return Err(BackendError::forbidden("You don't have permission to edit this entry!"));
        }

        let classification = classify(self.lexicon, &fields.sentiment_text());
        let entry = db::update_entry(self.db, entry_id, &fields, &classification)
            .await?
            .ok_or_else(|| BackendError::not_found("Entry not found or not updated due to permissions!"))?;
        tracing::info!("Entry {} updated by {}", entry.id, actor);

        self.publisher.publish(RealtimeEvent::entry_updated(&entry, actor)?);
        Ok(entry)
    }

    /// Owner only; anyone else gets the same 404 as for a missing entry
    pub async fn delete(&self, actor: Uuid, entry_id: Uuid) -> BackendResult<Entry> {
        let not_found = || BackendError::not_found("Entry not found or not deleted due to permissions!");

        let entry = db::get_owned_entry(self.db, entry_id, actor).await?.ok_or_else(not_found)?;
        if !db::delete_entry(self.db, entry_id).await? {
            return Err(not_found());
        }
        tracing::info!("Entry {} deleted by {}", entry_id, actor);
        Ok(entry)
    }

    pub async fn toggle_favorite(&self, actor: Uuid, entry_id: Uuid) -> BackendResult<Entry> {
        let not_found = || BackendError::not_found("Entry not found!");

        let entry = db::get_owned_entry(self.db, entry_id, actor).await?.ok_or_else(not_found)?;
        let entry = db::set_favorite(self.db, entry_id, !entry.is_favorite)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Entry {} favorite set to {}", entry_id, entry.is_favorite);
        Ok(entry)
    }

    /// Case-insensitive literal match on title or content of the actor's own entries
    pub async fn search(&self, actor: Uuid, text: Option<&str>) -> BackendResult<Vec<Entry>> {
        let text = validate_search(text)?;
        let pattern = RegexBuilder::new(&regex::escape(text))
            .case_insensitive(true)
            .build()
            .map_err(|e| BackendError::validation(format!("Invalid search text: {e}")))?;

        let entries = db::list_entries_by_owner(self.db, actor).await?;
        Ok(entries
            .into_iter()
            .filter(|e| pattern.is_match(&e.title) || pattern.is_match(&e.content))
            .collect())
    }

    pub async fn list(&self, actor: Uuid) -> BackendResult<Vec<Entry>> {
        Ok(db::list_entries_by_owner(self.db, actor).await?)
    }

    pub async fn get(&self, actor: Uuid, entry_id: Uuid) -> BackendResult<Entry> {
        let entry = db::get_entry(self.db, entry_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Entry not found!"))?;
        if !can_view(&entry, actor) {
            tracing::warn!("User {} may not view entry {}", actor, entry_id);
            return Err(BackendError::forbidden("You don't have permission to view this entry!"));
        }
        Ok(entry)
    }

    pub async fn analytics(&self, actor: Uuid) -> BackendResult<MoodAnalytics> {
        let entries = db::list_entries_by_owner(self.db, actor).await?;
        Ok(summarize(&entries))
    }

    pub async fn export(&self, actor: Uuid, format: ExportFormat, now: DateTime<Utc>) -> BackendResult<ExportFile> {
        let entries = db::list_entries_by_owner(self.db, actor).await?;
        if entries.is_empty() {
            return Err(BackendError::not_found("No entries to export"));
        }
        Ok(render(format, &entries, now)?)
    }
}
