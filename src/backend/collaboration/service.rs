//! Sharing & Comment Service
//!
//! Only the owner may change who an entry is shared with. Readers and the
//! owner may comment. A comment can only be deleted by its author.
//!
//! Unsharing removes the read grant only. An edit grant given earlier stays
//! in place and keeps working for updates.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::{get_user_by_email, get_user_by_id};
use crate::backend::collaboration::db;
use crate::backend::entries::db as entries_db;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::realtime::Publisher;
use crate::backend::server::state::AppState;
use crate::shared::permissions::{can_comment, can_delete_comment, can_view};
use crate::shared::validation::validate_comment;
use crate::shared::{CommentView, Entry, RealtimeEvent, SharedEntry};

pub struct CollaborationService<'a> {
    pub db: &'a SqlitePool,
    pub publisher: &'a dyn Publisher,
}

impl<'a> CollaborationService<'a> {
    pub fn new(db: &'a SqlitePool, publisher: &'a dyn Publisher) -> Self {
        Self { db, publisher }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.db, &state.realtime_broadcast)
    }

    /// Grant read access, and edit access too when `grant_edit` is set
    pub async fn share(&self, actor: Uuid, entry_id: Uuid, email: &str, grant_edit: bool) -> BackendResult<Entry> {
        let entry = entries_db::get_owned_entry(self.db, entry_id, actor)
            .await?
            .ok_or_else(|| BackendError::not_found("Entry not found or you don't have permission to share it"))?;

        let target = get_user_by_email(self.db, email)
            .await?
            .ok_or_else(|| BackendError::not_found("User with this email not found"))?;

        if target.id == actor {
            return Err(BackendError::bad_request("Cannot share with yourself"));
        }
        if entry.shared_with.contains(&target.id) {
            return Err(BackendError::bad_request("Entry already shared with this user"));
        }

        if !db::add_reader(self.db, entry_id, target.id).await? {
            return Err(BackendError::bad_request("Entry already shared with this user"));
        }
        if grant_edit {
            db::add_editor(self.db, entry_id, target.id).await?;
        }
        tracing::info!("Entry {} shared with {} (edit: {})", entry_id, target.id, grant_edit);

        self.publisher
            .publish(RealtimeEvent::entry_shared(entry_id, actor, target.id, grant_edit));

        self.reload(entry_id).await
    }

    pub async fn unshare(&self, actor: Uuid, entry_id: Uuid, user_id: Uuid) -> BackendResult<Entry> {
        entries_db::get_owned_entry(self.db, entry_id, actor)
            .await?
            .ok_or_else(|| BackendError::not_found("Entry not found or you don't have permission to unshare it"))?;

        if db::remove_reader(self.db, entry_id, user_id).await? {
            tracing::info!("Entry {} no longer shared with {}", entry_id, user_id);
        }

        self.reload(entry_id).await
    }

    async fn reload(&self, entry_id: Uuid) -> BackendResult<Entry> {
        entries_db::get_entry(self.db, entry_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Entry not found"))
    }

    /// Entries other users shared with `actor`, each with its owner's profile
    pub async fn shared_with_me(&self, actor: Uuid) -> BackendResult<Vec<SharedEntry>> {
        let entries = entries_db::list_entries_shared_with(self.db, actor).await?;

        let mut shared = Vec::with_capacity(entries.len());
        for entry in entries {
            match get_user_by_id(self.db, entry.created_by).await? {
                Some(owner) => shared.push(SharedEntry {
                    owner: owner.public(),
                    entry,
                }),
                None => tracing::warn!("Skipping entry {}: owner {} not found", entry.id, entry.created_by),
            }
        }
        Ok(shared)
    }

    pub async fn add_comment(&self, actor: Uuid, entry_id: Uuid, content: Option<&str>) -> BackendResult<CommentView> {
        let content = validate_comment(content)?;

        let entry = entries_db::get_entry(self.db, entry_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Entry not found"))?;
        if !can_comment(&entry, actor) {
            tracing::warn!("User {} may not comment on entry {}", actor, entry_id);
            return Err(BackendError::forbidden("You don't have permission to comment on this entry"));
        }

        let comment = db::insert_comment(self.db, entry_id, actor, content).await?;
        let view = db::get_comment_view(self.db, comment.id)
            .await?
            .ok_or_else(|| BackendError::internal(format!("comment {} missing after insert", comment.id)))?;
        tracing::info!("Comment {} added to entry {} by {}", comment.id, entry_id, actor);

        self.publisher
            .publish(RealtimeEvent::comment_added(entry_id, serde_json::to_value(&view)?));
        Ok(view)
    }

    pub async fn list_comments(&self, actor: Uuid, entry_id: Uuid) -> BackendResult<Vec<CommentView>> {
        let entry = entries_db::get_entry(self.db, entry_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Entry not found"))?;
        if !can_view(&entry, actor) {
            tracing::warn!("User {} may not view comments on entry {}", actor, entry_id);
            return Err(BackendError::forbidden("You don't have permission to view comments"));
        }

        Ok(db::list_comments_for_entry(self.db, entry_id).await?)
    }

    pub async fn delete_comment(&self, actor: Uuid, comment_id: Uuid) -> BackendResult<()> {
        let comment = db::get_comment_by_id(self.db, comment_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Comment not found"))?;
        if !can_delete_comment(&comment, actor) {
            return Err(BackendError::forbidden("You can only delete your own comments"));
        }

        db::delete_comment(self.db, comment_id).await?;
        tracing::info!("Comment {} deleted by {}", comment_id, actor);
        Ok(())
    }
}
