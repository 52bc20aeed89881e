//! Permission Model
//!
//! Pure predicates over an entry snapshot and the acting user. Nothing here
//! touches the store.
//!
//! | action           | allowed for                      |
//! |------------------|----------------------------------|
//! | view / comment   | owner, `shared_with` members     |
//! | edit             | owner, `can_edit` members        |
//! | delete / sharing | owner                            |
//! | delete a comment | the comment's author             |

use uuid::Uuid;

use crate::shared::comment::Comment;
use crate::shared::entry::Entry;

pub fn is_owner(entry: &Entry, user_id: Uuid) -> bool {
    entry.created_by == user_id
}

pub fn can_view(entry: &Entry, user_id: Uuid) -> bool {
    is_owner(entry, user_id) || entry.shared_with.contains(&user_id)
}

/// An edit grant does not require read access to have been granted
pub fn can_edit(entry: &Entry, user_id: Uuid) -> bool {
    is_owner(entry, user_id) || entry.can_edit.contains(&user_id)
}

pub fn can_delete(entry: &Entry, user_id: Uuid) -> bool {
    is_owner(entry, user_id)
}

pub fn can_comment(entry: &Entry, user_id: Uuid) -> bool {
    can_view(entry, user_id)
}

pub fn can_manage_sharing(entry: &Entry, user_id: Uuid) -> bool {
    is_owner(entry, user_id)
}

/// The entry owner has no override here
pub fn can_delete_comment(comment: &Comment, user_id: Uuid) -> bool {
    comment.author == user_id
}
