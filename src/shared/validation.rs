//! Request field validation
//!
//! Every check runs before any store access. Lengths count Unicode scalar
//! values.

use chrono::NaiveDate;

use crate::shared::entry::{EntryFields, EntryInput};
use crate::shared::error::SharedError;

pub const MAX_TITLE_CHARS: usize = 20;
pub const MAX_CONTENT_CHARS_ON_CREATE: usize = 10_000;
pub const MAX_CONTENT_CHARS_ON_UPDATE: usize = 1_500;
pub const MAX_COMMENT_CHARS: usize = 500;
pub const MAX_SEARCH_CHARS: usize = 100;

/// Which operation an [`EntryInput`] is validated for
///
/// Updates accept much less content than creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOperation {
    Create,
    Update,
}

impl EntryOperation {
    pub fn max_content_chars(self) -> usize {
        match self {
            EntryOperation::Create => MAX_CONTENT_CHARS_ON_CREATE,
            EntryOperation::Update => MAX_CONTENT_CHARS_ON_UPDATE,
        }
    }

    fn content_too_long_message(self) -> &'static str {
        match self {
            EntryOperation::Create => "Content length should not be more than 10,000 characters",
            EntryOperation::Update => "Content length should not be more than 1500 characters",
        }
    }
}

/// Parse a calendar date
///
/// Accepts `YYYY-MM-DD` and `YYYY/MM/DD` only. Timestamps are rejected.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
        .ok()
}

/// Check an entry body, in the order: required fields, date, title, content
pub fn validate_entry(input: &EntryInput, operation: EntryOperation) -> Result<EntryFields, SharedError> {
    let title = input.title.as_deref().filter(|t| !t.is_empty());
    let content = input.content.as_deref().filter(|c| !c.is_empty());
    let (Some(title), Some(content)) = (title, content) else {
        return Err(SharedError::validation(
            "title",
            "Please submit with required fields!",
        ));
    };

    let date = input
        .date
        .as_deref()
        .and_then(parse_entry_date)
        .ok_or_else(|| SharedError::validation("date", "Please provide a valid date!"))?;

    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(SharedError::validation(
            "title",
            "Title length should not be more than 20 characters!",
        ));
    }

    if content.chars().count() > operation.max_content_chars() {
        return Err(SharedError::validation(
            "content",
            operation.content_too_long_message(),
        ));
    }

    Ok(EntryFields {
        date,
        title: title.to_string(),
        content: content.to_string(),
    })
}

/// Check a comment body and return it unchanged
pub fn validate_comment(content: Option<&str>) -> Result<&str, SharedError> {
    let content = content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| SharedError::validation("content", "Comment cannot be empty"))?;

    if content.chars().count() > MAX_COMMENT_CHARS {
        return Err(SharedError::validation(
            "content",
            "Comment must be less than 500 characters",
        ));
    }

    Ok(content)
}

/// Check a search query
///
/// A blank query is a malformed request rather than a field violation.
pub fn validate_search(text: Option<&str>) -> Result<&str, SharedError> {
    let text = text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| SharedError::invalid_request("Search text is required!"))?;

    if text.chars().count() > MAX_SEARCH_CHARS {
        return Err(SharedError::validation(
            "text",
            "Search string cannot exceed 100 characters!",
        ));
    }

    Ok(text)
}
