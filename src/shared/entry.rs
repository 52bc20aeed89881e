//! Journal entry types
//!
//! An [`Entry`] is a single dated journal record owned by one user. Its
//! [`Mood`] and [`Sentiment`] are derived from the entry text and are never
//! set by the client.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::user::PublicUser;

/// Emoji-coded mood category, ordered from most to least positive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "😄")]
    Elated,
    #[serde(rename = "🙂")]
    Content,
    #[default]
    #[serde(rename = "😐")]
    Neutral,
    #[serde(rename = "😔")]
    Down,
    #[serde(rename = "😢")]
    Upset,
}

impl Mood {
    /// Every mood, in display order
    pub const ALL: [Mood; 5] = [
        Mood::Elated,
        Mood::Content,
        Mood::Neutral,
        Mood::Down,
        Mood::Upset,
    ];

    /// The emoji stored and sent over the wire
    pub fn symbol(self) -> &'static str {
        match self {
            Mood::Elated => "😄",
            Mood::Content => "🙂",
            Mood::Neutral => "😐",
            Mood::Down => "😔",
            Mood::Upset => "😢",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Mood {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.symbol() == s)
            .ok_or_else(|| SharedError::unknown("mood", s))
    }
}

/// Sentiment intensity label paired with each [`Mood`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[default]
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

impl Intensity {
    pub const ALL: [Intensity; 5] = [
        Intensity::VeryPositive,
        Intensity::Positive,
        Intensity::Neutral,
        Intensity::Negative,
        Intensity::VeryNegative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Intensity::VeryPositive => "very positive",
            Intensity::Positive => "positive",
            Intensity::Neutral => "neutral",
            Intensity::Negative => "negative",
            Intensity::VeryNegative => "very negative",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Intensity {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::ALL
            .into_iter()
            .find(|intensity| intensity.label() == s)
            .ok_or_else(|| SharedError::unknown("intensity", s))
    }
}

/// Sentiment analysis result stored on an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Signed lexicon score
    pub score: i32,
    pub intensity: Intensity,
    /// Score normalised by token count; absent for empty text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparative: Option<f64>,
}

/// A journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    /// Owner; immutable after creation
    pub created_by: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub sentiment: Sentiment,
    /// Users with read access
    pub shared_with: Vec<Uuid>,
    /// Users with edit access
    pub can_edit: Vec<Uuid>,
    pub is_favorite: bool,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An entry shared with the caller, together with its owner's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedEntry {
    #[serde(flatten)]
    pub entry: Entry,
    pub owner: PublicUser,
}

/// Body of `POST /api/entries` and `PUT /api/entries/{id}`
///
/// Fields are optional so that missing values surface as validation errors
/// with a readable message instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryInput {
    pub date: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Validated entry fields, ready to be classified and stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
}

impl EntryFields {
    /// Text fed to the sentiment classifier
    pub fn sentiment_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}
