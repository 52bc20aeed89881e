//! Shared Module
//!
//! Domain types and pure journaling logic. Nothing in here performs I/O, so
//! everything compiles without the `ssr` feature and is tested in isolation.
//!
//! # Overview
//!
//! - Entry, user and comment types with their JSON shapes
//! - Sentiment classification, streak transitions and permission predicates
//! - Request validation, mood analytics and export rendering
//! - Real-time event payloads

/// Journal entry types
pub mod entry;

/// User profile types
pub mod user;

/// Comment types
pub mod comment;

/// `{message, data}` response envelope
pub mod response;

/// Shared error types
pub mod error;

/// Lexicon-based sentiment classifier
pub mod sentiment;

/// Daily writing streak
pub mod streak;

/// Who may do what with an entry
pub mod permissions;

/// Request field validation
pub mod validation;

/// Real-time event system
pub mod event;

/// Mood analytics
pub mod analytics;

/// Entry export rendering
pub mod export;

/// Re-export commonly used types for convenience
pub use comment::{AddCommentRequest, Comment, CommentView};
pub use entry::{Entry, EntryFields, EntryInput, Intensity, Mood, Sentiment, SharedEntry};
pub use error::SharedError;
pub use event::{EventType, RealtimeEvent, UserStatus};
pub use response::ApiResponse;
pub use sentiment::{classify, AfinnLexicon, Classification, LexiconScorer};
pub use streak::{update_streak, StreakState, StreakUpdate};
pub use user::{PublicUser, UserProfile};
