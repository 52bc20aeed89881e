//! Sentiment Classifier
//!
//! Scores text with a [`LexiconScorer`] and maps the integer score onto one of
//! five (mood, intensity) buckets:
//!
//! | score      | mood | intensity     |
//! |------------|------|---------------|
//! | `> 3`      | 😄   | very positive |
//! | `> 1`      | 🙂   | positive      |
//! | `> -1`     | 😐   | neutral       |
//! | `> -3`     | 😔   | negative      |
//! | otherwise  | 😢   | very negative |
//!
//! Boundary scores fall into the lower-magnitude bucket, so `3` is positive
//! and `1` is neutral.
//!
//! # Example
//!
//! ```rust
//! use daybook::shared::sentiment::{classify, AfinnLexicon};
//! use daybook::shared::entry::Mood;
//!
//! let lexicon = AfinnLexicon::new();
//! let result = classify(&lexicon, "Great day, wonderful people");
//! assert_eq!(result.mood, Mood::Elated);
//! ```

mod lexicon;

pub use lexicon::AfinnLexicon;

use crate::shared::entry::{Intensity, Mood, Sentiment};

/// Raw output of a lexicon scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScore {
    pub score: i32,
    /// Score divided by the number of tokens
    pub comparative: f64,
}

/// Text → polarity scorer
pub trait LexiconScorer: Send + Sync {
    fn analyze(&self, text: &str) -> RawScore;
}

/// Result of classifying a piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub score: i32,
    pub mood: Mood,
    pub intensity: Intensity,
    pub comparative: Option<f64>,
}

impl Classification {
    /// The neutral result returned for empty text
    pub const NEUTRAL: Classification = Classification {
        score: 0,
        mood: Mood::Neutral,
        intensity: Intensity::Neutral,
        comparative: None,
    };

    /// Sentiment block stored on an entry
    pub fn sentiment(&self) -> Sentiment {
        Sentiment {
            score: self.score,
            intensity: self.intensity,
            comparative: self.comparative,
        }
    }
}

/// Map a score onto its (mood, intensity) bucket
pub fn bucket(score: i32) -> (Mood, Intensity) {
    if score > 3 {
        (Mood::Elated, Intensity::VeryPositive)
    } else if score > 1 {
        (Mood::Content, Intensity::Positive)
    } else if score > -1 {
        (Mood::Neutral, Intensity::Neutral)
    } else if score > -3 {
        (Mood::Down, Intensity::Negative)
    } else {
        (Mood::Upset, Intensity::VeryNegative)
    }
}

/// Classify `text` with `scorer`
pub fn classify<S: LexiconScorer + ?Sized>(scorer: &S, text: &str) -> Classification {
    if text.is_empty() {
        return Classification::NEUTRAL;
    }

    let raw = scorer.analyze(text);
    let (mood, intensity) = bucket(raw.score);

    Classification {
        score: raw.score,
        mood,
        intensity,
        comparative: Some(raw.comparative),
    }
}
