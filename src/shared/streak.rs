//! Streak Tracker
//!
//! A streak counts consecutive calendar days with at least one entry. The
//! transition only looks at the day of the previous entry and the day of the
//! new one:
//!
//! - first entry ever: `(current, longest) = (1, 1)`
//! - same day: no change
//! - next day: `current + 1`, `longest` raised to match if needed
//! - anything else, including a backdated entry: `current` resets to `1`
//!
//! A backdated entry moves `last_entry_date` backwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak fields carried on a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub last_entry_date: Option<NaiveDate>,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Outcome of recording an entry against a streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakUpdate {
    /// Same-day entry; nothing to persist
    Unchanged,
    Changed(StreakState),
}

impl StreakUpdate {
    /// The resulting state, given the state the update was computed from
    pub fn resolve(self, previous: StreakState) -> StreakState {
        match self {
            StreakUpdate::Unchanged => previous,
            StreakUpdate::Changed(next) => next,
        }
    }
}

/// Record an entry dated `entry_date` against `state`
pub fn update_streak(state: StreakState, entry_date: NaiveDate) -> StreakUpdate {
    let Some(last) = state.last_entry_date else {
        return StreakUpdate::Changed(StreakState {
            last_entry_date: Some(entry_date),
            current_streak: 1,
            longest_streak: 1,
        });
    };

    match (entry_date - last).num_days() {
        0 => StreakUpdate::Unchanged,
        1 => {
            let current_streak = state.current_streak + 1;
            StreakUpdate::Changed(StreakState {
                last_entry_date: Some(entry_date),
                current_streak,
                longest_streak: state.longest_streak.max(current_streak),
            })
        }
        _ => StreakUpdate::Changed(StreakState {
            last_entry_date: Some(entry_date),
            current_streak: 1,
            longest_streak: state.longest_streak,
        }),
    }
}
