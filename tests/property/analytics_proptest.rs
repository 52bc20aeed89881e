//! Property-based tests for mood analytics

use chrono::{NaiveDate, Utc};
use daybook::shared::analytics::summarize;
use daybook::shared::{Entry, Mood, Sentiment};
use proptest::prelude::*;
use uuid::Uuid;

fn entry_with(mood: Mood, score: i32, day_offset: u32) -> Entry {
    let now = Utc::now();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(u64::from(day_offset));
    Entry {
        id: Uuid::new_v4(),
        created_by: Uuid::nil(),
        date,
        title: "t".to_string(),
        content: "c".to_string(),
        mood,
        sentiment: Sentiment {
            score,
            ..Sentiment::default()
        },
        shared_with: Vec::new(),
        can_edit: Vec::new(),
        is_favorite: false,
        is_public: false,
        created_at: now,
        updated_at: now,
    }
}

proptest! {
    #[test]
    fn prop_analytics_counts_add_up(
        rows in prop::collection::vec((0usize..5, -10i32..10, 0u32..400), 1..40)
    ) {
        let entries: Vec<Entry> = rows
            .iter()
            .map(|&(mood, score, day)| entry_with(Mood::ALL[mood], score, day))
            .collect();
        let summary = summarize(&entries);

        prop_assert_eq!(summary.total_entries, entries.len());
        let counted: usize = summary.moods.iter().map(|m| m.count).sum();
        prop_assert_eq!(counted, entries.len());
        let per_month: usize = summary.monthly_trend.iter().map(|m| m.count).sum();
        prop_assert_eq!(per_month, entries.len());
        prop_assert!(summary.most_common_mood.is_some());
        let months: Vec<&String> = summary.monthly_trend.iter().map(|m| &m.month).collect();
        prop_assert!(months.windows(2).all(|w| w[0] < w[1]));
    }
}
