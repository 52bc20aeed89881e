//! Mood analytics over a user's entries

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::entry::{Entry, Mood};

/// Count and share of one mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStat {
    pub mood: Mood,
    pub count: usize,
    /// Percentage of all entries, one decimal place
    pub percentage: f64,
}

/// Average sentiment score for a calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// `YYYY-MM`
    pub month: String,
    /// Two decimal places
    pub avg_score: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalytics {
    pub total_entries: usize,
    /// Two decimal places; 0 without entries
    pub average_score: f64,
    /// `None` without entries; ties go to the later mood in [`Mood::ALL`]
    pub most_common_mood: Option<Mood>,
    /// One row per mood, in [`Mood::ALL`] order
    pub moods: Vec<MoodStat>,
    /// Ascending by month
    pub monthly_trend: Vec<MonthlyTrend>,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn summarize(entries: &[Entry]) -> MoodAnalytics {
    let total = entries.len();

    let moods: Vec<MoodStat> = Mood::ALL
        .into_iter()
        .map(|mood| {
            let count = entries.iter().filter(|e| e.mood == mood).count();
            let percentage = if total == 0 {
                0.0
            } else {
                round_to(count as f64 * 100.0 / total as f64, 1)
            };
            MoodStat { mood, count, percentage }
        })
        .collect();

    let most_common_mood = if total == 0 {
        None
    } else {
        moods.iter().max_by_key(|stat| stat.count).map(|stat| stat.mood)
    };

    let score_sum: i64 = entries.iter().map(|e| i64::from(e.sentiment.score)).sum();
    let average_score = if total == 0 {
        0.0
    } else {
        round_to(score_sum as f64 / total as f64, 2)
    };

    let mut months: BTreeMap<String, (i64, usize)> = BTreeMap::new();
    for entry in entries {
        let slot = months.entry(entry.date.format("%Y-%m").to_string()).or_default();
        slot.0 += i64::from(entry.sentiment.score);
        slot.1 += 1;
    }
    let monthly_trend = months
        .into_iter()
        .map(|(month, (sum, count))| MonthlyTrend {
            month,
            avg_score: round_to(sum as f64 / count as f64, 2),
            count,
        })
        .collect();

    MoodAnalytics {
        total_entries: total,
        average_score,
        most_common_mood,
        moods,
        monthly_trend,
    }
}
