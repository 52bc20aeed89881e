//! Rendering a user's entries as a downloadable file

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::shared::entry::Entry;
use crate::shared::error::SharedError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Text,
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(SharedError::validation(
                "format",
                "Export format must be one of json, text or markdown",
            )),
        }
    }
}

/// A rendered export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

/// `daybook-entries-YYYY-MM-DD.<ext>`
pub fn export_filename(format: ExportFormat, today: NaiveDate) -> String {
    format!("daybook-entries-{}.{}", today.format("%Y-%m-%d"), format.extension())
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn render_text(entries: &[Entry], exported_at: DateTime<Utc>) -> String {
    let rule = "=".repeat(50);
    let divider = "-".repeat(50);
    let mut out = format!(
        "DAYBOOK ENTRIES EXPORT\nExported on: {}\nTotal entries: {}\n{rule}\n\n",
        timestamp(exported_at),
        entries.len(),
    );
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "Entry #{}\nDate: {}\nTitle: {}\nMood: {}\nContent:\n{}\nLast Updated: {}\n{divider}\n\n",
            index + 1,
            entry.date,
            entry.title,
            entry.mood,
            entry.content,
            timestamp(entry.updated_at),
        ));
    }
    out
}

fn render_markdown(entries: &[Entry], exported_at: DateTime<Utc>) -> String {
    let mut out = format!(
        "# DayBook Entries Export\n\n**Exported on:** {}  \n**Total entries:** {}\n\n---\n\n",
        timestamp(exported_at),
        entries.len(),
    );
    for entry in entries {
        out.push_str(&format!(
            "## {mood} {title}\n\n**Date:** {date}  \n**Mood:** {mood}  \n**Last Updated:** {updated}\n\n{content}\n\n---\n\n",
            mood = entry.mood,
            title = entry.title,
            date = entry.date,
            updated = timestamp(entry.updated_at),
            content = entry.content,
        ));
    }
    out
}

/// Render `entries` in the given order
pub fn render(
    format: ExportFormat,
    entries: &[Entry],
    exported_at: DateTime<Utc>,
) -> Result<ExportFile, SharedError> {
    let body = match format {
        ExportFormat::Json => serde_json::to_string_pretty(entries)?,
        ExportFormat::Text => render_text(entries, exported_at),
        ExportFormat::Markdown => render_markdown(entries, exported_at),
    };
    Ok(ExportFile {
        filename: export_filename(format, exported_at.date_naive()),
        content_type: format.content_type(),
        body,
    })
}
