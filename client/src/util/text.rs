//! Derived display data for journal entries.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use chrono::{DateTime, Local, TimeZone, Utc};

pub const PREVIEW_CHARS: usize = 40;
pub const UNTITLED: &str = "Untitled Entry";

/// Whitespace-separated word count.
#[must_use]
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

#[must_use]
pub fn word_count_label(content: &str) -> String {
    format!("{} words", word_count(content))
}

/// First [`PREVIEW_CHARS`] characters of `content`.
#[must_use]
pub fn preview(content: &str) -> &str {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

#[must_use]
pub fn display_title(title: &str) -> &str {
    if title.trim().is_empty() { UNTITLED } else { title }
}

/// Creation date as `M/D/YYYY` in the browser's local zone.
#[must_use]
pub fn format_date(created_at: Option<DateTime<Utc>>) -> String {
    created_at.map_or_else(String::new, |dt| format_date_in(&dt, &Local))
}

/// Creation time as `HH:MM AM` in the browser's local zone.
#[must_use]
pub fn format_time(created_at: Option<DateTime<Utc>>) -> String {
    created_at.map_or_else(String::new, |dt| format_time_in(&dt, &Local))
}

pub(crate) fn format_date_in<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%-m/%-d/%Y").to_string()
}

pub(crate) fn format_time_in<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format("%I:%M %p").to_string()
}
