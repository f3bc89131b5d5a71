//! Summary figures shown above the entry list, plus the live word and
//! character counters in the editor.

use chrono::{DateTime, Duration, Local};
use serde::Serialize;

use crate::diary_entry::DiaryEntry;

pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_count: usize,
    /// Entries dated within the trailing window.
    pub recent_count: usize,
    /// Mean content length in characters, rounded; 0 for no entries.
    pub average_content_length: usize,
}

impl Statistics {
    pub fn compute<'a, I>(entries: I, now: DateTime<Local>, window: Duration) -> Self
    where
        I: IntoIterator<Item = &'a DiaryEntry>,
    {
        // A window reaching past the earliest representable date covers everything.
        let cutoff = now.checked_sub_signed(window);
        let mut stats = Statistics::default();
        let mut total_chars = 0usize;

        for entry in entries {
            stats.total_count += 1;
            if cutoff.map_or(true, |cutoff| entry.date >= cutoff) {
                stats.recent_count += 1;
            }
            total_chars += entry.content.chars().count();
        }

        if stats.total_count > 0 {
            stats.average_content_length =
                (total_chars as f64 / stats.total_count as f64).round() as usize;
        }
        stats
    }
}

/// Counters shown under the editor's content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub word_count: usize,
    pub char_count: usize,
}

impl TextMetrics {
    pub fn of(content: &str) -> Self {
        TextMetrics {
            word_count: content.split_whitespace().count(),
            char_count: content.chars().count(),
        }
    }
}
