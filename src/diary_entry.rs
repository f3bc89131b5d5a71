use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};
use uuid::Uuid;

use crate::error::{DiaryError, Field, Result};

/// Opaque entry identifier, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        EntryId(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(EntryId)
    }
}

/// Emotional tone of an entry. Variant order is the editor's picker order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mood {
    Happy,
    Excited,
    Thoughtful,
    Neutral,
    Sad,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Excited => "Excited",
            Mood::Thoughtful => "Thoughtful",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
        }
    }

    /// Emoji shown next to the mood in the editor's picker.
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Excited => "🎉",
            Mood::Thoughtful => "🤔",
            Mood::Neutral => "😐",
            Mood::Sad => "😢",
        }
    }

    /// Moods in picker order.
    pub fn all() -> impl Iterator<Item = Mood> {
        Mood::iter()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Icon used for an entry in the list view. Only four moods have a list
/// icon; neutral and unset entries get the memo.
pub fn list_icon(mood: Option<Mood>) -> &'static str {
    match mood {
        Some(Mood::Happy) => "😊",
        Some(Mood::Sad) => "😢",
        Some(Mood::Excited) => "🎉",
        Some(Mood::Thoughtful) => "🤔",
        Some(Mood::Neutral) | None => "📝",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    pub date: DateTime<Local>,
    pub mood: Option<Mood>,
}

impl DiaryEntry {
    /// Builds an entry from an already validated draft.
    pub(crate) fn from_draft(draft: EntryDraft, date: DateTime<Local>) -> Self {
        DiaryEntry {
            id: EntryId::new(),
            title: draft.title,
            content: draft.content,
            date,
            mood: draft.mood,
        }
    }

    /// First line of the content, for one-line previews.
    pub fn preview(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}

/// Title, content and mood as typed into the editor form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub mood: Option<Mood>,
}

impl EntryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, mood: Option<Mood>) -> Self {
        EntryDraft {
            title: title.into(),
            content: content.into(),
            mood,
        }
    }

    pub fn from_entry(entry: &DiaryEntry) -> Self {
        EntryDraft {
            title: entry.title.clone(),
            content: entry.content.clone(),
            mood: entry.mood,
        }
    }

    /// Both title and content need some non-whitespace text.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(DiaryError::Validation(Field::Title));
        }
        if self.content.trim().is_empty() {
            return Err(DiaryError::Validation(Field::Content));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn mood_parses_case_insensitively() {
        assert_eq!("happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!("Thoughtful".parse::<Mood>().unwrap(), Mood::Thoughtful);
        assert!("angry".parse::<Mood>().is_err());
    }

    #[test]
    fn mood_serializes_lowercase() {
        let json = serde_json::to_string(&Mood::Excited).unwrap();
        assert_eq!(json, "\"excited\"");
        assert_eq!(Mood::Sad.to_string(), "sad");
    }

    #[test]
    fn picker_order_is_fixed() {
        let order: Vec<Mood> = Mood::all().collect();
        assert_eq!(
            order,
            vec![
                Mood::Happy,
                Mood::Excited,
                Mood::Thoughtful,
                Mood::Neutral,
                Mood::Sad
            ]
        );
    }

    #[test]
    fn neutral_has_no_list_icon() {
        assert_eq!(list_icon(Some(Mood::Neutral)), list_icon(None));
        assert_ne!(list_icon(Some(Mood::Happy)), list_icon(None));
    }

    #[test]
    fn blank_title_or_content_is_rejected() {
        assert_matches!(
            EntryDraft::new("   ", "body", None).validate(),
            Err(DiaryError::Validation(Field::Title))
        );
        assert_matches!(
            EntryDraft::new("title", "\n\t", None).validate(),
            Err(DiaryError::Validation(Field::Content))
        );
        assert!(EntryDraft::new(" t ", " c ", Some(Mood::Sad)).validate().is_ok());
    }

    #[test]
    fn entry_id_round_trips_through_display() {
        let id = EntryId::new();
        assert_eq!(id.to_string().parse::<EntryId>().unwrap(), id);
    }
}
