use std::collections::HashSet;

use chrono::{DateTime, Duration, Local, TimeZone};

use crate::diary_entry::{DiaryEntry, EntryDraft, EntryId, Mood};
use crate::error::{DiaryError, Result};
use crate::search;
use crate::stats::{Statistics, DEFAULT_RECENT_WINDOW_DAYS};

/// In-memory entries for one session. Newest entries come first.
#[derive(Debug, Default)]
pub struct DiaryState {
    entries: Vec<DiaryEntry>,
}

impl DiaryState {
    pub fn new() -> Self {
        DiaryState {
            entries: Vec::new(),
        }
    }

    /// Store holding `entries` in the given order. Later entries repeating an
    /// earlier id are dropped.
    pub fn with_entries(entries: Vec<DiaryEntry>) -> Self {
        let mut seen = HashSet::with_capacity(entries.len());
        let entries = entries
            .into_iter()
            .filter(|e| {
                let fresh = seen.insert(e.id);
                if !fresh {
                    tracing::warn!(id = %e.id, "dropping entry with duplicate id");
                }
                fresh
            })
            .collect();
        DiaryState { entries }
    }

    /// The three entries a fresh dashboard starts with.
    pub fn with_sample_entries() -> Self {
        let samples = [
            (
                "My First Day",
                "Today marked the beginning of my digital diary journey. I'm excited to capture my thoughts and memories in this beautiful space...",
                20,
                Mood::Excited,
            ),
            (
                "A Peaceful Morning",
                "Woke up to the sound of birds chirping outside my window. There's something magical about early mornings that fills me with gratitude...",
                22,
                Mood::Thoughtful,
            ),
            (
                "Weekend Adventures",
                "Spent the day exploring the local farmer's market. The vibrant colors of fresh produce and the warm smiles of vendors made my heart happy...",
                24,
                Mood::Happy,
            ),
        ];

        let entries = samples
            .into_iter()
            .map(|(title, content, day, mood)| {
                let date = Local
                    .with_ymd_and_hms(2024, 8, day, 0, 0, 0)
                    .earliest()
                    .unwrap_or_else(Local::now);
                DiaryEntry::from_draft(EntryDraft::new(title, content, Some(mood)), date)
            })
            .collect();
        DiaryState::with_entries(entries)
    }

    pub fn create(&mut self, draft: EntryDraft) -> Result<&DiaryEntry> {
        self.create_at(draft, Local::now())
    }

    /// Same as [`create`](Self::create) with an explicit creation date.
    pub fn create_at(&mut self, draft: EntryDraft, date: DateTime<Local>) -> Result<&DiaryEntry> {
        draft.validate()?;
        let entry = DiaryEntry::from_draft(draft, date);
        tracing::info!(id = %entry.id, "created diary entry");
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    /// Replaces title, content and mood in place. Date and position stay.
    pub fn update(&mut self, id: EntryId, draft: EntryDraft) -> Result<&DiaryEntry> {
        draft.validate()?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DiaryError::NotFound(id))?;
        entry.title = draft.title;
        entry.content = draft.content;
        entry.mood = draft.mood;
        tracing::info!(%id, "updated diary entry");
        Ok(&*entry)
    }

    /// Removes and returns the entry with `id`.
    pub fn delete(&mut self, id: EntryId) -> Result<DiaryEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(DiaryError::NotFound(id))?;
        tracing::info!(%id, "deleted diary entry");
        Ok(self.entries.remove(index))
    }

    pub fn list(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search_entries(&self, query: &str) -> Vec<&DiaryEntry> {
        let results = search::filter_entries(&self.entries, query);
        tracing::debug!(query, hits = results.len(), "searched entries");
        results
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics_at(Local::now(), Duration::days(DEFAULT_RECENT_WINDOW_DAYS))
    }

    pub fn statistics_at(&self, now: DateTime<Local>, window: Duration) -> Statistics {
        Statistics::compute(&self.entries, now, window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::error::Field;

    fn draft(title: &str, content: &str) -> EntryDraft {
        EntryDraft::new(title, content, None)
    }

    #[test]
    fn create_prepends_with_fresh_ids() {
        let mut state = DiaryState::new();
        let a = state.create(draft("A", "hello world")).unwrap().id;
        let b = state.create(draft("B", "second")).unwrap().id;
        assert_ne!(a, b);

        let titles: Vec<&str> = state.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn create_rejects_blank_fields_without_mutating() {
        let mut state = DiaryState::new();
        assert_matches!(
            state.create(draft("", "body")),
            Err(DiaryError::Validation(Field::Title))
        );
        assert_matches!(
            state.create(draft("title", "  ")),
            Err(DiaryError::Validation(Field::Content))
        );
        assert!(state.is_empty());
    }

    #[test]
    fn update_keeps_date_and_position() {
        let mut state = DiaryState::new();
        let first = state.create(draft("one", "1")).unwrap().id;
        state.create(draft("two", "2")).unwrap();
        state.create(draft("three", "3")).unwrap();
        let original_date = state.get(first).unwrap().date;

        let updated = state
            .update(first, EntryDraft::new("uno", "edited", Some(Mood::Sad)))
            .unwrap();
        assert_eq!(updated.title, "uno");
        assert_eq!(updated.content, "edited");
        assert_eq!(updated.mood, Some(Mood::Sad));
        assert_eq!(updated.date, original_date);

        assert_eq!(state.list()[2].id, first);
        assert_eq!(state.list().iter().filter(|e| e.id == first).count(), 1);
    }

    #[test]
    fn update_can_clear_mood() {
        let mut state = DiaryState::new();
        let id = state
            .create(EntryDraft::new("t", "c", Some(Mood::Happy)))
            .unwrap()
            .id;
        state.update(id, draft("t", "c")).unwrap();
        assert_eq!(state.get(id).unwrap().mood, None);
    }

    #[test]
    fn update_unknown_id_leaves_collection_unchanged() {
        let mut state = DiaryState::new();
        state.create(draft("A", "a")).unwrap();
        let before = state.list().to_vec();

        let missing = EntryId::new();
        assert_eq!(
            state.update(missing, draft("x", "y")).unwrap_err(),
            DiaryError::NotFound(missing)
        );
        assert_eq!(state.list(), before.as_slice());
    }

    #[test]
    fn update_validates_before_lookup() {
        let mut state = DiaryState::new();
        let id = state.create(draft("A", "a")).unwrap().id;
        assert_matches!(
            state.update(id, draft("A", "")),
            Err(DiaryError::Validation(Field::Content))
        );
        assert_eq!(state.get(id).unwrap().content, "a");
    }

    #[test]
    fn delete_twice_reports_not_found() {
        let mut state = DiaryState::new();
        let id = state.create(draft("A", "a")).unwrap().id;
        state.create(draft("B", "b")).unwrap();

        let removed = state.delete(id).unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(state.len(), 1);
        assert_eq!(state.delete(id).unwrap_err(), DiaryError::NotFound(id));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn with_entries_keeps_ids_unique() {
        let first = DiaryEntry::from_draft(draft("first", "a"), Local::now());
        let mut repeat = first.clone();
        repeat.title = "repeat".into();
        let other = DiaryEntry::from_draft(draft("other", "b"), Local::now());

        let mut state = DiaryState::with_entries(vec![first.clone(), other, repeat]);
        let titles: Vec<&str> = state.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "other"]);

        assert!(state.delete(first.id).is_ok());
        assert_eq!(state.delete(first.id).unwrap_err(), DiaryError::NotFound(first.id));
    }

    #[test]
    fn sample_entries_are_seeded_in_order() {
        let state = DiaryState::with_sample_entries();
        let titles: Vec<&str> = state.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["My First Day", "A Peaceful Morning", "Weekend Adventures"]
        );
        assert_eq!(state.list()[2].mood, Some(Mood::Happy));
    }

    #[test]
    fn statistics_follow_the_collection() {
        let mut state = DiaryState::new();
        assert_eq!(state.statistics(), Statistics::default());

        state.create(draft("A", "abcd")).unwrap();
        state
            .create_at(draft("B", "ab"), Local::now() - Duration::days(90))
            .unwrap();
        let stats = state.statistics();
        assert_eq!(stats.total_count, 2);
        assert_eq!(stats.recent_count, 1);
        assert_eq!(stats.average_content_length, 3);
    }
}
