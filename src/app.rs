//! Dashboard controller: owns the store for one signed-in session and
//! tracks which screen is showing. The UI calls these methods in response
//! to keys and never mutates the store itself.

use chrono::Local;

use crate::config::AppConfig;
use crate::diary_entry::{DiaryEntry, EntryDraft, EntryId};
use crate::diary_state::DiaryState;
use crate::error::{DiaryError, Result};
use crate::session::Session;
use crate::stats::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Entry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Creating,
    Editing(EntryId),
}

/// Short confirmation shown after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EntryCreated,
    EntryUpdated,
    EntryDeleted,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::EntryCreated => "Entry created!",
            Notice::EntryUpdated => "Entry updated!",
            Notice::EntryDeleted => "Entry deleted",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Notice::EntryCreated | Notice::EntryUpdated => {
                "Your diary entry has been saved successfully."
            }
            Notice::EntryDeleted => "Your diary entry has been permanently deleted.",
        }
    }
}

#[derive(Debug)]
pub struct DiaryApp {
    session: Session,
    state: DiaryState,
    config: AppConfig,
    view_mode: ViewMode,
    editor_mode: Option<EditorMode>,
    search_query: String,
}

impl DiaryApp {
    pub fn new(session: Session, config: AppConfig) -> Self {
        let state = if config.seed_sample_entries {
            DiaryState::with_sample_entries()
        } else {
            DiaryState::new()
        };
        Self::with_state(session, state, config)
    }

    pub fn with_state(session: Session, state: DiaryState, config: AppConfig) -> Self {
        DiaryApp {
            session,
            state,
            config,
            view_mode: ViewMode::List,
            editor_mode: None,
            search_query: String::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> &DiaryState {
        &self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn editor_mode(&self) -> Option<EditorMode> {
        self.editor_mode
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn visible_entries(&self) -> Vec<&DiaryEntry> {
        self.state.search_entries(&self.search_query)
    }

    pub fn statistics(&self) -> Statistics {
        self.state
            .statistics_at(Local::now(), self.config.recent_window())
    }

    pub fn empty_hint(&self) -> &'static str {
        if self.search_query.is_empty() {
            "Start writing your first diary entry"
        } else {
            "Try a different search term"
        }
    }

    pub fn begin_create(&mut self) {
        self.editor_mode = Some(EditorMode::Creating);
        self.view_mode = ViewMode::Entry;
    }

    pub fn begin_edit(&mut self, id: EntryId) -> Result<&DiaryEntry> {
        let entry = self.state.get(id).ok_or(DiaryError::NotFound(id))?;
        self.editor_mode = Some(EditorMode::Editing(id));
        self.view_mode = ViewMode::Entry;
        Ok(entry)
    }

    /// Entry being edited, if any.
    pub fn current_entry(&self) -> Option<&DiaryEntry> {
        match self.editor_mode {
            Some(EditorMode::Editing(id)) => self.state.get(id),
            _ => None,
        }
    }

    pub fn back_to_list(&mut self) {
        self.editor_mode = None;
        self.view_mode = ViewMode::List;
    }

    /// Applies the editor form. On error the editor stays open.
    pub fn save(&mut self, draft: EntryDraft) -> Result<Notice> {
        let notice = match self.editor_mode {
            Some(EditorMode::Editing(id)) => {
                self.state.update(id, draft)?;
                Notice::EntryUpdated
            }
            Some(EditorMode::Creating) | None => {
                self.state.create(draft)?;
                Notice::EntryCreated
            }
        };
        self.back_to_list();
        Ok(notice)
    }

    /// Deletes the entry open in the editor once the user has answered the
    /// confirmation prompt. Declining leaves everything as it was.
    pub fn delete_current(&mut self, confirmed: bool) -> Result<Option<Notice>> {
        let Some(EditorMode::Editing(id)) = self.editor_mode else {
            return Ok(None);
        };
        if !confirmed {
            tracing::debug!(%id, "delete declined");
            return Ok(None);
        }
        self.state.delete(id)?;
        self.back_to_list();
        Ok(Some(Notice::EntryDeleted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use crate::session::{authenticate, Credentials};
    use assert_matches::assert_matches;

    fn app(seed: bool) -> DiaryApp {
        let session = authenticate(&Credentials {
            email: "sam@example.com".into(),
            password: "pw".into(),
        })
        .unwrap();
        let config = AppConfig {
            seed_sample_entries: seed,
            ..AppConfig::default()
        };
        DiaryApp::new(session, config)
    }

    #[test]
    fn starts_on_list_with_samples() {
        let app = app(true);
        assert_eq!(app.view_mode(), ViewMode::List);
        assert_eq!(app.state().len(), 3);
        assert_eq!(app.session().display_name(), "sam");
    }

    #[test]
    fn create_flow_returns_to_list() {
        let mut app = app(false);
        app.begin_create();
        assert_eq!(app.view_mode(), ViewMode::Entry);
        assert_eq!(app.editor_mode(), Some(EditorMode::Creating));

        let notice = app.save(EntryDraft::new("A", "hello", None)).unwrap();
        assert_eq!(notice, Notice::EntryCreated);
        assert_eq!(app.view_mode(), ViewMode::List);
        assert_eq!(app.editor_mode(), None);
        assert_eq!(app.state().list()[0].title, "A");
    }

    #[test]
    fn invalid_save_keeps_editor_open() {
        let mut app = app(false);
        app.begin_create();
        assert_matches!(
            app.save(EntryDraft::new("A", " ", None)),
            Err(DiaryError::Validation(Field::Content))
        );
        assert_eq!(app.view_mode(), ViewMode::Entry);
        assert!(app.state().is_empty());
    }

    #[test]
    fn edit_flow_updates_in_place() {
        let mut app = app(true);
        let id = app.state().list()[1].id;
        let entry = app.begin_edit(id).unwrap();
        assert_eq!(entry.title, "A Peaceful Morning");

        let notice = app.save(EntryDraft::new("Calm", "quiet", None)).unwrap();
        assert_eq!(notice, Notice::EntryUpdated);
        assert_eq!(app.state().list()[1].title, "Calm");
        assert_eq!(app.state().len(), 3);
    }

    #[test]
    fn begin_edit_unknown_id_is_not_found() {
        let mut app = app(false);
        let missing = EntryId::new();
        assert_matches!(app.begin_edit(missing), Err(DiaryError::NotFound(id)) if id == missing);
        assert_eq!(app.view_mode(), ViewMode::List);
    }

    #[test]
    fn declined_delete_is_a_no_op() {
        let mut app = app(true);
        let id = app.state().list()[0].id;
        app.begin_edit(id).unwrap();

        assert_eq!(app.delete_current(false).unwrap(), None);
        assert_eq!(app.state().len(), 3);
        assert_eq!(app.view_mode(), ViewMode::Entry);

        assert_eq!(app.delete_current(true).unwrap(), Some(Notice::EntryDeleted));
        assert_eq!(app.state().len(), 2);
        assert!(app.state().get(id).is_none());
        assert_eq!(app.view_mode(), ViewMode::List);
    }

    #[test]
    fn delete_needs_an_open_entry() {
        let mut app = app(true);
        app.begin_create();
        assert_eq!(app.delete_current(true).unwrap(), None);
        assert_eq!(app.state().len(), 3);
    }

    #[test]
    fn search_query_drives_visible_entries_and_hint() {
        let mut app = app(true);
        assert_eq!(app.visible_entries().len(), 3);
        assert_eq!(app.empty_hint(), "Start writing your first diary entry");

        app.set_search_query("MARKET");
        let titles: Vec<&str> = app
            .visible_entries()
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Weekend Adventures"]);

        app.set_search_query("nothing like this");
        assert!(app.visible_entries().is_empty());
        assert_eq!(app.empty_hint(), "Try a different search term");
    }

    #[test]
    fn samples_are_not_recent() {
        let app = app(true);
        let stats = app.statistics();
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.recent_count, 0);
    }
}
