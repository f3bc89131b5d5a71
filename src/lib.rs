//! Mood Diary: a terminal journal whose entries live only for the session.
//!
//! The store, search and statistics are plain library code; `ui` and `cli`
//! wrap them in a ratatui front end.

pub mod app;
pub mod cli;
pub mod config;
pub mod diary_entry;
pub mod diary_state;
pub mod error;
pub mod input;
pub mod latency;
pub mod search;
pub mod session;
pub mod stats;
pub mod ui;

pub use app::{DiaryApp, EditorMode, Notice, ViewMode};
pub use config::AppConfig;
pub use diary_entry::{DiaryEntry, EntryDraft, EntryId, Mood};
pub use diary_state::DiaryState;
pub use error::{DiaryError, Result};
pub use stats::Statistics;
