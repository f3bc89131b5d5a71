//! Error types for diary operations.
//!
//! Store and session failures are typed here; the binary and the terminal
//! UI wrap them in `color_eyre` reports.

use thiserror::Error;

use crate::diary_entry::EntryId;

/// Result type alias for diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Which draft field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Title => f.write_str("title"),
            Field::Content => f.write_str("content"),
        }
    }
}

/// Core error type for entry store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiaryError {
    /// A required draft field was blank
    #[error("Validation error: {0} must not be empty")]
    Validation(Field),

    /// No entry carries the given id
    #[error("Not found: entry {0}")]
    NotFound(EntryId),
}

/// Simulated authentication failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("email and password are both required")]
    MissingCredentials,
}

/// A simulated-latency operation was cancelled before it completed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("operation cancelled")]
pub struct Cancelled;
