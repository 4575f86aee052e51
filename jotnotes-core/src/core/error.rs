//! Error types for the Jotnotes core library.

use thiserror::Error;

/// All errors that can occur within the Jotnotes core library.
#[derive(Debug, Error)]
pub enum JotnotesError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A note ID was requested that does not exist in the database.
    #[error("Note not found: {0}")]
    NoteNotFound(i64),

    /// User input was rejected before reaching the database.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The opened file is a SQLite database but not a Jotnotes one.
    #[error("Invalid database: {0}")]
    InvalidDatabase(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias that pins the error type to [`JotnotesError`].
pub type Result<T> = std::result::Result<T, JotnotesError>;

impl JotnotesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::NoteNotFound(_) => "Note no longer exists".to_string(),
            Self::ValidationFailed(msg) => msg.clone(),
            Self::InvalidDatabase(_) => "Could not open notes database".to_string(),
            Self::Io(e) => format!("File error: {e}"),
        }
    }
}
