//! Core library for Jotnotes — a small local note-taking application.
//!
//! The primary entry point is [`Notebook`], which wraps an open SQLite
//! database file holding a single `notes` table. Every read and write goes
//! through `Notebook` methods, each running in its own short session.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    error::{JotnotesError, Result},
    note::{Note, EMPTY_NOTE_PLACEHOLDER},
    notebook::Notebook,
    session::with_session,
    storage::Storage,
    validation::{validate_title, MAX_TITLE_CHARS},
};
