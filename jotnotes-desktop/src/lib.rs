//! Desktop front-end for Jotnotes.
//!
//! [`state`] holds the page logic, [`app`] renders it with iced and
//! [`settings`] persists user preferences between runs.

pub mod app;
pub mod settings;
pub mod state;

// Re-export core library
pub use jotnotes_core::*;

use std::fs;
use std::path::Path;

/// Opens the notebook named in the settings, creating its directory if needed.
///
/// # Errors
///
/// Returns [`JotnotesError::Io`] if the directory cannot be created, or any
/// error from [`Notebook::open`].
pub fn open_notebook(database_path: &Path) -> Result<Notebook> {
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Notebook::open(database_path)
}
