//! Note persistence operations over a Jotnotes SQLite database.

use crate::{with_session, JotnotesError, Note, Result, Storage};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

/// An open notebook backed by a single `notes` table.
///
/// `Notebook` is the interface the UI layer talks to. Every operation opens
/// its own session via [`with_session`] and commits before returning, so no
/// state is shared between calls apart from the database itself.
pub struct Notebook {
    storage: Storage,
}

impl Notebook {
    /// Opens (or creates) the notebook database at `path`.
    ///
    /// # Errors
    ///
    /// See [`Storage::open`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let notebook = Self::from_storage(Storage::open(&path)?);
        log::info!("opened notebook at {}", path.as_ref().display());
        Ok(notebook)
    }

    /// Wraps an already-open [`Storage`].
    pub fn from_storage(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn connection(&self) -> &Connection {
        self.storage.connection()
    }

    /// Inserts a new note and returns the id SQLite assigned to it.
    ///
    /// `title` is stored in the `title` column and `content` in the `content`
    /// column. No validation happens here; callers decide what an acceptable
    /// title is (see [`crate::validate_title`]).
    ///
    /// # Errors
    ///
    /// Returns [`JotnotesError::Database`] for any SQLite failure.
    pub fn add_note(&self, title: &str, content: &str) -> Result<i64> {
        let id = with_session(self.connection(), |tx| {
            tx.execute(
                "INSERT INTO notes (title, content) VALUES (?1, ?2)",
                rusqlite::params![title, content],
            )?;
            Ok(tx.last_insert_rowid())
        })?;
        log::debug!("added note {id}");
        Ok(id)
    }

    /// Permanently removes the note with `note_id`.
    ///
    /// # Errors
    ///
    /// Returns [`JotnotesError::NoteNotFound`] if no such note exists, or
    /// [`JotnotesError::Database`] for any SQLite failure. Nothing is deleted
    /// in either case.
    pub fn delete_note(&self, note_id: i64) -> Result<()> {
        with_session(self.connection(), |tx| {
            let affected = tx.execute(
                "DELETE FROM notes WHERE id = ?1",
                rusqlite::params![note_id],
            )?;
            if affected == 0 {
                return Err(JotnotesError::NoteNotFound(note_id));
            }
            Ok(())
        })?;
        log::debug!("deleted note {note_id}");
        Ok(())
    }

    /// Fetches a single note by id.
    ///
    /// Use [`Note::into_parts`] to get the plain `(id, title, content)` triple.
    ///
    /// # Errors
    ///
    /// Returns [`JotnotesError::NoteNotFound`] if no such note exists, or
    /// [`JotnotesError::Database`] for any SQLite failure.
    pub fn fetch_note_by_id(&self, note_id: i64) -> Result<Note> {
        with_session(self.connection(), |tx| {
            tx.query_row(
                "SELECT id, title, content FROM notes WHERE id = ?1",
                rusqlite::params![note_id],
                map_note_row,
            )
            .optional()?
            .ok_or(JotnotesError::NoteNotFound(note_id))
        })
    }

    /// Returns every note whose title contains `keyword`, newest first.
    ///
    /// Matching is a case-insensitive substring test that also folds
    /// non-ASCII letters; `%` and `_` have no special meaning. An empty
    /// keyword returns all notes.
    ///
    /// # Errors
    ///
    /// Returns [`JotnotesError::Database`] for any SQLite failure.
    pub fn search_notes(&self, keyword: &str) -> Result<Vec<Note>> {
        let needle = keyword.to_lowercase();
        let notes = with_session(self.connection(), |tx| {
            let mut stmt =
                tx.prepare("SELECT id, title, content FROM notes ORDER BY id DESC")?;
            let rows = stmt
                .query_map([], map_note_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })?;

        let matches: Vec<Note> = notes
            .into_iter()
            .filter(|note| needle.is_empty() || note.title.to_lowercase().contains(&needle))
            .collect();
        log::debug!("search {keyword:?} matched {} note(s)", matches.len());
        Ok(matches)
    }

    /// Returns the total number of stored notes.
    ///
    /// # Errors
    ///
    /// Returns [`JotnotesError::Database`] for any SQLite failure.
    pub fn count_notes(&self) -> Result<usize> {
        let count: i64 = with_session(self.connection(), |tx| {
            Ok(tx.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?)
        })?;
        Ok(count as usize)
    }
}

/// Maps a `SELECT id, title, content` row; NULL text columns read as empty.
fn map_note_row(row: &rusqlite::Row) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        content: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}
