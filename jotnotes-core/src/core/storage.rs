use crate::{JotnotesError, Result};
use rusqlite::Connection;
use std::path::Path;

/// Owns the SQLite connection backing a notebook.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens the database at `path`, creating the file and the `notes` table
    /// if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`JotnotesError::Database`] if the file is not a SQLite
    /// database, or [`JotnotesError::InvalidDatabase`] if it holds a `notes`
    /// table with an incompatible layout.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Opens a throwaway in-memory database with the same schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        // Validate any pre-existing notes table before touching the schema.
        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('notes')")?
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<_, _>>()?;

        if !columns.is_empty() {
            for required in ["id", "title", "content"] {
                if !columns.iter().any(|c| c == required) {
                    return Err(JotnotesError::InvalidDatabase(format!(
                        "notes table is missing the '{required}' column"
                    )));
                }
            }
        }

        conn.execute_batch(include_str!("schema.sql"))?;
        log::debug!("notes schema ready");
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn table_names(storage: &Storage) -> Vec<String> {
        storage
            .connection()
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_open_creates_notes_table() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp.path()).unwrap();

        assert!(table_names(&storage).contains(&"notes".to_string()));
    }

    #[test]
    fn test_open_existing_storage_keeps_rows() {
        let temp = NamedTempFile::new().unwrap();
        {
            let storage = Storage::open(temp.path()).unwrap();
            storage
                .connection()
                .execute("INSERT INTO notes (title, content) VALUES ('a', 'b')", [])
                .unwrap();
        }

        let storage = Storage::open(temp.path()).unwrap();
        let count: i64 = storage
            .connection()
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_open_in_memory() {
        let storage = Storage::open_in_memory().unwrap();
        assert!(table_names(&storage).contains(&"notes".to_string()));
    }

    #[test]
    fn test_open_invalid_file() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "not a database, just some text").unwrap();

        let result = Storage::open(temp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_open_rejects_foreign_notes_table() {
        let temp = NamedTempFile::new().unwrap();
        {
            let conn = Connection::open(temp.path()).unwrap();
            conn.execute("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT)", [])
                .unwrap();
        }

        let result = Storage::open(temp.path());
        assert!(matches!(result, Err(JotnotesError::InvalidDatabase(_))));
    }
}
