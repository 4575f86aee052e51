//! Scoped unit of work against the notes database.

use crate::Result;
use rusqlite::{Connection, Transaction};

/// Runs `op` inside a fresh transaction on `conn`.
///
/// The transaction is committed when `op` returns `Ok` and rolled back when
/// it returns `Err` (the [`Transaction`] rolls back on drop). SQLite does not
/// nest transactions, so `op` must not open another session on `conn`.
///
/// # Errors
///
/// Propagates the error returned by `op`, or
/// [`crate::JotnotesError::Database`] if the transaction cannot be started
/// or committed.
pub fn with_session<T, F>(conn: &Connection, op: F) -> Result<T>
where
    F: FnOnce(&Transaction<'_>) -> Result<T>,
{
    let tx = conn.unchecked_transaction()?;
    let value = op(&tx)?;
    tx.commit()?;
    Ok(value)
}
