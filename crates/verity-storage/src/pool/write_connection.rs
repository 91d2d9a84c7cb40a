//! Single connection behind a mutex. All reads and writes are serialized.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use verity_core::{VerityError, VerityResult};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single SQLite connection protected by a blocking mutex.
///
/// The lock is held only for the duration of one closure, never across an
/// await point, so it is safe to use from async callers.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> VerityResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> VerityResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, 0)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> VerityResult<T>
    where
        F: FnOnce(&Connection) -> VerityResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| VerityError::ConcurrencyError("sqlite connection lock poisoned".into()))?;
        f(&guard)
    }
}
