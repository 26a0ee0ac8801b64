//! Database connection management.
//!
//! Wraps a single rusqlite Connection in a Mutex. The connection lives from
//! `open` until `close` (or drop); every store call borrows it for exactly one
//! statement.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::{debug, info};

use moviedb_core::error::MovieDbError;

use crate::schema;

/// SQLite database handle with an explicit open/close lifecycle.
pub struct Database {
    conn: Mutex<Option<Connection>>,
}

impl Database {
    /// Open (or create) a database at the given path and ensure the schema
    /// exists.
    pub fn open(path: &Path) -> Result<Self, MovieDbError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| MovieDbError::Storage(format!("Failed to open database: {}", e)))?;

        info!("Database opened at {}", path.display());
        Self::from_connection(conn)
    }

    /// Open an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, MovieDbError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| MovieDbError::Storage(format!("Failed to open in-memory db: {}", e)))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, MovieDbError> {
        let db = Self {
            conn: Mutex::new(Some(conn)),
        };
        db.initialize()?;
        Ok(db)
    }

    /// Ensure the catalog table exists. Idempotent.
    pub fn initialize(&self) -> Result<(), MovieDbError> {
        self.with_conn(schema::initialize)
    }

    /// Execute a closure with a reference to the underlying connection.
    ///
    /// The mutex is held for the duration of the closure and released when it
    /// returns, whatever the outcome.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, MovieDbError>
    where
        F: FnOnce(&Connection) -> Result<T, MovieDbError>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| MovieDbError::Storage(format!("Database lock poisoned: {}", e)))?;
        let conn = guard
            .as_ref()
            .ok_or_else(|| MovieDbError::Storage("database is closed".to_string()))?;
        f(conn)
    }

    /// Release the connection. Calling it again is a no-op.
    pub fn close(&self) -> Result<(), MovieDbError> {
        let mut guard = self
            .conn
            .lock()
            .map_err(|e| MovieDbError::Storage(format!("Database lock poisoned: {}", e)))?;

        match guard.take() {
            Some(conn) => {
                conn.close()
                    .map_err(|(_, e)| MovieDbError::Storage(format!("Failed to close database: {}", e)))?;
                info!("Database closed");
            }
            None => debug!("Database already closed"),
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.conn.lock().map(|g| g.is_none()).unwrap_or(true)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("closed", &self.is_closed())
            .finish()
    }
}
