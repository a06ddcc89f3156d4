//! # reg-db
//!
//! libsql database operations for Registrar records.
//!
//! Handles all relational state: students, courses, and the many-to-many
//! enrollment between them. The three repository modules under [`repos`]
//! implement the student directory, the course catalog, and the enrollment
//! registry as `impl RegDb` blocks, so every manager shares the one
//! database handle.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Registrar state operations.
///
/// Wraps a libsql database and connection. The connection lives as long as
/// the handle; every operation is a single request/response against it.
pub struct RegDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl RegDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Applies the embedded schema on every open; the statements are
    /// idempotent so re-opening an existing file is safe.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the
    /// schema cannot be applied.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let reg_db = Self { db, conn };
        reg_db.run_migrations().await?;
        Ok(reg_db)
    }

    /// Access the underlying libsql connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
