// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background thread.
//! Do NOT create additional Connection instances for writes.

use std::path::Path;

use specwright_core::SpecwrightError;
use tracing::debug;

use crate::migrations;

/// A single SQLite connection handle with WAL mode and embedded migrations.
///
/// `Database` IS the single writer: it wraps one `tokio_rusqlite::Connection`
/// whose background thread serializes every closure passed to `call()`,
/// eliminating SQLITE_BUSY errors under concurrent access. Query functions
/// accept `&Database` and go through [`Database::connection`]; do NOT open
/// additional connections for writes.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Opens (or creates) the database at `path`, applies PRAGMAs, and runs
    /// all pending migrations.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, SpecwrightError> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| SpecwrightError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| SpecwrightError::Storage {
                source: Box::new(e),
            })?;

        conn.call(move |conn| -> Result<(), SpecwrightError> {
            let wrap = |e: rusqlite::Error| SpecwrightError::Storage {
                source: Box::new(e),
            };
            if wal_mode {
                conn.pragma_update(None, "journal_mode", "WAL")
                    .map_err(wrap)?;
            }
            conn.pragma_update(None, "synchronous", "NORMAL")
                .map_err(wrap)?;
            conn.pragma_update(None, "foreign_keys", "ON")
                .map_err(wrap)?;
            conn.pragma_update(None, "busy_timeout", 5000)
                .map_err(wrap)?;
            migrations::run_migrations(conn)?;
            Ok(())
        })
        .await
        .map_err(|e| match e {
            tokio_rusqlite::Error::Error(inner) => inner,
            other => SpecwrightError::Storage {
                source: Box::new(other),
            },
        })?;

        debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// Returns the underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoints the WAL and releases the connection.
    pub async fn close(&self) -> Result<(), SpecwrightError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Maps a tokio-rusqlite error into the crate's storage error.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> SpecwrightError {
    SpecwrightError::Storage {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_database_and_schema() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("open.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();

        // Migrations should have created the history table.
        let count: i64 = db
            .connection()
            .call(|conn| {
                let n = conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'conversion_history'",
                    [],
                    |row| row.get(0),
                )?;
                Ok::<_, rusqlite::Error>(n)
            })
            .await
            .unwrap();
        assert_eq!(count, 1);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested/dirs/deep.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        assert!(db_path.exists());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("reopen.db");

        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        db.close().await.unwrap();
        drop(db);

        // Second open re-runs the migration runner, which must be a no-op.
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        db.close().await.unwrap();
    }
}
