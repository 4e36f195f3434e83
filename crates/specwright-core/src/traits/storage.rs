// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait for persistence backends (SQLite).

use async_trait::async_trait;

use crate::error::SpecwrightError;
use crate::traits::adapter::PluginAdapter;
use crate::types::HistoryRecord;

/// Adapter for storage and persistence backends.
///
/// Storage adapters manage the lifecycle of database connections and
/// provide conversion-history persistence. Every history operation is
/// scoped by the owning user id; no cross-user read or delete path exists.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend (migrations, connection, etc.).
    async fn initialize(&self) -> Result<(), SpecwrightError>;

    /// Closes the storage backend, flushing pending writes and releasing connections.
    async fn close(&self) -> Result<(), SpecwrightError>;

    /// Inserts one history record.
    async fn insert_record(&self, record: &HistoryRecord) -> Result<(), SpecwrightError>;

    /// Returns the user's records, newest first.
    async fn list_records_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<HistoryRecord>, SpecwrightError>;

    /// Deletes one record owned by the user. Returns the number of rows
    /// affected (zero when the id belongs to another user or is unknown).
    async fn delete_record(&self, user_id: &str, id: &str) -> Result<usize, SpecwrightError>;

    /// Deletes all records owned by the user. Returns the number of rows affected.
    async fn delete_all_for_user(&self, user_id: &str) -> Result<usize, SpecwrightError>;
}
