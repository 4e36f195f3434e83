// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion-history CRUD operations.
//!
//! Every query is scoped by `user_id`: a record is visible and deletable
//! only by its owner.

use rusqlite::params;
use specwright_core::SpecwrightError;

use crate::database::Database;
use crate::models::HistoryRecord;

/// The most recent records returned for one user.
const HISTORY_PAGE_LIMIT: i64 = 20;

/// Insert a new history record.
pub async fn insert_record(db: &Database, record: &HistoryRecord) -> Result<(), SpecwrightError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO conversion_history (id, gherkin, playwright, base_url, model, user_id, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.gherkin,
                    record.playwright,
                    record.base_url,
                    record.model,
                    record.user_id,
                    record.timestamp,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get the user's records in reverse chronological order.
pub async fn list_records_for_user(
    db: &Database,
    user_id: &str,
) -> Result<Vec<HistoryRecord>, SpecwrightError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, gherkin, playwright, base_url, model, user_id, timestamp
                 FROM conversion_history WHERE user_id = ?1
                 ORDER BY timestamp DESC LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![user_id, HISTORY_PAGE_LIMIT], |row| {
                Ok(HistoryRecord {
                    id: row.get(0)?,
                    gherkin: row.get(1)?,
                    playwright: row.get(2)?,
                    base_url: row.get(3)?,
                    model: row.get(4)?,
                    user_id: row.get(5)?,
                    timestamp: row.get(6)?,
                })
            })?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete one record owned by the user.
///
/// Returns the number of rows affected: zero when the id is unknown or
/// belongs to another user.
pub async fn delete_record(
    db: &Database,
    user_id: &str,
    id: &str,
) -> Result<usize, SpecwrightError> {
    let user_id = user_id.to_string();
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let affected = conn.execute(
                "DELETE FROM conversion_history WHERE id = ?1 AND user_id = ?2",
                params![id, user_id],
            )?;
            Ok(affected)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete all records owned by the user. Returns the number of rows affected.
pub async fn delete_all_for_user(db: &Database, user_id: &str) -> Result<usize, SpecwrightError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let affected = conn.execute(
                "DELETE FROM conversion_history WHERE user_id = ?1",
                params![user_id],
            )?;
            Ok(affected)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    fn make_record(id: &str, user_id: &str, timestamp: &str) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            gherkin: "Feature: Login".to_string(),
            playwright: "test('login', ...)".to_string(),
            base_url: Some("https://example.com".to_string()),
            model: "Groq (Llama 3.3 Fast)".to_string(),
            user_id: user_id.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_list_round_trips() {
        let (db, _dir) = setup_db().await;
        let record = make_record("r1", "alice", "2026-01-01T00:00:00Z");

        insert_record(&db, &record).await.unwrap();
        let records = list_records_for_user(&db, "alice").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], record);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let (db, _dir) = setup_db().await;

        insert_record(&db, &make_record("r1", "alice", "2026-01-01T00:00:01Z"))
            .await
            .unwrap();
        insert_record(&db, &make_record("r2", "alice", "2026-01-01T00:00:03Z"))
            .await
            .unwrap();
        insert_record(&db, &make_record("r3", "alice", "2026-01-01T00:00:02Z"))
            .await
            .unwrap();

        let records = list_records_for_user(&db, "alice").await.unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r3", "r1"]);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_caps_at_twenty_records() {
        let (db, _dir) = setup_db().await;

        for i in 0..25 {
            let record = make_record(
                &format!("r{i}"),
                "alice",
                &format!("2026-01-01T00:00:{:02}Z", i % 60),
            );
            insert_record(&db, &record).await.unwrap();
        }

        let records = list_records_for_user(&db, "alice").await.unwrap();
        assert_eq!(records.len(), 20);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_requesting_user() {
        let (db, _dir) = setup_db().await;

        insert_record(&db, &make_record("r1", "alice", "2026-01-01T00:00:01Z"))
            .await
            .unwrap();
        insert_record(&db, &make_record("r2", "bob", "2026-01-01T00:00:02Z"))
            .await
            .unwrap();

        let alice = list_records_for_user(&db, "alice").await.unwrap();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].id, "r1");

        let carol = list_records_for_user(&db, "carol").await.unwrap();
        assert!(carol.is_empty());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_record_affects_only_owned_rows() {
        let (db, _dir) = setup_db().await;

        insert_record(&db, &make_record("r1", "alice", "2026-01-01T00:00:01Z"))
            .await
            .unwrap();

        // Bob cannot delete Alice's record.
        let affected = delete_record(&db, "bob", "r1").await.unwrap();
        assert_eq!(affected, 0);
        assert_eq!(list_records_for_user(&db, "alice").await.unwrap().len(), 1);

        // Alice can.
        let affected = delete_record(&db, "alice", "r1").await.unwrap();
        assert_eq!(affected, 1);
        assert!(list_records_for_user(&db, "alice").await.unwrap().is_empty());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_all_is_scoped_to_the_user() {
        let (db, _dir) = setup_db().await;

        insert_record(&db, &make_record("r1", "alice", "2026-01-01T00:00:01Z"))
            .await
            .unwrap();
        insert_record(&db, &make_record("r2", "alice", "2026-01-01T00:00:02Z"))
            .await
            .unwrap();
        insert_record(&db, &make_record("r3", "bob", "2026-01-01T00:00:03Z"))
            .await
            .unwrap();

        let affected = delete_all_for_user(&db, "alice").await.unwrap();
        assert_eq!(affected, 2);
        assert!(list_records_for_user(&db, "alice").await.unwrap().is_empty());
        assert_eq!(list_records_for_user(&db, "bob").await.unwrap().len(), 1);

        db.close().await.unwrap();
    }
}
