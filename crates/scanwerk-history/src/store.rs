// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// History store: SQLite log of recent scans, trimmed on every append.
//
// Schema:
//   scan_history(
//     seq              INTEGER PRIMARY KEY AUTOINCREMENT,  -- recency order
//     id               TEXT    NOT NULL UNIQUE,            -- ScanId (UUID)
//     text             TEXT    NOT NULL,                   -- raw scan text
//     source_reference TEXT,                               -- image path / URI
//     origin           TEXT    NOT NULL,                   -- "ocr" | "barcode"
//     timestamp        TEXT    NOT NULL                    -- RFC 3339
//   )

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use scanwerk_core::config::DEFAULT_HISTORY_LIMIT;
use scanwerk_core::error::{Result, ScanwerkError};
use scanwerk_core::types::{ScanId, ScanOrigin, ScanRecord};
use tracing::{debug, instrument};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Local error helpers
// ---------------------------------------------------------------------------

/// Convert a `rusqlite::Error` into a `ScanwerkError::Database`.
fn db_err(e: rusqlite::Error) -> ScanwerkError {
    ScanwerkError::Database(e.to_string())
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS scan_history (
    seq              INTEGER PRIMARY KEY AUTOINCREMENT,
    id               TEXT    NOT NULL UNIQUE,
    text             TEXT    NOT NULL,
    source_reference TEXT,
    origin           TEXT    NOT NULL,
    timestamp        TEXT    NOT NULL
);";

/// Columns as stored, before conversion back into a [`ScanRecord`].
type RawRow = (String, String, Option<String>, String, String);

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Most-recent-first scan history backed by a SQLite database.
pub struct HistoryStore {
    conn: Connection,
    capacity: usize,
}

impl HistoryStore {
    /// Open (or create) the history database at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(db_err)?;

        // Enable WAL so readers never block the background writer.
        conn.execute_batch("PRAGMA journal_mode = WAL;")
            .map_err(db_err)?;
        conn.execute_batch(SCHEMA).map_err(db_err)?;

        debug!("history store opened");
        Ok(Self {
            conn,
            capacity: DEFAULT_HISTORY_LIMIT,
        })
    }

    /// Open an in-memory history database (useful for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        conn.execute_batch(SCHEMA).map_err(db_err)?;

        debug!("in-memory history store opened");
        Ok(Self {
            conn,
            capacity: DEFAULT_HISTORY_LIMIT,
        })
    }

    /// Keep at most `capacity` records (minimum 1). Applied on the next append.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Change the retention limit (minimum 1). Applied on the next append.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a record, then drop everything older than the newest `capacity`.
    ///
    /// Insert and trim share one transaction, so readers never observe more
    /// than `capacity` rows.
    #[instrument(skip_all, fields(id = %record.id, origin = record.origin.as_str()))]
    pub fn append(&self, record: &ScanRecord) -> Result<()> {
        let tx = self.conn.unchecked_transaction().map_err(db_err)?;

        tx.execute(
            "INSERT INTO scan_history (id, text, source_reference, origin, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.id.0.to_string(),
                record.text,
                record.source_reference,
                record.origin.as_str(),
                record.timestamp.to_rfc3339(),
            ],
        )
        .map_err(db_err)?;

        let trimmed = tx
            .execute(
                "DELETE FROM scan_history
                 WHERE seq NOT IN (
                     SELECT seq FROM scan_history ORDER BY seq DESC LIMIT ?1
                 )",
                params![self.capacity as i64],
            )
            .map_err(db_err)?;

        tx.commit().map_err(db_err)?;

        debug!(trimmed, "history record appended");
        Ok(())
    }

    /// All records, newest first.
    pub fn list(&self) -> Result<Vec<ScanRecord>> {
        self.recent(self.capacity)
    }

    /// The newest `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<ScanRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, text, source_reference, origin, timestamp
                 FROM scan_history
                 ORDER BY seq DESC
                 LIMIT ?1",
            )
            .map_err(db_err)?;

        let rows = stmt
            .query_map(params![limit as i64], |row| -> rusqlite::Result<RawRow> {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })
            .map_err(db_err)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(record_from_row(row.map_err(db_err)?)?);
        }
        Ok(records)
    }

    /// Remove every record.
    #[instrument(skip_all)]
    pub fn clear(&self) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM scan_history", [])
            .map_err(db_err)?;
        debug!(removed, "history cleared");
        Ok(())
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<u64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM scan_history", [], |row| row.get(0))
            .map_err(db_err)
    }
}

fn record_from_row((id, text, source_reference, origin, timestamp): RawRow) -> Result<ScanRecord> {
    let id = Uuid::parse_str(&id)
        .map_err(|e| ScanwerkError::Database(format!("bad record id {id:?}: {e}")))?;
    let origin = ScanOrigin::from_keyword(&origin)
        .ok_or_else(|| ScanwerkError::Database(format!("unknown scan origin {origin:?}")))?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp)
        .map_err(|e| ScanwerkError::Database(format!("bad timestamp {timestamp:?}: {e}")))?
        .with_timezone(&Utc);

    Ok(ScanRecord {
        id: ScanId(id),
        text,
        source_reference,
        origin,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> HistoryStore {
        HistoryStore::open_in_memory().expect("open in-memory history store")
    }

    fn record(text: &str) -> ScanRecord {
        ScanRecord::new(text.into(), ScanOrigin::Barcode, None)
    }

    #[test]
    fn append_and_count() {
        let store = make_store();
        assert_eq!(store.count().unwrap(), 0);

        store.append(&record("one")).unwrap();
        store.append(&record("two")).unwrap();

        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn list_is_newest_first() {
        let store = make_store();
        for i in 0..3 {
            store.append(&record(&format!("scan {i}"))).unwrap();
        }

        let texts: Vec<String> = store.list().unwrap().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["scan 2", "scan 1", "scan 0"]);
    }

    #[test]
    fn keeps_only_fifty_by_default() {
        let store = make_store();
        for i in 0..60 {
            store.append(&record(&format!("scan {i}"))).unwrap();
        }

        assert_eq!(store.count().unwrap(), 50);
        let records = store.list().unwrap();
        assert_eq!(records.first().map(|r| r.text.as_str()), Some("scan 59"));
        assert_eq!(records.last().map(|r| r.text.as_str()), Some("scan 10"));
    }

    #[test]
    fn custom_capacity() {
        let store = make_store().with_capacity(2);
        for text in ["a", "b", "c"] {
            store.append(&record(text)).unwrap();
        }
        let texts: Vec<String> = store.list().unwrap().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["c", "b"]);
    }

    #[test]
    fn record_round_trips_fields() {
        let store = make_store();
        let original = ScanRecord::new(
            "WIFI:S:Net;;".into(),
            ScanOrigin::TextRecognition,
            Some("/tmp/scan-0001.jpg".into()),
        );
        store.append(&original).unwrap();

        let stored = store.list().unwrap().remove(0);
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.text, original.text);
        assert_eq!(stored.source_reference, original.source_reference);
        assert_eq!(stored.origin, ScanOrigin::TextRecognition);
        assert_eq!(stored.timestamp, original.timestamp);
    }

    #[test]
    fn clear_removes_everything() {
        let store = make_store();
        store.append(&record("one")).unwrap();
        store.clear().unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");

        {
            let store = HistoryStore::open(&path).unwrap();
            store.append(&record("kept")).unwrap();
        }

        let store = HistoryStore::open(&path).unwrap();
        assert_eq!(store.list().unwrap()[0].text, "kept");
    }
}
