//! SQLite store
//!
//! Persistent dream store backed by a single SQLite database file. Elements
//! are stored as a JSON text column; dates round-trip as RFC3339 text.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};

use crate::dream::{DreamRecord, DreamUpdate, NewDream};

use super::migrations::apply_migrations;
use super::{matches_query, sort_by_date_desc, DreamStore, Result, StoreError};

const SELECT_COLUMNS: &str = "id, title, description, date, mood, clarity, location, \
                              elements, visualization, interpretation, created_at";

/// SQLite-backed dream store
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Apply PRAGMAs to a connection
    fn configure_connection(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;

        Ok(())
    }

    /// Open (or create) the store
    ///
    /// With no explicit path the database lives in the platform data
    /// directory; on Unix both the directory and the file are restricted to
    /// the owner.
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        let path = match db_path {
            Some(p) => p,
            None => {
                let proj_dirs = ProjectDirs::from("com", "somnium", "somnium").ok_or_else(|| {
                    StoreError::Init("Could not determine project directories".to_string())
                })?;

                let data_dir = proj_dirs.data_dir();
                std::fs::create_dir_all(data_dir)?;
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    let perms = std::fs::Permissions::from_mode(0o700);
                    let _ = std::fs::set_permissions(data_dir, perms);
                }
                data_dir.join("somnium.db")
            }
        };

        let conn = Connection::open(&path)?;

        #[cfg(unix)]
        if path.exists() {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&path, perms);
        }

        Self::configure_connection(&conn)?;
        apply_migrations(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Init("Connection lock poisoned".to_string()))
    }

    fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<DreamRecord> {
        let elements_json: String = row.get(7)?;

        Ok(DreamRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            date: row.get(3)?,
            mood: row.get(4)?,
            clarity: row.get(5)?,
            location: row.get(6)?,
            elements: serde_json::from_str(&elements_json).unwrap_or_default(),
            visualization: row.get(8)?,
            interpretation: row.get(9)?,
            created_at: row.get(10)?,
        })
    }

    fn fetch_all(conn: &Connection) -> Result<Vec<DreamRecord>> {
        let mut stmt = conn.prepare(&format!("SELECT {} FROM dreams", SELECT_COLUMNS))?;
        let records = stmt
            .query_map([], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn fetch_one(conn: &Connection, id: i64) -> Result<Option<DreamRecord>> {
        let record = conn
            .query_row(
                &format!("SELECT {} FROM dreams WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                Self::row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    fn store_record(conn: &Connection, record: &DreamRecord) -> Result<()> {
        let elements_json =
            serde_json::to_string(&record.elements).unwrap_or_else(|_| "[]".to_string());

        conn.execute(
            "UPDATE dreams SET
                title = ?2, description = ?3, date = ?4, mood = ?5, clarity = ?6,
                location = ?7, elements = ?8, visualization = ?9, interpretation = ?10
             WHERE id = ?1",
            params![
                record.id,
                record.title,
                record.description,
                record.date,
                record.mood,
                record.clarity,
                record.location,
                elements_json,
                record.visualization,
                record.interpretation,
            ],
        )?;

        Ok(())
    }
}

impl DreamStore for SqliteStore {
    fn create_dream(&self, dream: NewDream) -> Result<DreamRecord> {
        let now = Utc::now();
        let elements_json =
            serde_json::to_string(&dream.elements).unwrap_or_else(|_| "[]".to_string());

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO dreams (
                title, description, date, mood, clarity, location,
                elements, visualization, interpretation, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                dream.title,
                dream.description,
                dream.date,
                dream.mood,
                dream.clarity,
                dream.location,
                elements_json,
                dream.visualization,
                dream.interpretation,
                now,
            ],
        )?;
        let id = conn.last_insert_rowid();

        Ok(DreamRecord {
            id,
            title: dream.title,
            description: dream.description,
            date: dream.date,
            mood: dream.mood,
            clarity: dream.clarity,
            location: dream.location,
            elements: dream.elements,
            visualization: dream.visualization,
            interpretation: dream.interpretation,
            created_at: now,
        })
    }

    fn get_dream(&self, id: i64) -> Result<Option<DreamRecord>> {
        let conn = self.lock()?;
        Self::fetch_one(&conn, id)
    }

    fn get_dreams(&self) -> Result<Vec<DreamRecord>> {
        let conn = self.lock()?;
        let mut records = Self::fetch_all(&conn)?;
        sort_by_date_desc(&mut records);
        Ok(records)
    }

    fn update_dream(&self, id: i64, update: DreamUpdate) -> Result<DreamRecord> {
        let conn = self.lock()?;
        let mut record = Self::fetch_one(&conn, id)?.ok_or(StoreError::NotFound(id))?;
        update.apply_to(&mut record);
        Self::store_record(&conn, &record)?;
        Ok(record)
    }

    fn delete_dream(&self, id: i64) -> Result<bool> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM dreams WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    fn search_dreams(&self, query: &str) -> Result<Vec<DreamRecord>> {
        let query = query.to_lowercase();
        let conn = self.lock()?;
        let mut records: Vec<DreamRecord> = Self::fetch_all(&conn)?
            .into_iter()
            .filter(|r| matches_query(r, &query))
            .collect();
        sort_by_date_desc(&mut records);
        Ok(records)
    }
}

// ============================================================================
// TESTS
// ============================================================================
