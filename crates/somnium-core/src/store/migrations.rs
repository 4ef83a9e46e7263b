//! Database Migrations
//!
//! Schema migration definitions for the SQLite store. The current schema
//! version lives in `PRAGMA user_version`; migrations above it are applied in
//! order inside `SqliteStore::new`.

use rusqlite::Connection;

use super::Result;

/// Migration definitions
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "Initial dreams schema",
        up: MIGRATION_V1_UP,
    },
    Migration {
        version: 2,
        description: "Index dreams by date for gallery ordering",
        up: MIGRATION_V2_UP,
    },
];

/// A database migration
#[derive(Debug, Clone)]
pub struct Migration {
    /// Version number
    pub version: u32,
    /// Description
    pub description: &'static str,
    /// SQL to apply
    pub up: &'static str,
}

/// V1: Initial schema
const MIGRATION_V1_UP: &str = r#"
CREATE TABLE IF NOT EXISTS dreams (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    date TEXT NOT NULL,
    mood TEXT,
    clarity TEXT,
    location TEXT,

    -- JSON array of element strings
    elements TEXT NOT NULL DEFAULT '[]',

    -- Generated fields; visualization is an opaque text stamp, never an image
    visualization TEXT,
    interpretation TEXT,

    created_at TEXT NOT NULL
);
"#;

/// V2: Gallery listings sort by dream date
const MIGRATION_V2_UP: &str = r#"
CREATE INDEX IF NOT EXISTS idx_dreams_date ON dreams(date DESC);
"#;

/// Apply all pending migrations to a connection
pub fn apply_migrations(conn: &Connection) -> Result<()> {
    let current: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    for migration in MIGRATIONS {
        if migration.version > current {
            conn.execute_batch(migration.up)?;
            conn.pragma_update(None, "user_version", migration.version)?;
            tracing::info!(
                version = migration.version,
                "Applied migration: {}",
                migration.description
            );
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
