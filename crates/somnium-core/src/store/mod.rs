//! Dream store
//!
//! Keyed collection of saved dream records behind the [`DreamStore`] trait so
//! callers receive an explicitly constructed backend (in-memory or SQLite)
//! instead of a global singleton. Both backends share the same search and
//! ordering semantics.

mod memory;
mod migrations;
mod sqlite;

pub use memory::MemoryStore;
pub use migrations::{Migration, MIGRATIONS};
pub use sqlite::SqliteStore;

use crate::dream::{DreamRecord, DreamUpdate, NewDream};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Store error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// Dream not found
    #[error("Dream not found: {0}")]
    NotFound(i64),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

/// Store result type
pub type Result<T> = std::result::Result<T, StoreError>;

// ============================================================================
// STORE TRAIT
// ============================================================================

/// Operations every dream store backend supports
///
/// All listing operations sort by dream date, newest first. Writes are
/// serialized inside each backend; callers never see partial updates.
pub trait DreamStore: Send + Sync {
    /// Insert a new record, assigning `id` and `created_at`
    fn create_dream(&self, dream: NewDream) -> Result<DreamRecord>;

    /// Fetch one record by id
    fn get_dream(&self, id: i64) -> Result<Option<DreamRecord>>;

    /// All records, date descending
    fn get_dreams(&self) -> Result<Vec<DreamRecord>>;

    /// Merge a partial update over an existing record
    ///
    /// Fails with [`StoreError::NotFound`] when the id is absent; `id` and
    /// `created_at` are never changed.
    fn update_dream(&self, id: i64, update: DreamUpdate) -> Result<DreamRecord>;

    /// Remove a record; false (not an error) when the id was absent
    fn delete_dream(&self, id: i64) -> Result<bool>;

    /// Case-insensitive substring search over title, description, location,
    /// and elements, date descending; the empty query matches everything
    fn search_dreams(&self, query: &str) -> Result<Vec<DreamRecord>>;
}

// ============================================================================
// SHARED SEMANTICS
// ============================================================================

/// Substring match used by both backends; `query` must be lower-cased
pub(crate) fn matches_query(record: &DreamRecord, query: &str) -> bool {
    record.title.to_lowercase().contains(query)
        || record.description.to_lowercase().contains(query)
        || record
            .location
            .as_ref()
            .is_some_and(|l| l.to_lowercase().contains(query))
        || record
            .elements
            .iter()
            .any(|e| e.to_lowercase().contains(query))
}

/// Gallery ordering: dream date, newest first; ties keep prior order
pub(crate) fn sort_by_date_desc(records: &mut [DreamRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

// ============================================================================
// TESTS
// ============================================================================
