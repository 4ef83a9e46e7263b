//! In-memory store
//!
//! The original backing medium: a keyed map with a monotonically increasing
//! id counter. Useful for tests and ephemeral servers; nothing survives a
//! restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::dream::{DreamRecord, DreamUpdate, NewDream};

use super::{matches_query, sort_by_date_desc, DreamStore, Result, StoreError};

/// Map-backed dream store
pub struct MemoryStore {
    records: RwLock<HashMap<i64, DreamRecord>>,
    next_id: AtomicI64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store; ids start at 1
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<i64, DreamRecord>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Init("Dream map lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<i64, DreamRecord>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Init("Dream map lock poisoned".to_string()))
    }
}

impl DreamStore for MemoryStore {
    fn create_dream(&self, dream: NewDream) -> Result<DreamRecord> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = DreamRecord {
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
            created_at: Utc::now(),
        };

        self.write()?.insert(id, record.clone());
        Ok(record)
    }

    fn get_dream(&self, id: i64) -> Result<Option<DreamRecord>> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn get_dreams(&self) -> Result<Vec<DreamRecord>> {
        let mut records: Vec<DreamRecord> = self.read()?.values().cloned().collect();
        sort_by_date_desc(&mut records);
        Ok(records)
    }

    fn update_dream(&self, id: i64, update: DreamUpdate) -> Result<DreamRecord> {
        let mut records = self.write()?;
        let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        update.apply_to(record);
        Ok(record.clone())
    }

    fn delete_dream(&self, id: i64) -> Result<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }

    fn search_dreams(&self, query: &str) -> Result<Vec<DreamRecord>> {
        let query = query.to_lowercase();
        let mut records: Vec<DreamRecord> = self
            .read()?
            .values()
            .filter(|r| matches_query(r, &query))
            .cloned()
            .collect();
        sort_by_date_desc(&mut records);
        Ok(records)
    }
}

// ============================================================================
// TESTS
// ============================================================================
