//! Shared handler state

use std::sync::Arc;

use somnium_core::DreamStore;

/// Shared application state for the REST surface
///
/// The store is injected at construction, never reached through a global, so
/// tests can run the full router over an in-memory backend.
#[derive(Clone)]
pub struct AppState {
    /// The dream store backend
    pub store: Arc<dyn DreamStore>,
}

impl AppState {
    /// Wrap a store backend
    pub fn new(store: Arc<dyn DreamStore>) -> Self {
        Self { store }
    }
}
