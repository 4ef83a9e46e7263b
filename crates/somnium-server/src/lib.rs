//! Somnium server library
//!
//! Exposes the REST surface so integration tests (and embedders) can build
//! the router over any [`somnium_core::DreamStore`] backend.

pub mod api;

pub use api::state::AppState;
pub use api::{build_router, serve};
