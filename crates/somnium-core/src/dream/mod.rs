//! Dream module - Core record types
//!
//! A dream entry combines the journaled text (title, description, free-text
//! elements) with the optional generated fields (interpretation text and the
//! visualization stamp) produced by the engine.

mod record;

pub use record::{Clarity, DreamRecord, DreamUpdate, Mood, NewDream};
