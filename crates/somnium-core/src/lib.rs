//! # Somnium Core
//!
//! Dream journal engine: record types, the symbol interpretation engine, the
//! deterministic visualization pipeline, and the dream stores.
//!
//! - **Interpretation**: static symbol table + keyword matching; a pure,
//!   total function from dream text to interpretation prose
//! - **Visualization**: seed strings hash to reproducible shape descriptors;
//!   a pure `tick(elapsed)` turns a scene into primitive draw commands
//! - **Render driver**: cooperative frame loop with idempotent cancellation,
//!   one active loop per surface
//! - **Stores**: in-memory and SQLite backends behind one trait
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use somnium_core::{interpret, DreamStore, MemoryStore, VisualizationScene};
//!
//! let store = MemoryStore::new();
//! let result = interpret::generate("flying over a dark forest", &[], Some("happy"));
//!
//! let scene = VisualizationScene::new(&result.elements, Some(&result.mood), 800, 600);
//! let frame = scene.tick(0.0);
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod dream;
pub mod interpret;
pub mod store;
pub mod symbols;
pub mod visual;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Record types
pub use dream::{Clarity, DreamRecord, DreamUpdate, Mood, NewDream};

// Interpretation engine
pub use interpret::{expand_elements, generate, interpret, VisualizationResult};

// Symbol table
pub use symbols::{mood_phrase, SymbolEntry, DREAM_SYMBOLS};

// Visualization
pub use visual::{
    hash_seed, palette_for, shape_for, spawn_render_loop, Color, FrameCommand, Palette, Point,
    RenderHandle, RenderSurface, Renderer, ShapeDescriptor, ShapeKind, VisualizationScene,
    DEFAULT_FRAME_INTERVAL,
};

// Storage layer
pub use store::{DreamStore, MemoryStore, Result, SqliteStore, StoreError};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        DreamRecord, DreamStore, DreamUpdate, MemoryStore, Mood, NewDream, RenderHandle,
        RenderSurface, Renderer, Result, SqliteStore, StoreError, VisualizationResult,
        VisualizationScene,
    };
}
