//! Visualization module
//!
//! Deterministic abstract-shape visualizations for dreams. A seed string
//! hashes to a [`shape::ShapeDescriptor`]; a [`scene::VisualizationScene`]
//! turns elapsed time into primitive [`scene::FrameCommand`]s; the
//! [`driver`] runs the loop against a host surface.

pub mod driver;
pub mod palette;
pub mod scene;
pub mod shape;

pub use driver::{spawn_render_loop, RenderHandle, RenderSurface, Renderer, DEFAULT_FRAME_INTERVAL};
pub use palette::{palette_for, Color, Palette};
pub use scene::{FrameCommand, Point, VisualizationScene};
pub use shape::{hash_seed, shape_for, ShapeDescriptor, ShapeKind};
