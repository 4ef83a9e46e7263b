//! Visualization scene
//!
//! The animation is split into a pure `tick(elapsed) -> Vec<FrameCommand>`
//! function and a thin host driver (see [`super::driver`]). The scene resolves
//! all geometry — rotation, drift, wave polylines — so a host only has to
//! rasterize primitive commands. Identical scene + identical elapsed time
//! always produce identical commands.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::palette::{palette_for, Color, Palette};
use super::shape::{shape_for, ShapeDescriptor, ShapeKind};

/// Extra shapes seeded from the mood so an empty element list still animates
const EXTRA_SHAPES: usize = 5;

/// Radius of the sinusoidal drift applied to every shape
const DRIFT_RADIUS: f64 = 6.0;

/// Stroke width for wave polylines
const WAVE_STROKE: f64 = 3.0;

/// A 2D point in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// One primitive draw command
///
/// Commands arrive pre-transformed; hosts execute them in order with no
/// geometry of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum FrameCommand {
    /// Clear the whole surface
    Clear,
    /// Linear gradient over the whole surface, top-left to bottom-right
    FillBackground {
        /// Gradient start color
        top: Color,
        /// Gradient end color
        bottom: Color,
    },
    /// One background noise dot
    Speckle {
        /// Center x
        x: f64,
        /// Center y
        y: f64,
        /// Dot radius
        radius: f64,
        /// White overlay opacity
        alpha: f64,
    },
    /// Radial color-to-transparent glow under a shape
    Glow {
        /// Center x
        x: f64,
        /// Center y
        y: f64,
        /// Outer radius
        radius: f64,
        /// Glow color
        color: Color,
    },
    /// Filled circle
    FillCircle {
        /// Center x
        x: f64,
        /// Center y
        y: f64,
        /// Circle radius
        radius: f64,
        /// Fill color
        color: Color,
    },
    /// Filled polygon, points already rotated and translated
    FillPolygon {
        /// Vertices in draw order
        points: Vec<Point>,
        /// Fill color
        color: Color,
    },
    /// Stroked open polyline, points already rotated and translated
    StrokePolyline {
        /// Vertices in draw order
        points: Vec<Point>,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f64,
    },
    /// Radial darkening toward the surface edges
    Vignette {
        /// Edge opacity
        strength: f64,
    },
}

/// A fully resolved visualization: palette, shapes, dimensions
///
/// Built once per visualization session; `tick` can then be called for any
/// elapsed time, in any order, and stays deterministic.
#[derive(Debug, Clone)]
pub struct VisualizationScene {
    width: u32,
    height: u32,
    palette: &'static Palette,
    shapes: Vec<ShapeDescriptor>,
}

impl VisualizationScene {
    /// Build a scene from dream elements and an optional mood
    ///
    /// One shape per element, plus five extras seeded from the mood string so
    /// there is always visual content.
    pub fn new(elements: &[String], mood: Option<&str>, width: u32, height: u32) -> Self {
        let mood = mood.unwrap_or("neutral");
        let palette = palette_for(mood);

        let mut shapes: Vec<ShapeDescriptor> = elements
            .iter()
            .map(|element| shape_for(element, width, height, palette))
            .collect();
        for i in 0..EXTRA_SHAPES {
            shapes.push(shape_for(&format!("{}{}", mood, i), width, height, palette));
        }

        Self {
            width,
            height,
            palette,
            shapes,
        }
    }

    /// Surface width the scene was built for
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height the scene was built for
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The derived shape descriptors, element shapes first
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    /// Produce the draw commands for one frame
    ///
    /// Pure function of the scene and the elapsed seconds: background
    /// gradient, noise speckles, a glow under every shape, the shapes at
    /// their drifted and rotated poses, then the vignette.
    pub fn tick(&self, elapsed: f64) -> Vec<FrameCommand> {
        let mut commands = Vec::with_capacity(2 * self.shapes.len() + 8);

        commands.push(FrameCommand::Clear);
        commands.push(FrameCommand::FillBackground {
            top: self.palette[0].darken(100),
            bottom: self.palette[2].darken(50),
        });

        // Speckles re-roll every frame; seeding from the elapsed-time bits
        // keeps the frame a pure function of its inputs
        let mut rng = StdRng::seed_from_u64(elapsed.to_bits());
        let speckles = (self.width as u64 * self.height as u64 / 1000) as usize;
        for _ in 0..speckles {
            commands.push(FrameCommand::Speckle {
                x: rng.random::<f64>() * self.width as f64,
                y: rng.random::<f64>() * self.height as f64,
                radius: rng.random::<f64>() * 2.0,
                alpha: rng.random::<f64>() * 0.1,
            });
        }

        for shape in &self.shapes {
            let (x, y) = drifted_position(shape, elapsed);
            commands.push(FrameCommand::Glow {
                x,
                y,
                radius: shape.size,
                color: shape.color,
            });
        }

        for shape in &self.shapes {
            commands.push(draw_shape(shape, elapsed));
        }

        commands.push(FrameCommand::Vignette { strength: 0.4 });

        commands
    }
}

/// Base position plus a small sinusoid of elapsed time and the shape's phase
fn drifted_position(shape: &ShapeDescriptor, elapsed: f64) -> (f64, f64) {
    let angle = elapsed * 0.5 + shape.phase;
    (
        shape.x + angle.sin() * DRIFT_RADIUS,
        shape.y + angle.cos() * DRIFT_RADIUS,
    )
}

fn rotate(x: f64, y: f64, cos: f64, sin: f64) -> (f64, f64) {
    (x * cos - y * sin, x * sin + y * cos)
}

fn draw_shape(shape: &ShapeDescriptor, elapsed: f64) -> FrameCommand {
    let (cx, cy) = drifted_position(shape, elapsed);
    let rotation = (shape.rotation + elapsed * shape.speed).to_radians();
    let (sin, cos) = rotation.sin_cos();
    let half = shape.size / 2.0;

    let place = |x: f64, y: f64| {
        let (rx, ry) = rotate(x, y, cos, sin);
        Point {
            x: cx + rx,
            y: cy + ry,
        }
    };

    match shape.kind {
        ShapeKind::Circle => FrameCommand::FillCircle {
            x: cx,
            y: cy,
            radius: half,
            color: shape.color,
        },
        ShapeKind::Rectangle => FrameCommand::FillPolygon {
            points: vec![
                place(-half, -half),
                place(half, -half),
                place(half, half),
                place(-half, half),
            ],
            color: shape.color,
        },
        ShapeKind::Triangle => FrameCommand::FillPolygon {
            points: vec![place(0.0, -half), place(half, half), place(-half, half)],
            color: shape.color,
        },
        ShapeKind::Star => {
            let spikes = 5;
            let outer = half;
            let inner = shape.size / 4.0;
            let points = (0..spikes * 2)
                .map(|i| {
                    let radius = if i % 2 == 0 { outer } else { inner };
                    let angle = std::f64::consts::PI * i as f64 / spikes as f64
                        - std::f64::consts::FRAC_PI_2;
                    place(angle.cos() * radius, angle.sin() * radius)
                })
                .collect();
            FrameCommand::FillPolygon {
                points,
                color: shape.color,
            }
        }
        ShapeKind::Wave => {
            let mut points = Vec::new();
            let mut px = -half;
            while px <= half {
                let py = ((px + elapsed + shape.phase) / shape.frequency).sin() * shape.amplitude;
                points.push(place(px, py));
                px += 1.0;
            }
            FrameCommand::StrokePolyline {
                points,
                color: shape.color,
                width: WAVE_STROKE,
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
