//! Deterministic shape derivation
//!
//! Every visual property of a shape is derived from a single 32-bit hash of
//! its seed string, so the same dream always produces the same picture.

use serde::{Deserialize, Serialize};

use super::palette::{Color, Palette};

/// The five shape kinds, in hash-selection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Filled circle
    Circle,
    /// Filled square
    Rectangle,
    /// Filled triangle
    Triangle,
    /// Five-pointed star
    Star,
    /// Stroked sine polyline
    Wave,
}

const SHAPE_KINDS: [ShapeKind; 5] = [
    ShapeKind::Circle,
    ShapeKind::Rectangle,
    ShapeKind::Triangle,
    ShapeKind::Star,
    ShapeKind::Wave,
];

/// Geometric and animation parameters derived from one seed string
///
/// Never persisted; lives only for the duration of one visualization session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescriptor {
    /// Base horizontal position
    pub x: f64,
    /// Base vertical position
    pub y: f64,
    /// Diameter / edge length
    pub size: f64,
    /// Fill (or stroke, for waves) color
    pub color: Color,
    /// Base rotation in degrees
    pub rotation: f64,
    /// Which shape to draw
    pub kind: ShapeKind,
    /// Rotation speed in degrees per second
    pub speed: f64,
    /// Wave height; also used by wave shapes only
    pub amplitude: f64,
    /// Wave length divisor
    pub frequency: f64,
    /// Animation phase offset; drives the drift of every shape kind
    pub phase: f64,
}

/// Hash a seed string to a non-negative 32-bit value
///
/// Polynomial rolling hash over UTF-16 code units with 32-bit two's-complement
/// wraparound: `h = h*31 + unit`, written as `(h << 5) - h + unit`. The
/// absolute value is taken as unsigned so the `i32::MIN` edge is exact. The
/// result is bit-for-bit stable across platforms.
pub fn hash_seed(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}

/// Derive a shape from a seed string
///
/// Identical seed, dimensions, and palette always yield an identical
/// descriptor; there is no randomness anywhere in this path.
pub fn shape_for(seed: &str, width: u32, height: u32, palette: &Palette) -> ShapeDescriptor {
    let hash = hash_seed(seed);

    ShapeDescriptor {
        x: (hash % width.max(1)) as f64,
        // The multiply runs in 64 bits: the original arithmetic never wraps
        y: ((hash as u64 * 13) % height.max(1) as u64) as f64,
        size: (hash % 50 + 20) as f64,
        color: palette[hash as usize % palette.len()],
        rotation: (hash % 360) as f64,
        kind: SHAPE_KINDS[hash as usize % SHAPE_KINDS.len()],
        speed: (hash % 5 + 1) as f64,
        amplitude: (hash % 20 + 10) as f64,
        frequency: (hash % 10 + 5) as f64,
        phase: (hash % 10) as f64,
    }
}

// ============================================================================
// TESTS
// ============================================================================
