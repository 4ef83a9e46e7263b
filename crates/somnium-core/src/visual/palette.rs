//! Colors and mood palettes
//!
//! Each mood maps to a fixed five-color palette. Unknown moods fall back to
//! the neutral palette; lookup is case-insensitive.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dream::Mood;

/// An opaque RGB color, serialized as "#RRGGBB"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Construct from channel values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a "#RRGGBB" hex string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as "#RRGGBB"
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Subtract `amount` from every channel, saturating at black
    pub fn darken(&self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color: {}", hex)))
    }
}

/// Five colors per mood
pub type Palette = [Color; 5];

const HAPPY: Palette = [
    Color::rgb(0xFF, 0xC1, 0x07),
    Color::rgb(0xFF, 0xEB, 0x3B),
    Color::rgb(0xFF, 0x98, 0x00),
    Color::rgb(0xF4, 0x43, 0x36),
    Color::rgb(0xE9, 0x1E, 0x63),
];

const SCARY: Palette = [
    Color::rgb(0x21, 0x21, 0x21),
    Color::rgb(0x42, 0x42, 0x42),
    Color::rgb(0x61, 0x61, 0x61),
    Color::rgb(0x75, 0x75, 0x75),
    Color::rgb(0x9E, 0x9E, 0x9E),
];

const PEACEFUL: Palette = [
    Color::rgb(0x4C, 0xAF, 0x50),
    Color::rgb(0x8B, 0xC3, 0x4A),
    Color::rgb(0xCD, 0xDC, 0x39),
    Color::rgb(0x21, 0x96, 0xF3),
    Color::rgb(0x03, 0xA9, 0xF4),
];

const CONFUSING: Palette = [
    Color::rgb(0x9C, 0x27, 0xB0),
    Color::rgb(0x67, 0x3A, 0xB7),
    Color::rgb(0x3F, 0x51, 0xB5),
    Color::rgb(0x21, 0x96, 0xF3),
    Color::rgb(0x00, 0x96, 0x88),
];

const EXCITING: Palette = [
    Color::rgb(0xF4, 0x43, 0x36),
    Color::rgb(0xFF, 0x98, 0x00),
    Color::rgb(0xFF, 0xC1, 0x07),
    Color::rgb(0xFF, 0xEB, 0x3B),
    Color::rgb(0xFF, 0x57, 0x22),
];

const SAD: Palette = [
    Color::rgb(0x3F, 0x51, 0xB5),
    Color::rgb(0x21, 0x96, 0xF3),
    Color::rgb(0x03, 0xA9, 0xF4),
    Color::rgb(0x00, 0xBC, 0xD4),
    Color::rgb(0x60, 0x7D, 0x8B),
];

const ANXIOUS: Palette = [
    Color::rgb(0xFF, 0xC1, 0x07),
    Color::rgb(0xFF, 0x98, 0x00),
    Color::rgb(0xFF, 0x57, 0x22),
    Color::rgb(0x79, 0x55, 0x48),
    Color::rgb(0x9E, 0x9E, 0x9E),
];

const NEUTRAL: Palette = [
    Color::rgb(0x6D, 0x28, 0xD9),
    Color::rgb(0x60, 0xA5, 0xFA),
    Color::rgb(0x8B, 0x5C, 0xF6),
    Color::rgb(0xC4, 0xB5, 0xFD),
    Color::rgb(0xA7, 0x8B, 0xFA),
];

/// Resolve the palette for a mood string
///
/// Case-insensitive; anything unrecognized gets the neutral palette.
pub fn palette_for(mood: &str) -> &'static Palette {
    match Mood::parse_name(mood).unwrap_or_default() {
        Mood::Happy => &HAPPY,
        Mood::Scary => &SCARY,
        Mood::Peaceful => &PEACEFUL,
        Mood::Confusing => &CONFUSING,
        Mood::Exciting => &EXCITING,
        Mood::Sad => &SAD,
        Mood::Anxious => &ANXIOUS,
        Mood::Neutral => &NEUTRAL,
    }
}

// ============================================================================
// TESTS
// ============================================================================
