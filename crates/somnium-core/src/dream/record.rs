//! Dream record - The fundamental unit of the journal
//!
//! Each record represents one remembered dream with:
//! - Journaled text (title, description, location)
//! - Coarse tags (mood, clarity, free-text elements)
//! - Generated fields (interpretation, visualization stamp)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// MOOD
// ============================================================================

/// The coarse emotional tag attached to a dream
///
/// Moods select both a color palette for the visualization and an extra
/// interpretation phrase. Records store mood as free text; this enum
/// canonicalizes the known values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Joyful or pleasant dream
    Happy,
    /// Frightening dream
    Scary,
    /// Calm, serene dream
    Peaceful,
    /// Disorienting or surreal dream
    Confusing,
    /// High-energy dream
    Exciting,
    /// Melancholy dream
    Sad,
    /// Tense or worried dream
    Anxious,
    /// No pronounced mood
    #[default]
    Neutral,
}

impl Mood {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Scary => "scary",
            Mood::Peaceful => "peaceful",
            Mood::Confusing => "confusing",
            Mood::Exciting => "exciting",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Neutral => "neutral",
        }
    }

    /// Parse from string name (case-insensitive); `None` for unknown moods
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "happy" => Some(Mood::Happy),
            "scary" => Some(Mood::Scary),
            "peaceful" => Some(Mood::Peaceful),
            "confusing" => Some(Mood::Confusing),
            "exciting" => Some(Mood::Exciting),
            "sad" => Some(Mood::Sad),
            "anxious" => Some(Mood::Anxious),
            "neutral" => Some(Mood::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CLARITY
// ============================================================================

/// How clearly the dream was remembered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clarity {
    /// Remembered in sharp detail
    Vivid,
    /// Mostly clear
    Clear,
    /// Partially remembered
    Moderate,
    /// Hard to pin down
    Fuzzy,
    /// Barely remembered
    Vague,
}

impl Clarity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Clarity::Vivid => "vivid",
            Clarity::Clear => "clear",
            Clarity::Moderate => "moderate",
            Clarity::Fuzzy => "fuzzy",
            Clarity::Vague => "vague",
        }
    }

    /// Parse from string name (case-insensitive); `None` for unknown values
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vivid" => Some(Clarity::Vivid),
            "clear" => Some(Clarity::Clear),
            "moderate" => Some(Clarity::Moderate),
            "fuzzy" => Some(Clarity::Fuzzy),
            "vague" => Some(Clarity::Vague),
            _ => None,
        }
    }
}

impl std::fmt::Display for Clarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// DREAM RECORD
// ============================================================================

/// A saved dream entry
///
/// Owned exclusively by the dream store: `id` is assigned at creation and
/// stable for the record's lifetime, `created_at` never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamRecord {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Short title for the entry
    pub title: String,
    /// Full free-text account of the dream
    pub description: String,
    /// When the dream occurred
    pub date: DateTime<Utc>,
    /// Coarse emotional tag (free text; known values in [`Mood`])
    pub mood: Option<String>,
    /// How clearly it was remembered (free text; known values in [`Clarity`])
    pub clarity: Option<String>,
    /// Where the dream took place
    pub location: Option<String>,
    /// Short keywords describing dream features ("water", "falling", ...)
    pub elements: Vec<String>,
    /// Opaque visualization stamp; no binary image is ever persisted
    pub visualization: Option<String>,
    /// Generated interpretation text
    pub interpretation: Option<String>,
    /// When the record was created; immutable
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new dream record
///
/// Uses `deny_unknown_fields` so malformed payloads fail at the boundary
/// instead of silently dropping data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewDream {
    /// Short title for the entry
    pub title: String,
    /// Full free-text account of the dream
    pub description: String,
    /// When the dream occurred
    pub date: DateTime<Utc>,
    /// Coarse emotional tag
    #[serde(default)]
    pub mood: Option<String>,
    /// How clearly it was remembered
    #[serde(default)]
    pub clarity: Option<String>,
    /// Where the dream took place
    #[serde(default)]
    pub location: Option<String>,
    /// Short keywords describing dream features
    #[serde(default)]
    pub elements: Vec<String>,
    /// Opaque visualization stamp
    #[serde(default)]
    pub visualization: Option<String>,
    /// Generated interpretation text
    #[serde(default)]
    pub interpretation: Option<String>,
}

/// Partial update for an existing dream record
///
/// Absent fields keep their current value. `id` and `created_at` are not
/// updatable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DreamUpdate {
    /// Replacement title
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement dream date
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Replacement mood
    #[serde(default)]
    pub mood: Option<String>,
    /// Replacement clarity
    #[serde(default)]
    pub clarity: Option<String>,
    /// Replacement location
    #[serde(default)]
    pub location: Option<String>,
    /// Replacement element list
    #[serde(default)]
    pub elements: Option<Vec<String>>,
    /// Replacement visualization stamp
    #[serde(default)]
    pub visualization: Option<String>,
    /// Replacement interpretation text
    #[serde(default)]
    pub interpretation: Option<String>,
}

impl DreamUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self == &DreamUpdate::default()
    }

    /// Merge this update over an existing record, leaving absent fields alone
    pub fn apply_to(&self, record: &mut DreamRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(mood) = &self.mood {
            record.mood = Some(mood.clone());
        }
        if let Some(clarity) = &self.clarity {
            record.clarity = Some(clarity.clone());
        }
        if let Some(location) = &self.location {
            record.location = Some(location.clone());
        }
        if let Some(elements) = &self.elements {
            record.elements = elements.clone();
        }
        if let Some(visualization) = &self.visualization {
            record.visualization = Some(visualization.clone());
        }
        if let Some(interpretation) = &self.interpretation {
            record.interpretation = Some(interpretation.clone());
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
