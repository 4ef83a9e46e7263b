//! Dream symbol table
//!
//! Static rules mapping trigger keywords to one interpretive theme each, plus
//! the closed mood phrase table. Matching is substring-based: an element
//! matches an entry when any of the entry's keywords occurs inside the
//! lower-cased element, so "dark forest" triggers both the darkness and the
//! forest entries.

/// A static interpretation rule
#[derive(Debug, Clone, Copy)]
pub struct SymbolEntry {
    /// Canonical symbol name
    pub name: &'static str,
    /// Trigger keywords, matched as substrings of lower-cased elements
    pub keywords: &'static [&'static str],
    /// Theme phrase contributed when the entry matches
    pub interpretation: &'static str,
}

/// The symbol table, in contribution order
pub const DREAM_SYMBOLS: &[SymbolEntry] = &[
    SymbolEntry {
        name: "water",
        keywords: &[
            "water", "ocean", "sea", "river", "lake", "swim", "pool", "rain", "flood",
        ],
        interpretation: "Emotions and the unconscious mind",
    },
    SymbolEntry {
        name: "flying",
        keywords: &["fly", "flying", "float", "air", "sky", "bird", "wings"],
        interpretation: "Freedom and perspective",
    },
    SymbolEntry {
        name: "falling",
        keywords: &["fall", "falling", "drop", "plummet", "descend"],
        interpretation: "Insecurity or loss of control",
    },
    SymbolEntry {
        name: "house",
        keywords: &["house", "home", "building", "room", "apartment"],
        interpretation: "Self and identity",
    },
    SymbolEntry {
        name: "being chased",
        keywords: &["chase", "chased", "pursue", "run", "escape", "hide"],
        interpretation: "Avoidance of issues or anxiety",
    },
    SymbolEntry {
        name: "darkness",
        keywords: &["dark", "darkness", "night", "shadow", "black"],
        interpretation: "The unknown or uncertainty",
    },
    SymbolEntry {
        name: "light",
        keywords: &["light", "bright", "sun", "shine", "glow", "illumination"],
        interpretation: "Clarity or revelation",
    },
    SymbolEntry {
        name: "teeth",
        keywords: &["teeth", "tooth", "mouth", "bite", "dentist"],
        interpretation: "Anxiety or concerns about appearance",
    },
    SymbolEntry {
        name: "nakedness",
        keywords: &["naked", "nude", "undressed", "clothes", "exposed"],
        interpretation: "Vulnerability or exposure",
    },
    SymbolEntry {
        name: "test or exam",
        keywords: &["test", "exam", "school", "study", "unprepared"],
        interpretation: "Self-evaluation or fear of failure",
    },
    SymbolEntry {
        name: "forest",
        keywords: &["forest", "tree", "woods", "jungle", "vegetation"],
        interpretation: "Growth and life path",
    },
    SymbolEntry {
        name: "mountains",
        keywords: &["mountain", "hill", "climb", "peak", "summit"],
        interpretation: "Challenges and obstacles to overcome",
    },
    SymbolEntry {
        name: "doors or windows",
        keywords: &["door", "window", "gate", "entrance", "exit", "passage"],
        interpretation: "New opportunities or transitions",
    },
    SymbolEntry {
        name: "death",
        keywords: &["death", "dying", "funeral", "cemetery", "grave"],
        interpretation: "Transformation and change",
    },
    SymbolEntry {
        name: "animals",
        keywords: &["animal", "creature", "beast", "wild"],
        interpretation: "Instincts and untamed aspects of personality",
    },
    SymbolEntry {
        name: "vehicles",
        keywords: &["car", "vehicle", "drive", "train", "bus", "airplane", "boat"],
        interpretation: "Direction and momentum in your life path",
    },
    SymbolEntry {
        name: "money",
        keywords: &["money", "cash", "coin", "wealth", "rich", "poor"],
        interpretation: "Self-worth and personal value",
    },
    SymbolEntry {
        name: "food",
        keywords: &["food", "eat", "meal", "hungry", "feast", "starve"],
        interpretation: "Nourishment and unmet needs",
    },
    SymbolEntry {
        name: "mirror",
        keywords: &["mirror", "reflection", "image"],
        interpretation: "Self-image and reflection",
    },
    SymbolEntry {
        name: "bridge",
        keywords: &["bridge", "span", "connect"],
        interpretation: "Transition and connection between life stages",
    },
];

/// Extra phrase contributed by a known mood; unknown moods contribute nothing
pub fn mood_phrase(mood: &str) -> Option<&'static str> {
    match mood.to_lowercase().as_str() {
        "happy" => Some("Contentment or wish fulfillment"),
        "scary" => Some("Processing fears or anxieties"),
        "peaceful" => Some("Inner harmony or resolved conflicts"),
        "confusing" => Some("Unprocessed emotions or thoughts"),
        "exciting" => Some("Anticipation or desire for stimulation"),
        "sad" => Some("Processing grief or disappointment"),
        "anxious" => Some("Unresolved tensions or worries"),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
