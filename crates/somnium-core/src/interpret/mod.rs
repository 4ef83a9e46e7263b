//! Interpretation engine
//!
//! Pure keyword-matching interpretation of a dream's elements against the
//! static symbol table. Total over well-typed input: every element either
//! matches symbol entries or contributes a generic fallback phrase, so the
//! engine itself never fails.

use serde::{Deserialize, Serialize};

use crate::symbols::{mood_phrase, DREAM_SYMBOLS};

/// Tokens skipped when mining the description for extra elements
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "of",
];

/// Sentence prefix for the joined theme list
const PREFIX: &str = "Your dream suggests themes of: ";

/// Used when no element and no mood contributed anything
const EMPTY_FALLBACK: &str = "Personal exploration and self-discovery.";

/// Closing paragraph appended to every interpretation
const DISCLAIMER: &str = "\n\nRemember that dream interpretation is subjective, and personal context may provide deeper meaning.";

/// Everything the generate operation hands back to the caller
///
/// `elements` is the final list (user elements plus keywords mined from the
/// description) and seeds the visualization; `mood` is the palette key,
/// defaulted to "neutral".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationResult {
    /// Final element list, first-seen order
    pub elements: Vec<String>,
    /// Assembled interpretation text
    pub interpretation: String,
    /// Mood used for the palette
    pub mood: String,
}

/// Mine the description for extra elements
///
/// Splits on whitespace, lower-cases, drops stop words and tokens of length
/// <= 3, and appends tokens not already present, preserving first-seen order.
/// User-supplied elements keep their original casing.
pub fn expand_elements(elements: &[String], description: Option<&str>) -> Vec<String> {
    let mut expanded: Vec<String> = elements.to_vec();

    if let Some(description) = description {
        for token in description.to_lowercase().split_whitespace() {
            if token.len() <= 3 || STOP_WORDS.contains(&token) {
                continue;
            }
            if !expanded.iter().any(|e| e == token) {
                expanded.push(token.to_string());
            }
        }
    }

    expanded
}

/// Build the interpretation text for a dream
///
/// Elements are matched case-insensitively against the symbol table; every
/// matching entry contributes its theme phrase once, elements with no match
/// contribute a fallback phrase naming the element, and a known mood appends
/// its phrase. Duplicate phrases collapse to their first occurrence.
pub fn interpret(elements: &[String], description: Option<&str>, mood: Option<&str>) -> String {
    interpret_expanded(&expand_elements(elements, description), mood)
}

/// Run the generate operation: expand elements once, interpret, pick the
/// palette mood
pub fn generate(description: &str, elements: &[String], mood: Option<&str>) -> VisualizationResult {
    let expanded = expand_elements(elements, Some(description));
    let interpretation = interpret_expanded(&expanded, mood);

    VisualizationResult {
        elements: expanded,
        interpretation,
        mood: mood.unwrap_or("neutral").to_string(),
    }
}

fn interpret_expanded(elements: &[String], mood: Option<&str>) -> String {
    let mut phrases: Vec<String> = Vec::new();

    for element in elements {
        let normalized = element.to_lowercase();
        let mut matched = false;

        for entry in DREAM_SYMBOLS {
            if entry.keywords.iter().any(|k| normalized.contains(k)) {
                phrases.push(entry.interpretation.to_string());
                matched = true;
            }
        }

        if !matched {
            phrases.push(format!("Personal significance related to \"{}\"", element));
        }
    }

    if let Some(mood) = mood {
        if let Some(phrase) = mood_phrase(mood) {
            phrases.push(phrase.to_string());
        }
    }

    // First occurrence wins
    let mut unique: Vec<String> = Vec::new();
    for phrase in phrases {
        if !unique.contains(&phrase) {
            unique.push(phrase);
        }
    }

    let mut interpretation = String::from(PREFIX);
    if unique.is_empty() {
        interpretation.push_str(EMPTY_FALLBACK);
    } else {
        interpretation.push_str(&unique.join(", "));
        interpretation.push('.');
    }
    interpretation.push_str(DISCLAIMER);

    interpretation
}

// ============================================================================
// TESTS
// ============================================================================
