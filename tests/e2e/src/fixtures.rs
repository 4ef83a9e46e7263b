//! Sample dream payloads

use serde_json::{json, Value};

/// Minimal valid POST /api/dreams body
pub fn minimal_dream(title: &str, date: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{} - a dream worth keeping", title),
        "date": date,
    })
}

/// Fully populated POST /api/dreams body
pub fn full_dream() -> Value {
    json!({
        "title": "Night swim",
        "description": "Swimming through a moonlit ocean toward a distant door",
        "date": "2026-02-14T06:30:00Z",
        "mood": "peaceful",
        "clarity": "vivid",
        "location": "childhood beach",
        "elements": ["ocean", "moonlight", "door"],
    })
}
