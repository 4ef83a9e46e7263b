//! REST endpoint handlers
//!
//! Thin request/response mapping over the dream store and the interpretation
//! engine. All validation happens here; the core functions below this layer
//! are total and never contribute failures.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use somnium_core::{generate, DreamRecord, DreamUpdate, NewDream};

use super::error::{ApiError, FieldError};
use super::state::AppState;

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

/// POST /api/dreams body
///
/// Everything optional at the parse stage so missing required fields surface
/// as field-level validation errors instead of opaque deserialization
/// failures.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDreamRequest {
    /// Short title for the entry
    pub title: Option<String>,
    /// Full free-text account of the dream
    pub description: Option<String>,
    /// When the dream occurred
    pub date: Option<DateTime<Utc>>,
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
    pub elements: Option<Vec<String>>,
    /// Opaque visualization stamp
    #[serde(default)]
    pub visualization: Option<String>,
    /// Generated interpretation text
    #[serde(default)]
    pub interpretation: Option<String>,
}

impl CreateDreamRequest {
    fn validate(self) -> Result<NewDream, ApiError> {
        let mut errors = Vec::new();

        if self.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
            errors.push(FieldError::new("title", "Title is required"));
        }
        if self
            .description
            .as_deref()
            .is_none_or(|d| d.trim().is_empty())
        {
            errors.push(FieldError::new("description", "Description is required"));
        }
        if self.date.is_none() {
            errors.push(FieldError::new("date", "Date is required"));
        }

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(NewDream {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            date: self.date.unwrap_or_else(Utc::now),
            mood: self.mood,
            clarity: self.clarity,
            location: self.location,
            elements: self.elements.unwrap_or_default(),
            visualization: self.visualization,
            interpretation: self.interpretation,
        })
    }
}

/// POST /api/generate body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerateRequest {
    /// Free-text account to interpret; required, at least 5 characters
    pub description: Option<String>,
    /// Elements already picked by the user
    #[serde(default)]
    pub elements: Vec<String>,
    /// Mood for palette and interpretation
    #[serde(default)]
    pub mood: Option<String>,
}

/// POST /api/generate response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Final element list: user elements plus keywords from the description
    pub elements: Vec<String>,
    /// Assembled interpretation text
    pub interpretation: String,
    /// Everything a client needs to rebuild the same visualization
    pub visualization_seed: VisualizationSeed,
}

/// Deterministic inputs for the client-side visualization
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationSeed {
    /// Shape seed strings
    pub elements: Vec<String>,
    /// Palette mood, defaulted to "neutral"
    pub mood: String,
}

// ============================================================================
// EXTRACTOR MAPPING
// ============================================================================

fn bad_body(rejection: JsonRejection) -> ApiError {
    ApiError::invalid("body", rejection.body_text())
}

fn dream_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(ApiError::invalid("id", "Invalid dream ID")),
    }
}

// ============================================================================
// DREAM CRUD
// ============================================================================

/// GET /api/dreams - all records, newest dream first
pub async fn list_dreams(
    State(state): State<AppState>,
) -> Result<Json<Vec<DreamRecord>>, ApiError> {
    Ok(Json(state.store.get_dreams()?))
}

/// GET /api/dreams/{id}
pub async fn get_dream(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DreamRecord>, ApiError> {
    let id = dream_id(path)?;
    let record = state.store.get_dream(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(record))
}

/// POST /api/dreams
pub async fn create_dream(
    State(state): State<AppState>,
    body: Result<Json<CreateDreamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DreamRecord>), ApiError> {
    let Json(request) = body.map_err(bad_body)?;
    let dream = request.validate()?;
    let record = state.store.create_dream(dream)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/dreams/{id} - partial merge over existing fields
pub async fn update_dream(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<DreamUpdate>, JsonRejection>,
) -> Result<Json<DreamRecord>, ApiError> {
    let id = dream_id(path)?;
    let Json(update) = body.map_err(bad_body)?;
    let record = state.store.update_dream(id, update)?;
    Ok(Json(record))
}

/// DELETE /api/dreams/{id}
pub async fn delete_dream(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = dream_id(path)?;
    if state.store.delete_dream(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// GET /api/dreams/search/{query}
pub async fn search_dreams(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<DreamRecord>>, ApiError> {
    Ok(Json(state.store.search_dreams(&query)?))
}

// ============================================================================
// GENERATION
// ============================================================================

/// POST /api/generate - interpretation plus visualization seed
pub async fn generate_visualization(
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = body.map_err(bad_body)?;

    let description = request.description.unwrap_or_default();
    if description.chars().count() < 5 {
        return Err(ApiError::invalid(
            "description",
            "Please provide a description of your dream",
        ));
    }

    let result = generate(&description, &request.elements, request.mood.as_deref());

    Ok(Json(GenerateResponse {
        elements: result.elements.clone(),
        interpretation: result.interpretation,
        visualization_seed: VisualizationSeed {
            elements: result.elements,
            mood: result.mood,
        },
    }))
}

// ============================================================================
// HEALTH
// ============================================================================

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let total = state.store.get_dreams()?.len();

    Ok(Json(json!({
        "status": "ok",
        "totalDreams": total,
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

// ============================================================================
// TESTS
// ============================================================================
