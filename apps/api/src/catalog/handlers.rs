use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::internship::InternshipRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub loaded_at: DateTime<Utc>,
    pub source: String,
    pub internships: Vec<InternshipRecord>,
}

/// GET /api/v1/internships
///
/// The full snapshot plus load metadata, before any filtering is applied.
pub async fn handle_list_internships(State(state): State<AppState>) -> Json<CatalogResponse> {
    let snapshot = &state.catalog;
    Json(CatalogResponse {
        count: snapshot.records.len(),
        loaded_at: snapshot.loaded_at,
        source: snapshot.source.clone(),
        internships: snapshot.records.clone(),
    })
}

/// GET /api/v1/internships/:id
pub async fn handle_get_internship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InternshipRecord>, AppError> {
    let record = state
        .catalog
        .find(&id)
        .ok_or_else(|| AppError::NotFound(format!("Internship {id} not found")))?;
    Ok(Json(record.clone()))
}
