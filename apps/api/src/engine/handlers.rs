use axum::{extract::State, Json};
use serde::Serialize;

use crate::engine::recommend::{recommend, Recommendation};
use crate::models::internship::ScoredInternship;
use crate::models::profile::UserProfile;
use crate::state::AppState;

/// Wire shape of a recommendation result: exactly one of the two fields is
/// present, never both. The renderer shows the list when `internships` is
/// set and the message area otherwise.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internships: Option<Vec<ScoredInternship>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(result: Recommendation) -> Self {
        match result {
            Recommendation::Matches(internships) => Self {
                internships: Some(internships),
                message: None,
            },
            Recommendation::Empty(reason) => Self {
                internships: None,
                message: Some(reason.message()),
            },
        }
    }
}

/// POST /api/v1/recommendations
///
/// Takes the caller's current profile and runs one engine pass over the
/// catalog snapshot. Pure glue: no decision logic lives here.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Json<RecommendationResponse> {
    Json(recommend(&state.catalog.records, &profile).into())
}
