pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::engine::handlers as engine_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route(
            "/api/v1/internships",
            get(catalog_handlers::handle_list_internships),
        )
        .route(
            "/api/v1/internships/:id",
            get(catalog_handlers::handle_get_internship),
        )
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(engine_handlers::handle_recommendations),
        )
        .with_state(state)
}
