pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matches/score", post(handlers::handle_score))
        .route("/api/v1/matches/top", post(handlers::handle_top_matches))
        .with_state(state)
}
