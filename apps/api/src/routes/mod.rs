pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::prompt::handlers;
use crate::state::AppState;
use crate::vision;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Prompt composition API
        .route("/api/v1/prompt/system", post(handlers::handle_compose))
        .route("/api/v1/prompt/route", post(handlers::handle_route))
        // Vision API — the only route that calls the LLM
        .route("/api/v1/vision/describe", post(vision::handle_describe))
        .with_state(state)
}
