pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analysis",
            post(handlers::handle_analyze).get(handlers::handle_get_analysis),
        )
        .with_state(state)
}
