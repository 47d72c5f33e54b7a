//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::analysis::view::{dashboard_view, DashboardView};
use crate::controller::{self, begin_loading, Phase};
use crate::errors::{AppError, ANALYSIS_FAILED_MESSAGE};
use crate::models::analysis::{DietQuery, NutritionAnalysis};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: NutritionAnalysis,
    pub dashboard: DashboardView,
}

#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub phase: Phase,
    pub error: Option<String>,
    pub body_weight_kg: f64,
    pub analysis: Option<NutritionAnalysis>,
    pub dashboard: Option<DashboardView>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// One full submission cycle: validate → loading → one external call →
/// success or error. Rejected with 409 while another submission is
/// outstanding; all adapter failures collapse into the one generic message.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(query): Json<DietQuery>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let food_items_text = query.food_items_text.trim().to_string();
    if food_items_text.is_empty() {
        return Err(AppError::Validation(
            "food_items_text cannot be empty".to_string(),
        ));
    }
    if !(query.body_weight_kg > 0.0) {
        return Err(AppError::Validation(
            "body_weight_kg must be a positive number".to_string(),
        ));
    }

    // Enter loading behind the RAII guard: the overlap guard AND the promise
    // that the phase resolves even if this future is dropped mid-call
    // (client disconnect) or panics.
    let guard = begin_loading(&state.controller, query.body_weight_kg)?;

    info!(
        "Analyzing diet for {}kg body weight ({} chars of food text)",
        query.body_weight_kg,
        food_items_text.len()
    );

    let result = state
        .analyzer
        .analyze(&food_items_text, query.body_weight_kg)
        .await;

    match result {
        Ok(analysis) => {
            guard.complete(analysis.clone());
            let dashboard = dashboard_view(&analysis, query.body_weight_kg);
            Ok(Json(AnalyzeResponse {
                analysis,
                dashboard,
            }))
        }
        Err(e) => {
            guard.fail(ANALYSIS_FAILED_MESSAGE.to_string());
            Err(AppError::Analysis(e))
        }
    }
}

/// GET /api/v1/analysis
///
/// Current controller snapshot. After a failure the prior successful result
/// (and its dashboard) is still present alongside the error message.
pub async fn handle_get_analysis(State(state): State<AppState>) -> Json<SnapshotResponse> {
    let snapshot = controller::lock(&state.controller).snapshot();

    let dashboard = snapshot
        .analysis
        .as_ref()
        .map(|analysis| dashboard_view(analysis, snapshot.body_weight_kg));

    Json(SnapshotResponse {
        phase: snapshot.phase,
        error: snapshot.error,
        body_weight_kg: snapshot.body_weight_kg,
        analysis: snapshot.analysis,
        dashboard,
    })
}
