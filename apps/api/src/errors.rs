use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::analyzer::AnalysisError;

/// The one user-facing failure message for a rejected analysis.
/// Transport errors, empty payloads, and malformed payloads all collapse into
/// this; the specific cause is only logged.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze diet. Please check your food list and try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::AnalysisInProgress => (
                StatusCode::CONFLICT,
                "ANALYSIS_IN_PROGRESS",
                "An analysis is already in progress. Wait for it to finish before submitting again."
                    .to_string(),
            ),
            AppError::Analysis(e) => {
                tracing::error!("Analysis error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_FAILED",
                    ANALYSIS_FAILED_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
