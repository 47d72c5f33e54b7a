//! Diet Analysis Adapter — one external round-trip per submission.
//!
//! The `DietAnalyzer` trait is the seam between the HTTP surface and the
//! external model, carried in `AppState` as `Arc<dyn DietAnalyzer>` so tests
//! swap in doubles. `GeminiAnalyzer` is the production implementation.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::schema::nutrition_analysis_schema;
use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::models::analysis::NutritionAnalysis;

/// Everything that can go wrong between submission and a usable analysis.
/// All variants collapse into one generic user-facing message at the HTTP
/// boundary; the distinction exists for logs and tests.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("response does not match the declared schema: {0}")]
    SchemaMismatch(String),
}

/// The adapter contract: one asynchronous external call, no retries, no
/// caching, no local recomputation of nutrition values.
///
/// Callers enforce non-empty food text and positive weight before invoking.
#[async_trait]
pub trait DietAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        food_items_text: &str,
        body_weight_kg: f64,
    ) -> Result<NutritionAnalysis, AnalysisError>;
}

/// Production analyzer backed by the Gemini client.
pub struct GeminiAnalyzer {
    llm: LlmClient,
}

impl GeminiAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl DietAnalyzer for GeminiAnalyzer {
    async fn analyze(
        &self,
        food_items_text: &str,
        body_weight_kg: f64,
    ) -> Result<NutritionAnalysis, AnalysisError> {
        let prompt = build_analysis_prompt(food_items_text, body_weight_kg);
        debug!("Issuing analysis call ({} prompt chars)", prompt.len());

        let text = self
            .llm
            .generate_json(&prompt, nutrition_analysis_schema())
            .await?;

        parse_analysis(&text)
    }
}

/// Parses a raw text payload into a validated `NutritionAnalysis`.
///
/// Two distinct failure kinds: the payload may not be JSON at all
/// (`InvalidJson`), or it may be JSON that does not satisfy the declared
/// schema (`SchemaMismatch`). The schema is declared to the model on every
/// call, but its output is external input and is never trusted unchecked.
pub fn parse_analysis(text: &str) -> Result<NutritionAnalysis, AnalysisError> {
    let text = strip_json_fences(text);

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(AnalysisError::InvalidJson)?;

    let analysis: NutritionAnalysis = serde_json::from_value(value)
        .map_err(|e| AnalysisError::SchemaMismatch(e.to_string()))?;

    validate_analysis(&analysis)?;
    Ok(analysis)
}

/// Numeric range checks the JSON shape alone cannot express.
/// `difference` is exempt: it is signed by design.
fn validate_analysis(analysis: &NutritionAnalysis) -> Result<(), AnalysisError> {
    let checks = [
        ("macros.protein", analysis.macros.protein),
        ("macros.calories", analysis.macros.calories),
        ("macros.carbs", analysis.macros.carbs),
        ("macros.fats", analysis.macros.fats),
        ("proteinAnalysis.actual", analysis.protein_analysis.actual),
    ];

    for (field, value) in checks {
        if !value.is_finite() || value < 0.0 {
            return Err(AnalysisError::SchemaMismatch(format!(
                "{field} must be a non-negative number, got {value}"
            )));
        }
    }

    if !analysis.protein_analysis.difference.is_finite() {
        return Err(AnalysisError::SchemaMismatch(
            "proteinAnalysis.difference must be a finite number".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::MODEL;
    use crate::models::analysis::ProteinStatus;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VALID_PAYLOAD: &str = r#"{
        "macros": {"protein": 150, "calories": 2000, "carbs": 150, "fats": 60},
        "summary": "Solid day of eating.",
        "proteinAnalysis": {"status": "optimal", "range": "128-176g", "actual": 150, "difference": 0},
        "suggestions": ["Add a post-workout shake."],
        "timingAdvice": "Front-load protein at breakfast.",
        "hydrationAdvice": "3L spread across the day."
    }"#;

    #[test]
    fn test_parse_analysis_accepts_schema_shaped_payload() {
        let analysis = parse_analysis(VALID_PAYLOAD).unwrap();
        assert_eq!(analysis.macros.protein, 150.0);
        assert_eq!(analysis.protein_analysis.status, ProteinStatus::Optimal);
        assert_eq!(analysis.suggestions.len(), 1);
    }

    #[test]
    fn test_parse_analysis_accepts_fenced_payload() {
        let fenced = format!("```json\n{VALID_PAYLOAD}\n```");
        assert!(parse_analysis(&fenced).is_ok());
    }

    #[test]
    fn test_parse_analysis_rejects_non_json() {
        let err = parse_analysis("I could not analyze that diet.").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_analysis_rejects_missing_field_as_schema_mismatch() {
        let payload = r#"{"macros": {"protein": 1, "calories": 1, "carbs": 1, "fats": 1}}"#;
        let err = parse_analysis(payload).unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaMismatch(_)));
    }

    #[test]
    fn test_parse_analysis_rejects_unknown_status() {
        let payload = VALID_PAYLOAD.replace("\"optimal\"", "\"moderate\"");
        let err = parse_analysis(&payload).unwrap_err();
        assert!(matches!(err, AnalysisError::SchemaMismatch(_)));
    }

    #[test]
    fn test_parse_analysis_rejects_negative_macro() {
        let payload = VALID_PAYLOAD.replace("\"fats\": 60", "\"fats\": -5");
        let err = parse_analysis(&payload).unwrap_err();
        match err {
            AnalysisError::SchemaMismatch(msg) => assert!(msg.contains("macros.fats")),
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_analysis_allows_negative_difference() {
        let payload = VALID_PAYLOAD.replace("\"difference\": 0", "\"difference\": -22");
        let analysis = parse_analysis(&payload).unwrap();
        assert_eq!(analysis.protein_analysis.difference, -22.0);
    }

    fn gemini_body(payload: &str) -> serde_json::Value {
        json!({"candidates": [{"content": {"parts": [{"text": payload}]}}]})
    }

    #[tokio::test]
    async fn test_gemini_analyzer_embeds_weight_and_food_in_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/{MODEL}:generateContent")))
            .and(body_string_contains("80kg"))
            .and(body_string_contains("200g grilled chicken breast"))
            .and(body_string_contains("responseSchema"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(VALID_PAYLOAD)))
            .expect(1)
            .mount(&server)
            .await;

        let analyzer = GeminiAnalyzer::new(LlmClient::with_base_url(
            "test-key".to_string(),
            server.uri(),
        ));
        let analysis = analyzer
            .analyze("200g grilled chicken breast", 80.0)
            .await
            .unwrap();
        assert_eq!(analysis.macros.calories, 2000.0);
        assert_eq!(analysis.macros.protein, 150.0);
    }

    #[tokio::test]
    async fn test_gemini_analyzer_propagates_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/{MODEL}:generateContent")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let analyzer = GeminiAnalyzer::new(LlmClient::with_base_url(
            "test-key".to_string(),
            server.uri(),
        ));
        let err = analyzer.analyze("3 eggs", 70.0).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Llm(LlmError::EmptyContent)));
    }
}
