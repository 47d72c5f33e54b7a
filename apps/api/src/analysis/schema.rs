use serde_json::json;

/// Returns the JSON schema declared to the model for diet-analysis responses.
///
/// This is the wire contract behind `models::analysis::NutritionAnalysis`;
/// the two must stay in sync. The model is asked to emit exactly this shape
/// (`responseMimeType: application/json`), and the adapter re-validates the
/// parsed payload against the same expectations.
pub fn nutrition_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "macros": {
                "type": "object",
                "properties": {
                    "protein": { "type": "number" },
                    "calories": { "type": "number" },
                    "carbs": { "type": "number" },
                    "fats": { "type": "number" }
                },
                "required": ["protein", "calories", "carbs", "fats"]
            },
            "summary": { "type": "string" },
            "proteinAnalysis": {
                "type": "object",
                "properties": {
                    "status": {
                        "type": "string",
                        "enum": ["low", "optimal", "high", "excessive"]
                    },
                    "range": { "type": "string" },
                    "actual": { "type": "number" },
                    "difference": { "type": "number" }
                },
                "required": ["status", "range", "actual", "difference"]
            },
            "suggestions": {
                "type": "array",
                "items": { "type": "string" }
            },
            "timingAdvice": { "type": "string" },
            "hydrationAdvice": { "type": "string" }
        },
        "required": [
            "macros", "summary", "proteinAnalysis",
            "suggestions", "timingAdvice", "hydrationAdvice"
        ]
    })
}
