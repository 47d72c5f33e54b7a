//! Data contract for diet analysis.
//!
//! `NutritionAnalysis` mirrors the JSON shape declared to the model in
//! `analysis::schema` — camelCase on the wire, validated after parsing in
//! `analysis::analyzer`. The service never computes nutrition values itself.

use serde::{Deserialize, Serialize};

/// Weight assumed when the form leaves the field unspecified.
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;

fn default_body_weight_kg() -> f64 {
    DEFAULT_BODY_WEIGHT_KG
}

/// One analysis submission. Transient: built per request, dropped after the
/// external call completes.
#[derive(Debug, Clone, Deserialize)]
pub struct DietQuery {
    pub food_items_text: String,
    #[serde(default = "default_body_weight_kg")]
    pub body_weight_kg: f64,
}

/// Estimated daily macros. Grams, except `calories` (kcal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub calories: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Where the estimated protein intake sits relative to the muscle-gain range.
/// Classified by the model, not locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProteinStatus {
    Low,
    Optimal,
    High,
    Excessive,
}

/// Protein intake vs the muscle-gain target range.
/// `difference` is signed: negative means below target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinAnalysis {
    pub status: ProteinStatus,
    pub range: String,
    pub actual: f64,
    pub difference: f64,
}

/// Full structured result of one diet analysis.
///
/// Exactly one instance lives in the controller at a time; each successful
/// analysis replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysis {
    pub macros: Macros,
    pub summary: String,
    pub protein_analysis: ProteinAnalysis,
    pub suggestions: Vec<String>,
    pub timing_advice: String,
    pub hydration_advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_status_serde_lowercase() {
        for (json, expected) in [
            (r#""low""#, ProteinStatus::Low),
            (r#""optimal""#, ProteinStatus::Optimal),
            (r#""high""#, ProteinStatus::High),
            (r#""excessive""#, ProteinStatus::Excessive),
        ] {
            let status: ProteinStatus = serde_json::from_str(json).unwrap();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn test_protein_status_rejects_unknown_value() {
        let result = serde_json::from_str::<ProteinStatus>(r#""moderate""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_diet_query_weight_defaults_to_70() {
        let query: DietQuery =
            serde_json::from_str(r#"{"food_items_text": "3 eggs"}"#).unwrap();
        assert_eq!(query.body_weight_kg, DEFAULT_BODY_WEIGHT_KG);
        assert_eq!(query.food_items_text, "3 eggs");
    }

    #[test]
    fn test_nutrition_analysis_deserializes_camel_case_wire_shape() {
        let json = r#"{
            "macros": {"protein": 150, "calories": 2000, "carbs": 150, "fats": 60},
            "summary": "Solid intake overall.",
            "proteinAnalysis": {
                "status": "optimal",
                "range": "128-176g",
                "actual": 150,
                "difference": 0
            },
            "suggestions": ["Add a casein shake before bed."],
            "timingAdvice": "Spread protein across 4 meals.",
            "hydrationAdvice": "Aim for 3L of water."
        }"#;

        let analysis: NutritionAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.macros.calories, 2000.0);
        assert_eq!(analysis.protein_analysis.status, ProteinStatus::Optimal);
        assert_eq!(analysis.suggestions.len(), 1);
        assert_eq!(analysis.timing_advice, "Spread protein across 4 meals.");
    }

    #[test]
    fn test_nutrition_analysis_rejects_missing_required_field() {
        // proteinAnalysis missing entirely
        let json = r#"{
            "macros": {"protein": 150, "calories": 2000, "carbs": 150, "fats": 60},
            "summary": "ok",
            "suggestions": [],
            "timingAdvice": "ok",
            "hydrationAdvice": "ok"
        }"#;
        assert!(serde_json::from_str::<NutritionAnalysis>(json).is_err());
    }
}
