// Prompt constants and builders for the diet-analysis call.

use crate::analysis::view::{PROTEIN_TARGET_MAX_G_PER_KG, PROTEIN_TARGET_MIN_G_PER_KG};

/// Analysis prompt template. Replace `{body_weight_kg}` and
/// `{food_items_text}` before sending.
///
/// The 1.6–2.2 g/kg muscle-gain range is spelled out here AND used for the
/// benchmark chart in `view` — whether the model's `status` classification
/// actually honors it is up to the model and is not re-checked locally.
const ANALYSIS_PROMPT_TEMPLATE: &str = "\
Analyze this daily diet for a person weighing {body_weight_kg}kg who wants to gain muscle.
Food list: {food_items_text}

Calculate estimated Protein (g), Calories (kcal), Carbs (g), and Fats (g).
Compare protein intake with the muscle gain range ({min}g to {max}g per kg).
Provide specific suggestions, timing advice, and hydration advice.";

/// Builds the full analysis instruction for one submission.
pub fn build_analysis_prompt(food_items_text: &str, body_weight_kg: f64) -> String {
    // Free-form food text is substituted last so placeholder-looking input
    // never gets rewritten.
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{min}", &PROTEIN_TARGET_MIN_G_PER_KG.to_string())
        .replace("{max}", &PROTEIN_TARGET_MAX_G_PER_KG.to_string())
        .replace("{body_weight_kg}", &format_weight(body_weight_kg))
        .replace("{food_items_text}", food_items_text)
}

// "80" not "80.0" — the prompt reads as prose.
fn format_weight(kg: f64) -> String {
    if kg.fract() == 0.0 {
        format!("{}", kg as i64)
    } else {
        format!("{kg}")
    }
}
