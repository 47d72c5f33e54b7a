//! Presentation derivations — pure functions from analysis state to
//! chart-friendly values.
//!
//! Nothing here computes nutrition: the only arithmetic is the fixed
//! gram→kcal energy factors and the protein target range, both display
//! concerns the dashboard needs regardless of what the model returned.

use serde::Serialize;

use crate::models::analysis::{Macros, NutritionAnalysis, ProteinStatus};

/// Fixed macronutrient energy factors (kcal per gram).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FATS: f64 = 9.0;

/// Muscle-gain protein target range, grams per kg of body weight.
/// Duplicated in the outbound prompt wording — see `analysis::prompts`.
pub const PROTEIN_TARGET_MIN_G_PER_KG: f64 = 1.6;
pub const PROTEIN_TARGET_MAX_G_PER_KG: f64 = 2.2;

/// One slice of the caloric-distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// One bar of the protein-benchmark chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkBar {
    pub name: &'static str,
    pub value: f64,
}

/// One overview card. `value` is left unrounded; rounding is a display concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroCard {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Everything the dashboard needs that is not verbatim in the analysis.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub macro_cards: Vec<MacroCard>,
    pub caloric_distribution: Vec<ChartSlice>,
    pub protein_benchmark: Vec<BenchmarkBar>,
    pub status_color: &'static str,
}

/// Macro grams converted to kcal by the fixed energy factors.
/// Exact for any input, including all-zero macros.
pub fn caloric_distribution(macros: &Macros) -> Vec<ChartSlice> {
    vec![
        ChartSlice {
            name: "Protein",
            value: macros.protein * KCAL_PER_G_PROTEIN,
            color: "#10b981",
        },
        ChartSlice {
            name: "Carbs",
            value: macros.carbs * KCAL_PER_G_CARBS,
            color: "#3b82f6",
        },
        ChartSlice {
            name: "Fats",
            value: macros.fats * KCAL_PER_G_FATS,
            color: "#f59e0b",
        },
    ]
}

/// Benchmark bars: actual intake against the weight-derived target range.
/// Targets depend only on body weight, never on the reported actual.
pub fn protein_benchmark(body_weight_kg: f64, actual: f64) -> Vec<BenchmarkBar> {
    vec![
        BenchmarkBar {
            name: "Actual",
            value: actual,
        },
        BenchmarkBar {
            name: "Min Target",
            value: body_weight_kg * PROTEIN_TARGET_MIN_G_PER_KG,
        },
        BenchmarkBar {
            name: "Max Target",
            value: body_weight_kg * PROTEIN_TARGET_MAX_G_PER_KG,
        },
    ]
}

/// Display color for the status badge.
pub fn status_color(status: ProteinStatus) -> &'static str {
    match status {
        ProteinStatus::Optimal => "emerald",
        ProteinStatus::Low => "amber",
        ProteinStatus::High => "blue",
        ProteinStatus::Excessive => "rose",
    }
}

/// Overview cards in display order.
pub fn macro_cards(macros: &Macros) -> Vec<MacroCard> {
    vec![
        MacroCard {
            label: "Calories",
            value: macros.calories,
            unit: "kcal",
        },
        MacroCard {
            label: "Protein",
            value: macros.protein,
            unit: "g",
        },
        MacroCard {
            label: "Carbs",
            value: macros.carbs,
            unit: "g",
        },
        MacroCard {
            label: "Fats",
            value: macros.fats,
            unit: "g",
        },
    ]
}

/// Full dashboard view model for one analysis at the submitted weight.
pub fn dashboard_view(analysis: &NutritionAnalysis, body_weight_kg: f64) -> DashboardView {
    DashboardView {
        macro_cards: macro_cards(&analysis.macros),
        caloric_distribution: caloric_distribution(&analysis.macros),
        protein_benchmark: protein_benchmark(body_weight_kg, analysis.protein_analysis.actual),
        status_color: status_color(analysis.protein_analysis.status),
    }
}
