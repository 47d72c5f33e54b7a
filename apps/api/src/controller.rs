//! Application controller — the transient analysis state machine.
//!
//! States: idle → loading → success | error, with any finished state able to
//! re-enter loading on resubmission. Loading is authoritative: a submission
//! while one is outstanding is rejected here, not just discouraged by a
//! disabled submit button. Everything is process-resident and lost on
//! restart; there is nothing to persist.
//!
//! Loading is only ever entered through `begin_loading`, which returns an
//! RAII guard. The guard guarantees the phase resolves to success or error
//! even when the submitting future is dropped mid-call (client disconnect,
//! handler panic) — otherwise one abandoned request would 409 every later
//! submission until restart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::errors::{AppError, ANALYSIS_FAILED_MESSAGE};
use crate::models::analysis::{NutritionAnalysis, DEFAULT_BODY_WEIGHT_KG};

/// The controller as carried in `AppState`.
pub type SharedController = Arc<Mutex<AnalysisController>>;

/// Locks the controller, recovering a poisoned lock: every transition is a
/// handful of plain field writes, so no half-written state can be observed.
pub fn lock(controller: &Mutex<AnalysisController>) -> MutexGuard<'_, AnalysisController> {
    controller.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Enters loading for a new submission and returns the guard that owns the
/// phase until an outcome is recorded. Rejected while another submission is
/// outstanding.
pub fn begin_loading(
    controller: &SharedController,
    body_weight_kg: f64,
) -> Result<LoadingGuard, AppError> {
    lock(controller).begin(body_weight_kg)?;
    Ok(LoadingGuard {
        controller: Arc::clone(controller),
        armed: true,
    })
}

/// Holds the loading phase for one submission. Consumed by `complete` or
/// `fail`; dropped without either, the submission is recorded as failed so
/// the controller never sticks in loading.
pub struct LoadingGuard {
    controller: SharedController,
    armed: bool,
}

impl LoadingGuard {
    /// loading → success.
    pub fn complete(mut self, analysis: NutritionAnalysis) {
        lock(&self.controller).complete(analysis);
        self.armed = false;
    }

    /// loading → error.
    pub fn fail(mut self, message: String) {
        lock(&self.controller).fail(message);
        self.armed = false;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.armed {
            lock(&self.controller).fail(ANALYSIS_FAILED_MESSAGE.to_string());
        }
    }
}

/// The four observable phases of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Owns the last result, last error, and last submitted weight.
/// Exactly one analysis exists at a time; each success replaces it wholesale.
#[derive(Debug)]
pub struct AnalysisController {
    phase: Phase,
    analysis: Option<NutritionAnalysis>,
    error: Option<String>,
    body_weight_kg: f64,
}

/// Read-only view of the controller for the snapshot endpoint.
#[derive(Debug, Clone)]
pub struct ControllerSnapshot {
    pub phase: Phase,
    pub analysis: Option<NutritionAnalysis>,
    pub error: Option<String>,
    pub body_weight_kg: f64,
}

impl Default for AnalysisController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            analysis: None,
            error: None,
            body_weight_kg: DEFAULT_BODY_WEIGHT_KG,
        }
    }

    /// Enters loading for a new submission, recording the submitted weight
    /// and clearing any prior error. Rejected while another analysis is
    /// outstanding.
    pub fn begin(&mut self, body_weight_kg: f64) -> Result<(), AppError> {
        if self.phase == Phase::Loading {
            return Err(AppError::AnalysisInProgress);
        }
        self.phase = Phase::Loading;
        self.error = None;
        self.body_weight_kg = body_weight_kg;
        Ok(())
    }

    /// loading → success: stores the result, replacing any prior one.
    pub fn complete(&mut self, analysis: NutritionAnalysis) {
        self.phase = Phase::Success;
        self.error = None;
        self.analysis = Some(analysis);
    }

    /// loading → error. A prior successful result is retained so the
    /// dashboard can stay rendered beneath the error banner.
    pub fn fail(&mut self, message: String) {
        self.phase = Phase::Error;
        self.error = Some(message);
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            phase: self.phase,
            analysis: self.analysis.clone(),
            error: self.error.clone(),
            body_weight_kg: self.body_weight_kg,
        }
    }
}
