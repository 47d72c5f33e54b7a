use std::sync::{Arc, Mutex};

use crate::analysis::analyzer::DietAnalyzer;
use crate::controller::AnalysisController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable adapter to the external model. Production: `GeminiAnalyzer`.
    pub analyzer: Arc<dyn DietAnalyzer>,
    /// The single transient controller. A plain mutex: it is locked only for
    /// field transitions and snapshots, never across the external call, which
    /// also lets the loading guard release it from a synchronous `Drop`.
    pub controller: Arc<Mutex<AnalysisController>>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn DietAnalyzer>) -> Self {
        Self {
            analyzer,
            controller: Arc::new(Mutex::new(AnalysisController::new())),
        }
    }
}
