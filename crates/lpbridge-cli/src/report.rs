//! JSON rendering of a solve result.

use lpbridge_solver::SolutionView;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SolutionReport {
    pub provider: &'static str,
    pub highs_version: Option<String>,
    pub status: &'static str,
    pub objective_value: f64,
    pub values: Vec<f64>,
    pub runtime_ms: f64,
}

impl SolutionReport {
    pub fn new<S: SolutionView>(solution: &S, highs_version: Option<String>) -> Self {
        SolutionReport {
            provider: solution.provider(),
            highs_version,
            status: solution.status().as_str(),
            objective_value: solution.objective_value(),
            values: solution.values().to_vec(),
            runtime_ms: solution.runtime().as_secs_f64() * 1000.0,
        }
    }
}
