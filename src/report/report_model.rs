use serde::{Deserialize, Serialize};

use crate::plan::plan_model::PlanResult;

// ============================================================================
// Run report: aggregates the PlanResults of one CLI run
// ============================================================================

/// Aggregated report for a batch of plan runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_name: String,

    pub total: usize,
    pub passed: usize,
    pub failed: usize,

    /// Total execution duration in milliseconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,

    pub plan_results: Vec<PlanResult>,
}

impl RunReport {
    /// Build a report from plan results, computing the pass/fail counts.
    pub fn from_results(run_name: &str, results: Vec<PlanResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            run_name: run_name.to_string(),
            total,
            passed,
            failed,
            duration_ms: None,
            plan_results: results,
        }
    }

    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
