use tracing::{info, warn};

use crate::plan::plan_model::{PlanResult, StepResult, SyncPlan, SyncStep};
use crate::provider::snapshot::PageSnapshot;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;
use crate::transfer::error::TransferError;
use crate::transfer::sync::{copy, set_value};

/// Executes a SyncPlan step-by-step against a PageSnapshot.
pub struct PlanRunner {
    /// Used by steps that leave `allow_multiple` unset
    pub allow_multiple_default: bool,
}

impl PlanRunner {
    pub fn new(allow_multiple_default: bool) -> Self {
        PlanRunner {
            allow_multiple_default,
        }
    }

    /// Run every step of `plan` in order, stopping at the first failure.
    ///
    /// Steps that already ran stay applied to `snapshot`.
    pub fn run(
        &self,
        plan: &SyncPlan,
        snapshot: &mut PageSnapshot,
        tracer: &TraceLogger,
    ) -> PlanResult {
        let mut step_results = Vec::new();

        for (i, step) in plan.steps.iter().enumerate() {
            let description = step.describe();
            let outcome = self.execute_step(step, snapshot);

            let event =
                TraceEvent::now(&plan.name, i, step.action_name()).with_description(&description);

            match outcome {
                Ok(written) => {
                    info!(plan = %plan.name, step = i, written, "{}", description);
                    tracer.log(&event.with_written(written));
                    step_results.push(StepResult {
                        step_index: i,
                        description,
                        written,
                        passed: true,
                        error: None,
                    });
                }
                Err(e) => {
                    warn!(plan = %plan.name, step = i, error = %e, "{}", description);
                    tracer.log(&event.with_error(&e));
                    step_results.push(StepResult {
                        step_index: i,
                        description,
                        written: 0,
                        passed: false,
                        error: Some(e.to_string()),
                    });
                    return PlanResult {
                        plan_name: plan.name.clone(),
                        passed: false,
                        steps_run: i + 1,
                        step_results,
                        error: Some(format!("Step {} failed: {}", i, e)),
                    };
                }
            }
        }

        PlanResult {
            plan_name: plan.name.clone(),
            passed: true,
            steps_run: plan.steps.len(),
            step_results,
            error: None,
        }
    }

    /// Execute a single step. Returns the number of controls written.
    pub fn execute_step(
        &self,
        step: &SyncStep,
        snapshot: &mut PageSnapshot,
    ) -> Result<usize, TransferError> {
        match step {
            SyncStep::Copy {
                from,
                to,
                field,
                to_field,
                allow_multiple,
            } => {
                let from_scope = snapshot.select(from);
                let to_scope = snapshot.select(to);
                copy(
                    snapshot,
                    &from_scope,
                    &to_scope,
                    field,
                    to_field.as_deref(),
                    allow_multiple.unwrap_or(self.allow_multiple_default),
                )
            }
            SyncStep::SetValue {
                to,
                field,
                value,
                allow_multiple,
            } => {
                let to_scope = snapshot.select(to);
                set_value(
                    snapshot,
                    value,
                    &to_scope,
                    field,
                    allow_multiple.unwrap_or(self.allow_multiple_default),
                )
            }
        }
    }
}

impl Default for PlanRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Load sync plans from a single YAML file or a directory of YAML files.
pub fn load_plans(path: &str) -> Result<Vec<SyncPlan>, Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        let mut plans = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let p = entry.path();
            if p.extension().is_some_and(|e| e == "yaml" || e == "yml") {
                let content = std::fs::read_to_string(&p)?;
                let plan: SyncPlan = serde_yaml::from_str(&content)?;
                plans.push(plan);
            }
        }
        // Sort by name for deterministic order
        plans.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(plans)
    } else {
        let content = std::fs::read_to_string(path)?;
        let plan: SyncPlan = serde_yaml::from_str(&content)?;
        Ok(vec![plan])
    }
}
