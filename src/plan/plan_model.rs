use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered batch of transfers applied to one page snapshot.
/// Usually deserialized from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SyncPlan {
    /// Human-readable name for this plan
    pub name: String,

    /// Steps, executed in order
    pub steps: Vec<SyncStep>,
}

/// A single step in a sync plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SyncStep {
    /// Copy a control's value from one container to another
    Copy {
        /// Source container selector
        from: String,
        /// Destination container selector
        to: String,
        /// Source control name
        field: String,
        /// Destination control name (defaults to `field`)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_field: Option<String>,
        /// Override the configured multi-destination default
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allow_multiple: Option<bool>,
    },

    /// Write a literal value
    SetValue {
        to: String,
        field: String,
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allow_multiple: Option<bool>,
    },
}

impl SyncStep {
    pub fn action_name(&self) -> &'static str {
        match self {
            SyncStep::Copy { .. } => "copy",
            SyncStep::SetValue { .. } => "set_value",
        }
    }

    /// One-line description used in reports and the trace log.
    pub fn describe(&self) -> String {
        match self {
            SyncStep::Copy {
                from,
                to,
                field,
                to_field,
                ..
            } => format!(
                "copy {}[{}] -> {}[{}]",
                from,
                field,
                to,
                to_field.as_deref().unwrap_or(field)
            ),
            SyncStep::SetValue { to, field, value, .. } => {
                format!("set {}[{}] = {}", to, field, value)
            }
        }
    }
}

/// Outcome of one executed step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepResult {
    /// 0-based step index
    pub step_index: usize,

    pub description: String,

    /// Number of controls written
    pub written: usize,

    pub passed: bool,

    pub error: Option<String>,
}

/// Result of running a complete plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanResult {
    pub plan_name: String,

    /// Whether every step succeeded
    pub passed: bool,

    /// Number of steps that were executed (including a failing one)
    pub steps_run: usize,

    pub step_results: Vec<StepResult>,

    /// Diagnostic of the step that stopped the run
    pub error: Option<String>,
}

impl PlanResult {
    pub fn controls_written(&self) -> usize {
        self.step_results.iter().map(|r| r.written).sum()
    }
}
