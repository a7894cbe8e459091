use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One line of the transfer audit log.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    pub plan: String,
    pub step: usize,
    pub action: String,

    pub description: Option<String>,

    pub outcome: String,
    pub written: usize,
    pub error: Option<String>,
}

impl TraceEvent {
    pub fn now(plan: &str, step: usize, action: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            plan: plan.to_string(),
            step,
            action: action.to_string(),
            description: None,
            outcome: "ok".to_string(),
            written: 0,
            error: None,
        }
    }

    pub fn with_description(mut self, description: impl ToString) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_written(mut self, written: usize) -> Self {
        self.written = written;
        self
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.outcome = "failed".to_string();
        self.error = Some(error.to_string());
        self
    }
}
