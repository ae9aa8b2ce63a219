use serde::{Deserialize, Serialize};

/// Generated interview question and the reasoning behind its selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub name: String,
    pub predicted_type: String,
    pub bandit_selected_type: String,
    /// Displayed exactly as received.
    pub reward: serde_json::Number,
    pub question: String,
    #[serde(default)]
    pub rationale: Vec<String>,
}

/// Result of the startup health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    /// Service answered with a non-2xx status.
    Unhealthy { status: u16 },
    /// Service could not be reached.
    Unreachable,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}
