//! State for the profile workflow.

use std::collections::HashMap;

use crate::profile::{FormField, FormValues};
use crate::service::HealthStatus;
use crate::ui::mvi::UiState;
use crate::ui::results::ResultPanel;

/// Submission state machine.
///
/// Idle → Loading → {ResultShown, Failed} → Loading (next submit).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A request is in flight.
    Loading { request_id: String },
    ResultShown,
    Failed { error: String },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading { .. } => "Loading",
            Self::ResultShown => "Result",
            Self::Failed { .. } => "Failed",
        }
    }
}

/// Visual state of a single field, set on blur and cleared on change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldMark {
    #[default]
    Untouched,
    Valid,
    Invalid { message: String },
}

/// Everything the workflow owns.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub values: FormValues,
    pub marks: HashMap<FormField, FieldMark>,
    pub submission: SubmissionState,
    /// Loading indicator visibility.
    pub loading: bool,
    pub results: ResultPanel,
    /// Requests sent and not yet answered.
    pub in_flight: usize,
    /// Drop submits while a request is in flight.
    pub reject_while_loading: bool,
    /// Outcome of the startup health check, once known.
    pub health: Option<HealthStatus>,
}

impl WorkflowState {
    pub fn new(reject_while_loading: bool) -> Self {
        Self {
            reject_while_loading,
            ..Self::default()
        }
    }

    pub fn mark(&self, field: FormField) -> &FieldMark {
        static UNTOUCHED: FieldMark = FieldMark::Untouched;
        self.marks.get(&field).unwrap_or(&UNTOUCHED)
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            values: FormValues::default(),
            marks: HashMap::new(),
            submission: SubmissionState::default(),
            loading: false,
            results: ResultPanel::default(),
            in_flight: 0,
            reject_while_loading: true,
            health: None,
        }
    }
}

impl UiState for WorkflowState {}
