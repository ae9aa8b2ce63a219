//! Intents for the profile workflow.

use crate::persistence::FormSnapshot;
use crate::profile::FormField;
use crate::service::{HealthStatus, QuestionResult};
use crate::ui::mvi::Intent;

/// Every event the workflow reacts to, from the user or from completed
/// side effects.
#[derive(Debug, Clone)]
pub enum WorkflowIntent {
    /// A field's raw text changed.
    FieldChanged { field: FormField, value: String },

    /// Focus left a field.
    FieldBlurred { field: FormField },

    /// Submit the current form values.
    /// `request_id` tags the outbound request if validation passes.
    FormSubmitted { request_id: String },

    /// Clear the form, hide results and delete the saved snapshot.
    ResetRequested,

    /// Repopulate fields from a saved snapshot (startup only).
    Restore { snapshot: FormSnapshot },

    /// The service answered (or failed) for `request_id`.
    ResponseReceived {
        request_id: String,
        outcome: Result<QuestionResult, String>,
    },

    /// Copy the displayed question to the clipboard.
    CopyRequested,

    /// Clipboard write completed.
    CopyFinished { outcome: Result<(), String> },

    /// Startup health check completed.
    HealthChecked { status: HealthStatus },
}

impl Intent for WorkflowIntent {}
