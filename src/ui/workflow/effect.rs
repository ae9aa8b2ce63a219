//! Side effects requested by workflow transitions.

use crate::persistence::FormSnapshot;
use crate::profile::Profile;
use crate::ui::notification::NotificationKind;

/// Work the caller performs after a transition, in the order given.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEffect {
    /// Loading indicator became visible; results were hidden.
    ShowLoading,
    /// Loading indicator became hidden.
    HideLoading,
    ScrollToLoading,
    ScrollToResults,
    SaveSnapshot(FormSnapshot),
    ClearSnapshot,
    /// Issue one `POST /generate_question`.
    SendProfile { request_id: String, profile: Profile },
    CopyText(String),
    Notify {
        message: String,
        kind: NotificationKind,
    },
}

impl WorkflowEffect {
    pub fn notify(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self::Notify {
            message: message.into(),
            kind,
        }
    }
}
