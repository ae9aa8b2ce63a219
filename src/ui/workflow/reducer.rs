//! Reducer for the profile workflow.

use crate::persistence::FormSnapshot;
use crate::profile::{validate_field, FormValues, Profile, ProfileDraft};
use crate::service::HealthStatus;
use crate::ui::mvi::Reducer;
use crate::ui::notification::NotificationKind;
use crate::ui::results::RESULT_SUCCESS_MESSAGE;

use super::effect::WorkflowEffect;
use super::intent::WorkflowIntent;
use super::state::{FieldMark, SubmissionState, WorkflowState};

pub const GENERATE_ERROR_MESSAGE: &str = "Error generating question. Please try again.";
pub const COPY_SUCCESS_MESSAGE: &str = "Question copied to clipboard!";
pub const COPY_ERROR_MESSAGE: &str = "Failed to copy question";
pub const HEALTH_UNHEALTHY_MESSAGE: &str =
    "API server is not responding. Please check your connection.";
pub const HEALTH_UNREACHABLE_MESSAGE: &str =
    "Cannot connect to API server. Please ensure the server is running.";

/// Single dispatch point for the workflow.
///
/// Pure: persistence, HTTP, clipboard and notifications are requested as
/// `WorkflowEffect`s and fed back as intents.
pub struct WorkflowReducer;

impl Reducer for WorkflowReducer {
    type State = WorkflowState;
    type Intent = WorkflowIntent;
    type Effect = WorkflowEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>) {
        let mut effects = Vec::new();

        match intent {
            WorkflowIntent::FieldChanged { field, value } => {
                state.values.set(field, value);
                state.marks.remove(&field);
                effects.push(WorkflowEffect::SaveSnapshot(FormSnapshot::from_values(
                    &state.values,
                )));
            }

            WorkflowIntent::FieldBlurred { field } => {
                let check = validate_field(field, state.values.get(field));
                let mark = if check.valid {
                    FieldMark::Valid
                } else {
                    FieldMark::Invalid {
                        message: check.message,
                    }
                };
                state.marks.insert(field, mark);
            }

            WorkflowIntent::FormSubmitted { request_id } => {
                if state.reject_while_loading && state.submission.is_loading() {
                    tracing::debug!(request_id = %request_id, "Submit ignored while loading");
                    return (state, effects);
                }

                // Loading is shown before validation runs.
                state.loading = true;
                state.results.hide();
                effects.push(WorkflowEffect::ShowLoading);
                effects.push(WorkflowEffect::ScrollToLoading);

                match Profile::try_from(ProfileDraft::from_form(&state.values)) {
                    Ok(profile) => {
                        state.submission = SubmissionState::Loading {
                            request_id: request_id.clone(),
                        };
                        state.in_flight += 1;
                        effects.push(WorkflowEffect::SendProfile {
                            request_id,
                            profile,
                        });
                    }
                    Err(report) => {
                        state.loading = false;
                        if state.in_flight == 0 {
                            state.submission = SubmissionState::Idle;
                        }
                        effects.push(WorkflowEffect::HideLoading);
                        effects.push(WorkflowEffect::notify(
                            report.summary(),
                            NotificationKind::Error,
                        ));
                    }
                }
            }

            WorkflowIntent::ResetRequested => {
                state.values = FormValues::default();
                state.marks.clear();
                state.results.hide();
                if !state.submission.is_loading() {
                    state.submission = SubmissionState::Idle;
                }
                effects.push(WorkflowEffect::ClearSnapshot);
            }

            WorkflowIntent::Restore { snapshot } => {
                snapshot.restore_into(&mut state.values);
            }

            WorkflowIntent::ResponseReceived {
                request_id: _,
                outcome,
            } => {
                state.in_flight = state.in_flight.saturating_sub(1);
                match outcome {
                    Ok(result) => {
                        state.results.render(&result);
                        state.submission = SubmissionState::ResultShown;
                        effects.push(WorkflowEffect::ScrollToResults);
                        effects.push(WorkflowEffect::notify(
                            RESULT_SUCCESS_MESSAGE,
                            NotificationKind::Success,
                        ));
                    }
                    Err(error) => {
                        state.submission = SubmissionState::Failed { error };
                    }
                }

                state.loading = false;
                effects.push(WorkflowEffect::HideLoading);
                if matches!(state.submission, SubmissionState::Failed { .. }) {
                    effects.push(WorkflowEffect::notify(
                        GENERATE_ERROR_MESSAGE,
                        NotificationKind::Error,
                    ));
                }
            }

            WorkflowIntent::CopyRequested => {
                effects.push(WorkflowEffect::CopyText(state.results.question.clone()));
            }

            WorkflowIntent::CopyFinished { outcome } => {
                let effect = match outcome {
                    Ok(()) => WorkflowEffect::notify(COPY_SUCCESS_MESSAGE, NotificationKind::Success),
                    Err(_) => WorkflowEffect::notify(COPY_ERROR_MESSAGE, NotificationKind::Error),
                };
                effects.push(effect);
            }

            WorkflowIntent::HealthChecked { status } => {
                state.health = Some(status);
                match status {
                    HealthStatus::Healthy => {}
                    HealthStatus::Unhealthy { .. } => effects.push(WorkflowEffect::notify(
                        HEALTH_UNHEALTHY_MESSAGE,
                        NotificationKind::Error,
                    )),
                    HealthStatus::Unreachable => effects.push(WorkflowEffect::notify(
                        HEALTH_UNREACHABLE_MESSAGE,
                        NotificationKind::Error,
                    )),
                }
            }
        }

        (state, effects)
    }
}
