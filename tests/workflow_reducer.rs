//! Workflow scenarios driven through the reducer alone.

mod common;

use common::{alice_form, alice_profile, sample_result, state_with};
use resume_bandit::profile::{FormField, SKILLS_REQUIRED};
use resume_bandit::service::HealthStatus;
use resume_bandit::ui::mvi::Reducer;
use resume_bandit::ui::notification::NotificationKind;
use resume_bandit::ui::workflow::{
    SubmissionState, WorkflowEffect, WorkflowIntent, WorkflowReducer, WorkflowState,
    GENERATE_ERROR_MESSAGE, HEALTH_UNREACHABLE_MESSAGE,
};

fn submit(state: WorkflowState, request_id: &str) -> (WorkflowState, Vec<WorkflowEffect>) {
    WorkflowReducer::reduce(
        state,
        WorkflowIntent::FormSubmitted {
            request_id: request_id.to_string(),
        },
    )
}

fn respond_ok(state: WorkflowState, request_id: &str) -> (WorkflowState, Vec<WorkflowEffect>) {
    WorkflowReducer::reduce(
        state,
        WorkflowIntent::ResponseReceived {
            request_id: request_id.to_string(),
            outcome: Ok(sample_result()),
        },
    )
}

fn respond_err(state: WorkflowState, request_id: &str) -> (WorkflowState, Vec<WorkflowEffect>) {
    WorkflowReducer::reduce(
        state,
        WorkflowIntent::ResponseReceived {
            request_id: request_id.to_string(),
            outcome: Err("HTTP error! status: 500".to_string()),
        },
    )
}

#[test]
fn valid_submission_sends_coerced_profile() {
    let (state, effects) = submit(state_with(alice_form()), "req-1");

    assert_eq!(
        effects,
        vec![
            WorkflowEffect::ShowLoading,
            WorkflowEffect::ScrollToLoading,
            WorkflowEffect::SendProfile {
                request_id: "req-1".into(),
                profile: alice_profile(),
            },
        ]
    );
    assert!(state.loading);
    assert_eq!(
        state.submission,
        SubmissionState::Loading {
            request_id: "req-1".into()
        }
    );
    assert_eq!(state.in_flight, 1);
}

#[test]
fn blank_skills_block_submission() {
    let form = alice_form().with(FormField::Skills, " , ,");
    let (state, effects) = submit(state_with(form), "req-1");

    assert!(!effects
        .iter()
        .any(|e| matches!(e, WorkflowEffect::SendProfile { .. })));
    assert_eq!(
        effects.last(),
        Some(&WorkflowEffect::notify(SKILLS_REQUIRED, NotificationKind::Error))
    );
    assert!(!state.loading);
    assert_eq!(state.submission, SubmissionState::Idle);
}

#[test]
fn loading_is_shown_before_validation_result() {
    let (_, effects) = submit(WorkflowState::default(), "req-1");

    assert_eq!(effects[0], WorkflowEffect::ShowLoading);
    assert_eq!(effects[1], WorkflowEffect::ScrollToLoading);
    assert_eq!(effects[2], WorkflowEffect::HideLoading);
    match &effects[3] {
        WorkflowEffect::Notify { message, kind } => {
            assert_eq!(*kind, NotificationKind::Error);
            assert!(message.starts_with("Name is required, Education level is required"));
        }
        other => panic!("expected notification, got {:?}", other),
    }
    assert_eq!(effects.len(), 4);
}

#[test]
fn server_error_fails_and_hides_everything() {
    let (state, _) = submit(state_with(alice_form()), "req-1");
    let (state, effects) = respond_err(state, "req-1");

    assert!(matches!(state.submission, SubmissionState::Failed { .. }));
    assert!(!state.loading);
    assert!(!state.results.visible);
    assert_eq!(state.in_flight, 0);
    assert_eq!(
        effects,
        vec![
            WorkflowEffect::HideLoading,
            WorkflowEffect::notify(GENERATE_ERROR_MESSAGE, NotificationKind::Error),
        ]
    );
}

#[test]
fn success_renders_results_and_scrolls_to_them() {
    let (state, _) = submit(state_with(alice_form()), "req-1");
    let (state, effects) = respond_ok(state, "req-1");

    assert_eq!(state.submission, SubmissionState::ResultShown);
    assert!(state.results.visible);
    assert_eq!(state.results.candidate_name, "Alice");
    assert_eq!(state.results.reward, "0.75");
    assert_eq!(state.results.rationale.len(), 2);
    assert_eq!(effects[0], WorkflowEffect::ScrollToResults);
    assert!(effects.contains(&WorkflowEffect::HideLoading));
}

#[test]
fn resubmitting_hides_previous_results() {
    let (state, _) = submit(state_with(alice_form()), "req-1");
    let (state, _) = respond_ok(state, "req-1");
    let (state, _) = submit(state, "req-2");

    assert!(!state.results.visible);
    assert!(state.loading);
}

#[test]
fn rendering_twice_keeps_one_rationale_list() {
    let (state, _) = submit(state_with(alice_form()), "req-1");
    let (state, _) = respond_ok(state, "req-1");
    let (state, _) = submit(state, "req-2");
    let (state, _) = respond_ok(state, "req-2");

    assert_eq!(state.results.rationale.len(), 2);
}

#[test]
fn guard_drops_submit_while_loading() {
    let (state, _) = submit(state_with(alice_form()), "req-1");
    let (state, effects) = submit(state, "req-2");

    assert!(effects.is_empty());
    assert_eq!(state.in_flight, 1);
    assert_eq!(
        state.submission,
        SubmissionState::Loading {
            request_id: "req-1".into()
        }
    );
}

#[test]
fn without_guard_each_submit_sends() {
    let state = WorkflowState {
        reject_while_loading: false,
        ..state_with(alice_form())
    };
    let (state, first) = submit(state, "req-1");
    let (state, second) = submit(state, "req-2");

    let sends = first
        .iter()
        .chain(second.iter())
        .filter(|e| matches!(e, WorkflowEffect::SendProfile { .. }))
        .count();
    assert_eq!(sends, 2);
    assert_eq!(state.in_flight, 2);

    // The first answer to arrive wins the panel; the second replaces it.
    let (state, _) = respond_ok(state, "req-1");
    assert_eq!(state.in_flight, 1);
    let (state, _) = respond_err(state, "req-2");
    assert_eq!(state.in_flight, 0);
    assert!(matches!(state.submission, SubmissionState::Failed { .. }));
}

#[test]
fn reset_clears_form_marks_and_results() {
    let (state, _) = submit(state_with(alice_form()), "req-1");
    let (state, _) = respond_ok(state, "req-1");
    let (state, _) = WorkflowReducer::reduce(
        state,
        WorkflowIntent::FieldBlurred {
            field: FormField::Domain,
        },
    );
    let (state, effects) = WorkflowReducer::reduce(state, WorkflowIntent::ResetRequested);

    assert_eq!(effects, vec![WorkflowEffect::ClearSnapshot]);
    assert!(FormField::all()
        .iter()
        .all(|field| state.values.get(*field).is_empty()));
    assert!(state.marks.is_empty());
    assert!(!state.results.visible);
    assert_eq!(state.submission, SubmissionState::Idle);
}

#[test]
fn reset_while_loading_keeps_request_alive() {
    let (state, _) = submit(state_with(alice_form()), "req-1");
    let (state, _) = WorkflowReducer::reduce(state, WorkflowIntent::ResetRequested);
    assert!(state.submission.is_loading());

    let (state, _) = respond_ok(state, "req-1");
    assert!(state.results.visible);
}

#[test]
fn copy_sends_current_question() {
    let (state, _) = submit(state_with(alice_form()), "req-1");
    let (state, _) = respond_ok(state, "req-1");
    let (_, effects) = WorkflowReducer::reduce(state, WorkflowIntent::CopyRequested);

    assert_eq!(
        effects,
        vec![WorkflowEffect::CopyText(
            "How would you design a rate limiter for a public API?".into()
        )]
    );
}

#[test]
fn unreachable_service_is_reported() {
    let (state, effects) = WorkflowReducer::reduce(
        WorkflowState::default(),
        WorkflowIntent::HealthChecked {
            status: HealthStatus::Unreachable,
        },
    );

    assert_eq!(state.health, Some(HealthStatus::Unreachable));
    assert_eq!(
        effects,
        vec![WorkflowEffect::notify(
            HEALTH_UNREACHABLE_MESSAGE,
            NotificationKind::Error
        )]
    );
}
