//! Profile workflow feature module.
//!
//! Collects the form, validates it, submits it to the scoring service and
//! shows the result, one request at a time.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form values, field marks, submission state machine
//! - `intent.rs` - User and system events
//! - `effect.rs` - Side effects requested by transitions
//! - `reducer.rs` - State transitions (pure)

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::WorkflowEffect;
pub use intent::WorkflowIntent;
pub use reducer::{
    WorkflowReducer, COPY_ERROR_MESSAGE, COPY_SUCCESS_MESSAGE, GENERATE_ERROR_MESSAGE,
    HEALTH_UNHEALTHY_MESSAGE, HEALTH_UNREACHABLE_MESSAGE,
};
pub use state::{FieldMark, SubmissionState, WorkflowState};
