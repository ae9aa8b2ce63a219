//! Remote scoring service contract.
//!
//! - `GET /` health check
//! - `POST /generate_question` with a `Profile` body, answered by a
//!   `QuestionResult`

mod client;
mod error;
mod types;

pub use client::ScoringClient;
pub use error::ServiceError;
pub use types::{HealthStatus, QuestionResult};
