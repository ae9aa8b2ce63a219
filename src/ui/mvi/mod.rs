//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects) ──→ View
//!    ↑                          │
//!    └──── effect outcomes ─────┘
//! ```
//!
//! - **State**: Owned representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function producing the next state and the side
//!   effects the caller must perform

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
