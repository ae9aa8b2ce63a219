pub mod app;
pub mod effects;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notification;
pub mod render;
pub mod results;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod workflow;

pub use runtime::{run, RunOptions};
