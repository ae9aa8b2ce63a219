//! Resume Bandit: a terminal client that collects a candidate profile,
//! sends it to the question-generation service and shows the interview
//! question it picks.

pub mod clipboard;
pub mod config;
pub mod logging;
pub mod persistence;
pub mod profile;
pub mod service;
pub mod ui;
