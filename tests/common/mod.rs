//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use resume_bandit::config::{Config, ServiceConfig};
use resume_bandit::profile::{FormField, FormValues, Profile};
use resume_bandit::service::QuestionResult;
use resume_bandit::ui::app::App;
use resume_bandit::ui::workflow::WorkflowState;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Service config pointed at a mock server.
pub fn service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: Some(2),
        request_timeout_seconds: Some(5),
    }
}

// -- Form helpers -------------------------------------------------------------

/// The worked example profile: every required field filled in.
pub fn alice_form() -> FormValues {
    FormValues::new()
        .with(FormField::Name, "Alice")
        .with(FormField::Education, "Master's")
        .with(FormField::Experience, "5")
        .with(FormField::ProjectCount, "12")
        .with(FormField::Domain, "Backend")
        .with(FormField::Skills, "Rust, Go, , SQL ")
        .with(FormField::Certifications, "")
        .with(FormField::SkillLevel, "Advanced")
        .with(FormField::Fatigue, "Low")
}

pub fn alice_profile() -> Profile {
    Profile {
        name: "Alice".into(),
        education: "Master's".into(),
        years_of_experience: 5,
        project_count: 12,
        domain: "Backend".into(),
        skills: vec!["Rust".into(), "Go".into(), "SQL".into()],
        certifications: "None".into(),
        skill_level: "Advanced".into(),
        fatigue: "Low".into(),
    }
}

pub fn state_with(values: FormValues) -> WorkflowState {
    WorkflowState {
        values,
        ..WorkflowState::default()
    }
}

pub fn sample_result() -> QuestionResult {
    serde_json::from_str(SAMPLE_RESULT_JSON).expect("sample result parses")
}

pub const SAMPLE_RESULT_JSON: &str = r#"{
    "name": "Alice",
    "predicted_type": "technical",
    "bandit_selected_type": "system design",
    "reward": 0.75,
    "question": "How would you design a rate limiter for a public API?",
    "rationale": ["Strong backend background", "Low fatigue allows a deep question"]
}"#;

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(&Config::default())
}

/// Poll until `check` holds or the timeout passes.
pub fn wait_until(timeout: Duration, mut check: impl FnMut() -> bool) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if check() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    check()
}
