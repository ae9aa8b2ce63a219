use crate::config::LoggingConfig;
use crate::persistence::FileSlotStorage;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "resume-bandit.log";

/// Default log location, next to the saved form data.
pub fn default_log_path() -> PathBuf {
    FileSlotStorage::default_dir().join(LOG_FILE_NAME)
}

/// Filter precedence: `RUST_LOG`, then the command-line level, then the
/// configured level.
pub fn build_filter(config: &LoggingConfig, level_override: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level_override.unwrap_or(config.level.as_str());
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Initialize tracing to an append-only log file.
///
/// The terminal belongs to the UI, so nothing is written to stdout or stderr
/// once this succeeds. If the file cannot be opened logging stays off.
pub fn init_tracing(config: &LoggingConfig, level_override: Option<&str>) {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            eprintln!(
                "Warning: Failed to create log directory {}: {}",
                parent.display(),
                err
            );
            return;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to open log file {}: {}",
                path.display(),
                err
            );
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(build_filter(config, level_override))
        .with(file_layer)
        .init();
}
