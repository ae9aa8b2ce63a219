mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, LoggingConfig, NotificationConfig, ServiceConfig, StorageConfig, SubmissionConfig,
    UiConfig,
};
