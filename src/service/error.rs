use thiserror::Error;

/// Errors talking to the scoring service. None of them are retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request never produced an HTTP response.
    #[error("Connection to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-2xx status. The body is kept for logs only.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// A 2xx body that is not a valid question result.
    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

impl ServiceError {
    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ServiceError::Transport { .. } => "transport_error",
            ServiceError::Status { .. } => "status_error",
            ServiceError::Decode(_) => "decode_error",
            ServiceError::Client(_) => "client_error",
        }
    }
}
