//! HTTP client for the question-generation service.

use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::ServiceConfig;
use crate::profile::Profile;

use super::error::ServiceError;
use super::types::{HealthStatus, QuestionResult};

/// Client for the scoring service.
///
/// One request per call: no retries, no timeout unless configured.
#[derive(Debug, Clone)]
pub struct ScoringClient {
    client: Client,
    base_url: String,
}

impl ScoringClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Health check: `GET /`. Any 2xx is healthy.
    pub async fn health(&self) -> HealthStatus {
        let url = format!("{}/", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(url = %url, "API is healthy");
                HealthStatus::Healthy
            }
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::warn!(url = %url, status, "API health check returned an error status");
                HealthStatus::Unhealthy { status }
            }
            Err(err) => {
                tracing::error!(url = %url, error = %err, "API health check failed");
                HealthStatus::Unreachable
            }
        }
    }

    /// Submit a validated profile: `POST /generate_question`.
    pub async fn generate_question(
        &self,
        request_id: &str,
        profile: &Profile,
    ) -> Result<QuestionResult, ServiceError> {
        let url = format!("{}/generate_question", self.base_url);

        tracing::debug!(
            request_id,
            url = %url,
            skills = profile.skills.len(),
            "Sending generate_question request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(profile)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ServiceError::Transport {
                url: url.clone(),
                source,
            })?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::error!(
                request_id,
                status = status.as_u16(),
                latency_ms,
                body = %body,
                "generate_question failed"
            );
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: QuestionResult =
            serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))?;

        tracing::info!(
            request_id,
            status = status.as_u16(),
            latency_ms,
            predicted_type = %result.predicted_type,
            bandit_selected_type = %result.bandit_selected_type,
            "Question generated"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ServiceConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ServiceConfig::default()
        };
        let client = ScoringClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
