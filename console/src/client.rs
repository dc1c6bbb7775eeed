//! HTTP client for the scoring service
//!
//! One blocking-from-the-user's-view call per form submission, with a hard
//! 15 second ceiling. Nothing is retried automatically; every failure is
//! terminal for the current submission and the user resubmits the form.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Fixed local address of the scoring service.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Salary keys tried in order before the positive-numeric fallback. Older
/// service builds used different names for the result field.
const SALARY_KEYS: &[&str] = &[
    "Estimated_Annual_Salary",
    "estimated_salary",
    "Estimated_salary",
    "salary",
    "prediction",
    "result",
    "value",
];

/// The five-field record sent to POST /predict.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest {
    #[serde(rename = "AGENCY_NAME")]
    pub agency_name: String,
    #[serde(rename = "CLASS_TITLE")]
    pub class_title: String,
    #[serde(rename = "ETHNICITY")]
    pub ethnicity: String,
    #[serde(rename = "GENDER")]
    pub gender: String,
    #[serde(rename = "STATUS")]
    pub status: String,
}

/// Transport and response-shape failures, one variant per user-facing branch.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("the scoring service did not respond within 15 seconds")]
    Timeout,

    #[error("cannot reach the scoring service")]
    Connection,

    #[error("the scoring service has no model loaded")]
    ModelUnavailable,

    #[error("scoring service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("no salary value found in the service response")]
    MissingEstimate,

    #[error("request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_connect() {
            ClientError::Connection
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

/// Result of the startup health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    /// 200 from /health: the model is loaded.
    Healthy,
    /// /health answered but not with 200: service up, model missing.
    Degraded,
    /// /health unreachable.
    Offline,
}

/// HTTP client for communicating with the scoring service
#[derive(Clone)]
pub struct ScoringClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScoringClient {
    /// Create a client from `SALARY_API_URL`, defaulting to the fixed local
    /// address the service binds to.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("SALARY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe GET /health with a short timeout.
    pub async fn health(&self) -> ServiceStatus {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(response) if response.status() == StatusCode::OK => ServiceStatus::Healthy,
            Ok(_) => ServiceStatus::Degraded,
            Err(_) => ServiceStatus::Offline,
        }
    }

    /// Submit one prediction request and extract the annual estimate.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<f64, ClientError> {
        let url = format!("{}/predict", self.base_url);
        tracing::debug!(%url, "Submitting prediction request");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(ClientError::ModelUnavailable);
        }
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = serde_json::from_str(&body).map_err(|_| ClientError::MissingEstimate)?;
        extract_estimate(&json).ok_or(ClientError::MissingEstimate)
    }
}

/// Locate the salary figure in a success response.
///
/// Tries the known key names first, then falls back to the first positive
/// numeric value anywhere in the top-level object.
fn extract_estimate(response: &Value) -> Option<f64> {
    for key in SALARY_KEYS {
        if let Some(value) = response.get(key).and_then(Value::as_f64) {
            return Some(value);
        }
    }

    response
        .as_object()?
        .values()
        .filter_map(Value::as_f64)
        .find(|&v| v > 0.0)
}
