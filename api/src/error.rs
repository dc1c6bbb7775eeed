//! Unified error types for the salary API
//!
//! This module defines error types for each layer:
//! - `DomainError`: record normalization/validation errors
//! - `EstimatorError`: model artifact and inference errors
//! - `AppError`: application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - record validation
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Field {0} must not be empty")]
    EmptyField(&'static str),

    #[error("Field {field} has unsupported value '{value}' (expected one of {expected})")]
    UnknownCategory {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Estimator errors - artifact loading and inference
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unsupported artifact schema version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    #[error("Input row has no column {0}")]
    MissingColumn(String),

    #[error("Unseen category '{value}' for column {column}")]
    UnknownLevel { column: String, value: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Model not loaded")]
    ModelUnavailable,

    #[error("Prediction error: {0}")]
    Inference(#[from] EstimatorError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error",
                Some(e.to_string()),
            ),
            AppError::ModelUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "Model not loaded", None)
            }
            AppError::Inference(e) => {
                tracing::error!("Prediction error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Prediction error",
                    Some(e.to_string()),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
