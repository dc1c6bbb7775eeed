//! Prediction handlers
//!
//! The three routes of the scoring service: liveness banner, health check
//! tied to the model load, and the prediction endpoint itself.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::domain::EmployeeProfile;
use crate::error::AppError;
use crate::AppState;

#[derive(Serialize)]
pub struct HomeResponse {
    message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Wire shape of a successful prediction.
#[derive(Serialize)]
pub struct PredictionResponse {
    #[serde(rename = "Estimated_Annual_Salary")]
    pub estimated_annual_salary: f64,
    pub currency: &'static str,
    pub message: &'static str,
}

/// GET /
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Salary Estimator API",
    })
}

/// GET /health
///
/// Healthy only when the model artifact loaded at startup.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, StatusCode> {
    if state.scoring.model_loaded() {
        Ok(Json(HealthResponse { status: "healthy" }))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

/// POST /predict
///
/// Accepts the five-field record, normalizes and validates it, and returns
/// the estimator's annual figure in USD.
pub async fn predict(
    State(state): State<AppState>,
    Json(profile): Json<EmployeeProfile>,
) -> Result<Json<PredictionResponse>, AppError> {
    let annual = state.scoring.predict(profile)?;
    Ok(Json(PredictionResponse {
        estimated_annual_salary: annual,
        currency: "USD",
        message: "Prediction successful",
    }))
}
