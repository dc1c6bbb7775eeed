//! Scoring service
//!
//! Owns the immutable handle to the loaded estimator and runs the request
//! pipeline: normalize, validate, assemble the row, infer. The service is
//! constructed once at startup; a missing estimator means the artifact failed
//! to load and every prediction fails fast until the process is restarted.

use std::sync::Arc;

use crate::domain::{EmployeeProfile, Estimator};
use crate::error::AppError;

pub struct ScoringService {
    estimator: Option<Arc<dyn Estimator>>,
}

impl ScoringService {
    pub fn new(estimator: Option<Arc<dyn Estimator>>) -> Self {
        Self { estimator }
    }

    /// Whether the model artifact loaded at startup.
    pub fn model_loaded(&self) -> bool {
        self.estimator.is_some()
    }

    /// Run one prediction.
    ///
    /// Validation runs before the model check so a malformed record is
    /// reported as such even while the service is degraded.
    pub fn predict(&self, profile: EmployeeProfile) -> Result<f64, AppError> {
        let profile = profile.normalize();
        profile.validate()?;

        let estimator = self.estimator.as_ref().ok_or(AppError::ModelUnavailable)?;

        let row = profile.to_row();
        let annual = estimator.estimate(&row)?;
        tracing::info!(
            agency = %profile.agency_name,
            title = %profile.class_title,
            estimate = annual,
            "Prediction successful"
        );
        Ok(annual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_profile, FailingEstimator, FixedEstimator, RecordingEstimator};

    #[test]
    fn predicts_with_loaded_model() {
        let service = ScoringService::new(Some(Arc::new(FixedEstimator(50000.0))));
        let annual = service.predict(test_profile()).unwrap();
        assert!((annual - 50000.0).abs() < 1e-9);
    }

    #[test]
    fn missing_model_fails_fast() {
        let service = ScoringService::new(None);
        assert!(!service.model_loaded());
        let err = service.predict(test_profile()).unwrap_err();
        assert!(matches!(err, AppError::ModelUnavailable));
    }

    #[test]
    fn validation_error_wins_over_missing_model() {
        let service = ScoringService::new(None);
        let mut profile = test_profile();
        profile.class_title = String::new();
        let err = service.predict(profile).unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[test]
    fn estimator_sees_normalized_row() {
        let recorder = Arc::new(RecordingEstimator::new(42000.0));
        let service = ScoringService::new(Some(recorder.clone()));

        let mut profile = test_profile();
        profile.gender = " female ".to_string();
        service.predict(profile).unwrap();

        let row = recorder.last_row().expect("estimator was called");
        assert_eq!(row.get("GENDER"), Some("FEMALE"));
    }

    #[test]
    fn inference_failure_is_reported() {
        let service = ScoringService::new(Some(Arc::new(FailingEstimator)));
        let err = service.predict(test_profile()).unwrap_err();
        assert!(matches!(err, AppError::Inference(_)));
    }
}
