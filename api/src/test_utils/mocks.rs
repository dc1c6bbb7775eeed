//! Estimator test doubles

use std::sync::Mutex;

use crate::domain::record::TabularRow;
use crate::domain::Estimator;
use crate::error::EstimatorError;

/// Always returns the same estimate.
pub struct FixedEstimator(pub f64);

impl Estimator for FixedEstimator {
    fn estimate(&self, _row: &TabularRow) -> Result<f64, EstimatorError> {
        Ok(self.0)
    }
}

/// Always fails the way a real model does on an unseen category.
pub struct FailingEstimator;

impl Estimator for FailingEstimator {
    fn estimate(&self, _row: &TabularRow) -> Result<f64, EstimatorError> {
        Err(EstimatorError::UnknownLevel {
            column: "CLASS_TITLE".to_string(),
            value: "UNSEEN TITLE".to_string(),
        })
    }
}

/// Records the row it was called with, for asserting on normalization.
pub struct RecordingEstimator {
    value: f64,
    last: Mutex<Option<TabularRow>>,
}

impl RecordingEstimator {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            last: Mutex::new(None),
        }
    }

    pub fn last_row(&self) -> Option<TabularRow> {
        self.last.lock().unwrap().clone()
    }
}

impl Estimator for RecordingEstimator {
    fn estimate(&self, row: &TabularRow) -> Result<f64, EstimatorError> {
        *self.last.lock().unwrap() = Some(row.clone());
        Ok(self.value)
    }
}
