//! Estimator port trait
//!
//! Defines the interface between the scoring service and whatever holds the
//! trained model. Inference is synchronous and side-effect-free, so a loaded
//! estimator can be shared read-only across concurrent requests.

use crate::domain::record::TabularRow;
use crate::error::EstimatorError;

/// Port trait for the pre-trained regression model.
pub trait Estimator: Send + Sync {
    /// Predict an annual salary in USD for a single row.
    fn estimate(&self, row: &TabularRow) -> Result<f64, EstimatorError>;
}
