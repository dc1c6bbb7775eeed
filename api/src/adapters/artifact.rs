//! Artifact-backed estimator
//!
//! Loads an externally trained target-encoded regression that was exported as
//! JSON: an intercept plus, for each column, a map from category level to its
//! fitted coefficient. A prediction is the intercept plus the coefficient of
//! each column's level. The artifact is produced by the training pipeline and
//! treated as opaque here beyond the schema version guard.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::domain::record::TabularRow;
use crate::domain::Estimator;
use crate::error::EstimatorError;

/// Artifact schema revision this build understands.
const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct Artifact {
    schema_version: u32,
    intercept: f64,
    columns: Vec<ArtifactColumn>,
}

#[derive(Debug, Deserialize)]
struct ArtifactColumn {
    name: String,
    levels: HashMap<String, f64>,
}

/// A loaded regression artifact. Immutable after construction, so it can be
/// shared across request handlers without locking.
#[derive(Debug)]
pub struct ArtifactEstimator {
    intercept: f64,
    columns: Vec<ArtifactColumn>,
}

impl ArtifactEstimator {
    /// Load and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EstimatorError> {
        let file = File::open(path.as_ref())?;
        let artifact = serde_json::from_reader(BufReader::new(file))?;
        Self::from_artifact(artifact)
    }

    /// Parse an artifact from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EstimatorError> {
        let artifact = serde_json::from_slice(bytes)?;
        Self::from_artifact(artifact)
    }

    fn from_artifact(artifact: Artifact) -> Result<Self, EstimatorError> {
        if artifact.schema_version != SCHEMA_VERSION {
            return Err(EstimatorError::SchemaVersion {
                found: artifact.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(Self {
            intercept: artifact.intercept,
            columns: artifact.columns,
        })
    }
}

impl Estimator for ArtifactEstimator {
    fn estimate(&self, row: &TabularRow) -> Result<f64, EstimatorError> {
        let mut total = self.intercept;
        for column in &self.columns {
            let value = row
                .get(&column.name)
                .ok_or_else(|| EstimatorError::MissingColumn(column.name.clone()))?;
            let coefficient =
                column
                    .levels
                    .get(value)
                    .ok_or_else(|| EstimatorError::UnknownLevel {
                        column: column.name.clone(),
                        value: value.to_string(),
                    })?;
            total += coefficient;
        }
        Ok(total)
    }
}
