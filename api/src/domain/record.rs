//! Employee profile record
//!
//! The five categorical fields that describe an employee. Normalization is an
//! explicit step that runs before validation: every field is trimmed and
//! uppercased, then the strict checks apply (non-empty text, enum membership
//! for ethnicity and gender). Uppercasing twice is a no-op, so a client that
//! already normalized its input round-trips unchanged.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Accepted ethnicity categories, matching the training data.
pub const ETHNICITIES: &[&str] = &["WHITE", "BLACK", "HISPANIC", "OTHER"];

/// Accepted gender categories, matching the training data.
pub const GENDERS: &[&str] = &["MALE", "FEMALE"];

/// A prediction request: five categorical employee attributes.
///
/// Field names mirror the training data columns, so the wire format uses the
/// uppercase keys directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
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

impl EmployeeProfile {
    /// Trim and uppercase every field. Idempotent.
    pub fn normalize(self) -> Self {
        fn clean(s: String) -> String {
            s.trim().to_uppercase()
        }

        Self {
            agency_name: clean(self.agency_name),
            class_title: clean(self.class_title),
            ethnicity: clean(self.ethnicity),
            gender: clean(self.gender),
            status: clean(self.status),
        }
    }

    /// Strict checks over an already-normalized profile.
    ///
    /// Agency, title and status are free text and only need to be non-empty;
    /// ethnicity and gender must be one of the known categories. STATUS stays
    /// free text because the source data carries agency-specific codes beyond
    /// FULL-TIME / PART-TIME.
    pub fn validate(&self) -> Result<(), DomainError> {
        let required: [(&'static str, &str); 5] = [
            ("AGENCY_NAME", &self.agency_name),
            ("CLASS_TITLE", &self.class_title),
            ("ETHNICITY", &self.ethnicity),
            ("GENDER", &self.gender),
            ("STATUS", &self.status),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(DomainError::EmptyField(name));
            }
        }

        if !ETHNICITIES.contains(&self.ethnicity.as_str()) {
            return Err(DomainError::UnknownCategory {
                field: "ETHNICITY",
                value: self.ethnicity.clone(),
                expected: "WHITE, BLACK, HISPANIC, OTHER",
            });
        }
        if !GENDERS.contains(&self.gender.as_str()) {
            return Err(DomainError::UnknownCategory {
                field: "GENDER",
                value: self.gender.clone(),
                expected: "MALE, FEMALE",
            });
        }

        Ok(())
    }

    /// Assemble the single-row tabular structure the estimator consumes.
    pub fn to_row(&self) -> TabularRow {
        TabularRow {
            columns: vec![
                ("AGENCY_NAME".to_string(), self.agency_name.clone()),
                ("CLASS_TITLE".to_string(), self.class_title.clone()),
                ("ETHNICITY".to_string(), self.ethnicity.clone()),
                ("GENDER".to_string(), self.gender.clone()),
                ("STATUS".to_string(), self.status.clone()),
            ],
        }
    }
}

/// One row of named categorical columns, in a fixed order.
///
/// Estimators consume this instead of the raw request so the wire shape and
/// the model input stay decoupled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularRow {
    columns: Vec<(String, String)>,
}

impl TabularRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
