//! Test fixtures

use crate::domain::EmployeeProfile;

/// A valid, already-uppercase profile matching the training data example.
pub fn test_profile() -> EmployeeProfile {
    EmployeeProfile {
        agency_name: "TEXAS DEPARTMENT OF CRIMINAL JUSTICE".to_string(),
        class_title: "CORREC OFFICER IV".to_string(),
        ethnicity: "HISPANIC".to_string(),
        gender: "FEMALE".to_string(),
        status: "FULL-TIME".to_string(),
    }
}
