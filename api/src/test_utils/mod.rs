//! Test utilities
//!
//! Fixtures and estimator test doubles shared by unit and integration tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::test_profile;
pub use mocks::{FailingEstimator, FixedEstimator, RecordingEstimator};
