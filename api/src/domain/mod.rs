//! Domain layer
//!
//! Pure types and ports: the employee profile crossing the wire, the
//! single-row tabular structure fed to the model, and the estimator port.

pub mod ports;
pub mod record;

pub use ports::Estimator;
pub use record::{EmployeeProfile, TabularRow};
