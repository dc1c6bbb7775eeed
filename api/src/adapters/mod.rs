//! Adapters
//!
//! Concrete implementations of the domain ports.

pub mod artifact;

pub use artifact::ArtifactEstimator;
