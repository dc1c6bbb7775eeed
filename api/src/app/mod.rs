//! Application services
//!
//! Orchestration between HTTP handlers and the domain.

pub mod scoring_service;

pub use scoring_service::ScoringService;
