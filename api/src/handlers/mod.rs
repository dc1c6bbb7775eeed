//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod predict;

pub use predict::{health, home, predict};
