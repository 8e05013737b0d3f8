//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: background request worker for the media store admin API

pub mod api;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
