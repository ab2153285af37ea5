// leclinique - HTTP Service
//
// *La Clinique* (The Clinic) - Axum-based HTTP API for symptom triage

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// API error types
pub mod error;

/// HTTP handlers for REST endpoints
pub mod handlers;

/// Server configuration from environment
pub mod config;

/// API request and response types
pub mod responses;

/// Server instance management
pub mod server;

pub use config::ClinicConfig;
pub use error::{ApiError, ApiResult};
pub use server::ClinicServer;

/// leclinique library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
