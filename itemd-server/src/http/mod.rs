//! HTTP endpoint layer
//!
//! Axum router, typed extractors, and error-to-status mapping.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
