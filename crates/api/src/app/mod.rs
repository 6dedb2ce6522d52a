//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: per-process services handed to handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use dairysense_store::AnalyticsStore;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: Arc<dyn AnalyticsStore>) -> Router {
    let services = Arc::new(services::AppServices::new(store));
    routes::router().layer(Extension(services))
}
