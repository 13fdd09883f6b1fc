//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the listing service (validation, cosmetic delay, generation)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses
//! - `progress.rs`: the progress schedule a form shows while waiting

use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod progress;
pub mod routes;
pub mod services;

/// Runtime knobs for the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppSettings {
    pub generation_delay: Duration,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(settings: AppSettings) -> Router {
    let services = Arc::new(services::ListingService::new(settings.generation_delay));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)),
        )
}
