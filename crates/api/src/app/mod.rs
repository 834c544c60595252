//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the assistant and its catalog source
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use storefront_catalog::CatalogError;

use crate::config::Config;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: &Config) -> Result<Router, CatalogError> {
    Ok(build_app_with(services::build_services(config)?).await)
}

/// Build the router around pre-built services, loading the catalog once before
/// the first request is served.
pub async fn build_app_with(services: AppServices) -> Router {
    let outcome = services.assistant().refresh_catalog().await;
    tracing::info!(?outcome, "startup catalog refresh");

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(Arc::new(services))),
        )
}
