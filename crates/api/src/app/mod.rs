//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: backend handle shared by the handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use sapgate_auth::ApiKey;
use sapgate_core::Settings;
use sapgate_infra::{ErpBackend, SimulatedErp};

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around the simulated backend (public entrypoint
/// used by `main.rs`).
pub fn build_app(settings: Arc<Settings>) -> Router {
    let backend: Arc<dyn ErpBackend> = Arc::new(SimulatedErp::new(settings.clone()));
    build_app_with_backend(&settings, backend)
}

/// Build the router around an arbitrary backend.
pub fn build_app_with_backend(settings: &Settings, backend: Arc<dyn ErpBackend>) -> Router {
    let auth_state = middleware::AuthState {
        api_key: ApiKey::new(settings.api_key.clone()),
    };
    let services = Arc::new(services::AppServices::new(backend));

    // Protected routes: the key is only checked once a route and method match,
    // so unknown paths stay 404 and wrong methods stay 405.
    let protected = routes::router()
        .route_layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::api_key_middleware,
        ))
        .layer(Extension(services));

    Router::new()
        .route("/", get(routes::system::hello))
        .merge(protected)
        .fallback(errors::not_found)
        .layer(axum::middleware::map_response(errors::json_envelope))
}
