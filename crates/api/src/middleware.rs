use axum::{extract::State, middleware::Next, response::Response};

use sapgate_auth::{ApiKey, API_KEY_HEADER};

use crate::app::errors;

#[derive(Clone)]
pub struct AuthState {
    pub api_key: ApiKey,
}

/// Reject requests whose `X-API-KEY` header does not match the shared secret.
///
/// Runs before any handler logic; the backend is never touched on failure.
pub async fn api_key_middleware(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(reason) = sapgate_auth::check(presented, &state.api_key) {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            %reason,
            "unauthorized API access attempt"
        );
        return errors::unauthorized();
    }

    next.run(req).await
}
