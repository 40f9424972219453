//! Consistent JSON error responses.
//!
//! Three layers produce errors:
//! - handlers return [`ApiError`], mapped per route to a status code,
//! - the API-key middleware answers with [`unauthorized`],
//! - framework-level failures (unknown route, wrong method, extractor
//!   rejections, bare 500s) are rewritten by [`json_envelope`].

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use sapgate_core::ErpError;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid or missing API Key";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";
pub const NOT_FOUND_DETAIL: &str = "The requested URL was not found on the server.";
pub const METHOD_NOT_ALLOWED_DETAIL: &str = "The method is not allowed for the requested URL.";
pub const INTERNAL_ERROR_DETAIL: &str = "An unexpected error occurred on the server.";

/// Upper bound on a framework error body we are willing to buffer.
const MAX_REWRITTEN_BODY: usize = 64 * 1024;

/// Error returned by route handlers.
///
/// The same backend failure kind maps to different statuses depending on
/// the route (an operation failure is a 500 on material reads but a 400 on
/// sales orders).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("material request failed: {0}")]
    Material(#[source] ErpError),

    #[error("sales order request failed: {0}")]
    SalesOrder(#[source] ErpError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Material(ErpError::NotFound(msg)) => {
                tracing::warn!("material not found: {msg}");
                error_only(StatusCode::NOT_FOUND, msg)
            }
            ApiError::Material(ErpError::Connection(msg)) => {
                tracing::error!("SAP connection error during material read: {msg}");
                error_only(StatusCode::SERVICE_UNAVAILABLE, format!("SAP connection error: {msg}"))
            }
            ApiError::Material(ErpError::Operation(msg)) => {
                tracing::error!("SAP operation error during material read: {msg}");
                error_only(StatusCode::INTERNAL_SERVER_ERROR, format!("SAP operation error: {msg}"))
            }
            ApiError::SalesOrder(ErpError::Connection(msg)) => {
                tracing::error!("SAP connection error during sales order creation: {msg}");
                error_only(StatusCode::SERVICE_UNAVAILABLE, format!("SAP connection error: {msg}"))
            }
            ApiError::SalesOrder(ErpError::Operation(msg)) => {
                tracing::error!("SAP operation error during sales order creation: {msg}");
                error_only(StatusCode::BAD_REQUEST, format!("SAP operation error: {msg}"))
            }
            // Order creation never looks anything up; treat it like any other
            // unanticipated failure.
            ApiError::SalesOrder(e @ ErpError::NotFound(_)) => {
                tracing::error!("unexpected error creating sales order: {e}");
                error_only(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE)
            }
            ApiError::Internal(e) => {
                tracing::error!("unexpected error: {e:#}");
                error_only(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE)
            }
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// `{"error": message}` without a separate code.
pub fn error_only(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": UNAUTHORIZED_MESSAGE })),
    )
        .into_response()
}

/// Fallback for paths no route matches.
pub async fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "Not Found", NOT_FOUND_DETAIL)
}

/// Rewrite non-JSON framework error responses into the JSON error shape.
///
/// Used with `axum::middleware::map_response` on the outermost router.
pub async fn json_envelope(response: Response) -> Response {
    let status = response.status();
    let rewritten = matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::NOT_FOUND
            | StatusCode::METHOD_NOT_ALLOWED
            | StatusCode::INTERNAL_SERVER_ERROR
    );
    if !rewritten || is_json(&response) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let detail = match status {
        StatusCode::NOT_FOUND => NOT_FOUND_DETAIL.to_string(),
        StatusCode::METHOD_NOT_ALLOWED => METHOD_NOT_ALLOWED_DETAIL.to_string(),
        StatusCode::INTERNAL_SERVER_ERROR => INTERNAL_ERROR_DETAIL.to_string(),
        _ => plain_text(body).await,
    };

    let reason = status.canonical_reason().unwrap_or("Error");
    tracing::error!(status = status.as_u16(), "{reason}: {detail}");

    let mut rewritten = json_error(status, reason, detail);
    for (name, value) in parts.headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rewritten.headers_mut().append(name.clone(), value.clone());
        }
    }
    rewritten
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v: &HeaderValue| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

async fn plain_text(body: Body) -> String {
    match axum::body::to_bytes(body, MAX_REWRITTEN_BODY).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn material_operation_failure_is_500_but_sales_order_is_400() {
        let material = ApiError::Material(ErpError::operation("boom")).into_response();
        let order = ApiError::SalesOrder(ErpError::operation("boom")).into_response();

        assert_eq!(material.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(order.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(order).await["error"], "SAP operation error: boom");
    }

    #[tokio::test]
    async fn connection_failures_are_503_on_both_routes() {
        for err in [
            ApiError::Material(ErpError::connection("down")),
            ApiError::SalesOrder(ErpError::connection("down")),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body_json(response).await["error"], "SAP connection error: down");
        }
    }

    #[tokio::test]
    async fn internal_errors_do_not_leak_details() {
        let response = ApiError::Internal(anyhow::anyhow!("secret stack detail")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], UNEXPECTED_ERROR_MESSAGE);
        assert!(!body.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn envelope_rewrites_plain_text_errors() {
        let plain = (StatusCode::BAD_REQUEST, "Failed to parse the request body").into_response();
        let response = json_envelope(plain).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Bad Request");
        assert_eq!(body["message"], "Failed to parse the request body");
    }

    #[tokio::test]
    async fn envelope_keeps_allow_header_on_405() {
        let mut plain = StatusCode::METHOD_NOT_ALLOWED.into_response();
        plain
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("GET,HEAD"));

        let response = json_envelope(plain).await;
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET,HEAD");
        assert_eq!(body_json(response).await["error"], "Method Not Allowed");
    }

    #[tokio::test]
    async fn envelope_leaves_json_and_success_responses_alone() {
        let ok = (StatusCode::OK, "fine").into_response();
        assert_eq!(json_envelope(ok).await.status(), StatusCode::OK);

        let already_json = error_only(StatusCode::NOT_FOUND, "Material with ID 'X' not found.");
        let body = body_json(json_envelope(already_json).await).await;
        assert_eq!(body["error"], "Material with ID 'X' not found.");
        assert!(body.get("message").is_none());
    }
}
