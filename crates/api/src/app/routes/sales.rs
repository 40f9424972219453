use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::app::errors::{self, ApiError};
use crate::app::services::AppServices;

pub const INVALID_JSON_MESSAGE: &str = "Invalid input: JSON data expected";
pub const MISSING_DETAILS_MESSAGE: &str = "Invalid input: 'details' key missing in JSON payload";

/// `POST /api/sap/sales_order`.
///
/// The body is read as raw bytes so a missing or wrong `Content-Type` is
/// treated like any other unusable body (400) rather than a 415.
pub async fn create_sales_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    tracing::info!("request received for POST /api/sap/sales_order");

    let Some(payload) = parse_object(&body) else {
        tracing::warn!("invalid sales order input: no JSON object");
        return Ok(errors::error_only(StatusCode::BAD_REQUEST, INVALID_JSON_MESSAGE));
    };

    // Only the HTTP layer requires `details`; the backend never looks at it.
    if !payload.contains_key("details") {
        tracing::warn!("invalid sales order input: 'details' key missing");
        return Ok(errors::error_only(StatusCode::BAD_REQUEST, MISSING_DETAILS_MESSAGE));
    }

    let confirmation = services
        .call("create_sales_order", |erp| erp.create_sales_order(&payload))?
        .map_err(ApiError::SalesOrder)?;

    tracing::info!(order_id = %confirmation.order_id, "sales order created");
    Ok((StatusCode::CREATED, Json(confirmation)).into_response())
}

/// A non-empty JSON object, or nothing.
fn parse_object(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Some(map),
        _ => None,
    }
}
