use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use sapgate_inventory::MaterialId;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn get_material(
    Extension(services): Extension<Arc<AppServices>>,
    Path(material_id): Path<String>,
) -> Result<Response, ApiError> {
    tracing::info!(%material_id, "request received for GET /api/sap/material");

    let id = MaterialId::new(material_id);
    let record = services
        .call("read_material", |erp| erp.read_material(&id))?
        .map_err(ApiError::Material)?;

    tracing::info!(material_id = %id, "material data fetched");
    Ok((StatusCode::OK, Json(record)).into_response())
}
