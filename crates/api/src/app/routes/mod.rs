use axum::{
    routing::{get, post},
    Router,
};

pub mod materials;
pub mod sales;
pub mod system;

/// Router for all endpoints behind the API key.
pub fn router() -> Router {
    Router::new().nest("/api/sap", sap_router())
}

fn sap_router() -> Router {
    Router::new()
        .route("/material/:material_id", get(materials::get_material))
        .route("/sales_order", post(sales::create_sales_order))
}
