use crate::domain::{NewProduct, Product};
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::ApiResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::get_product_handler
    ),
    components(schemas(ApiResponse, Product, NewProduct))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/products", get(products::list_products_handler))
        .route("/products/:id", get(products::get_product_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
