use crate::domain::Product;
use crate::error::StoreError;
use crate::transport::http::handlers::common::{
    effective_limit, join_error_response, parse_int_prefix, store_error_response, with_store,
};
use crate::transport::http::types::{AppState, ProductsQuery};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/products",
    params(ProductsQuery),
    responses(
        (status = 200, description = "Stored products, optionally truncated to `limit`", body = Vec<Product>),
        (status = 500, description = "Product file could not be read", body = String)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
    query: Result<Query<ProductsQuery>, QueryRejection>,
) -> impl IntoResponse {
    // A query string that does not deserialize is treated as having no limit.
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let mut products = match with_store(&state, |store| store.read_all()).await {
        Ok(Ok(p)) => p,
        Ok(Err(e)) => return store_error_response(&e),
        Err(e) => return join_error_response(&e),
    };

    if let Some(limit) = effective_limit(query.limit.as_deref(), products.len()) {
        products.truncate(limit);
    }
    (StatusCode::OK, Json(products)).into_response()
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No product with that id", body = String),
        (status = 500, description = "Product file could not be read", body = String)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> impl IntoResponse {
    let Some(id) = parse_int_prefix(&raw_id).and_then(|n| u64::try_from(n).ok()) else {
        tracing::debug!(raw_id = %raw_id, "product id is not a non-negative integer");
        return (
            StatusCode::NOT_FOUND,
            Json(format!("Product with id {} does not exist", raw_id)),
        )
            .into_response();
    };

    match with_store(&state, move |store| store.read_by_id(id)).await {
        Ok(Ok(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(Err(e @ StoreError::NotFound { .. })) => {
            tracing::debug!(id, "product not found");
            store_error_response(&e)
        }
        Ok(Err(e)) => store_error_response(&e),
        Err(e) => join_error_response(&e),
    }
}
