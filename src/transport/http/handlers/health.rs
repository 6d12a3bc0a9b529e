use crate::transport::http::handlers::common::with_store;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (product file readable)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (product file unreadable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let checked = with_store(&state, |store| store.load().map(|products| products.len())).await;

    let failure = match checked {
        Ok(Ok(count)) => {
            return (
                StatusCode::OK,
                Json(ApiResponse {
                    success: true,
                    data: Some(serde_json::json!({ "status": "ok", "products": count })),
                    error: None,
                }),
            )
                .into_response();
        }
        Ok(Err(e)) => e.to_string(),
        Err(e) => e.to_string(),
    };

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiResponse {
            success: false,
            data: Some(serde_json::json!({ "status": "unhealthy" })),
            error: Some(format!("Product file check failed: {}", failure)),
        }),
    )
        .into_response()
}
