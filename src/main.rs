// src/main.rs

use inventory_records::infra::logging;
use inventory_records::transport;
use inventory_records::{Config, ProductStore};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;

    // --- Store Initialization ---
    let mut store = ProductStore::new(&config.products_file);
    match store.load() {
        Ok(products) => tracing::info!(
            path = %config.products_file.display(),
            count = products.len(),
            "product store ready"
        ),
        // Keep serving: every request reloads, so a file fixed later is picked up.
        Err(e) => tracing::warn!(error = %e, "product file not readable at startup"),
    }
    let app_state = transport::http::AppState::new(store);

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on http://{addr}");
    tracing::info!("Swagger UI available at http://{addr}/swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutdown signal received");
            }
        })
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}
