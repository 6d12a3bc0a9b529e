use crate::storage::ProductStore;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::{IntoParams, ToSchema};

/// Shared handler state. The mutex serializes every store access, so the
/// reload-then-overwrite cycle of one request never interleaves with another.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ProductStore>>,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductsQuery {
    /// Maximum number of products to return, counted from the start of the list.
    /// Missing, non-numeric, non-positive or too-large values return everything.
    #[serde(default)]
    pub limit: Option<String>,
}
