use std::sync::Arc;

use axum::{extract::Extension, Json};

use storefront_catalog::Product;

use crate::app::services::AppServices;

/// The catalog snapshot the assistant is currently answering from.
pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<Product>> {
    Json(services.assistant().catalog().products().to_vec())
}
