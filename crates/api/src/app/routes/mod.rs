use axum::{routing::get, Router};

pub mod chat;
pub mod products;
pub mod system;

/// Router for the storefront endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/products", get(products::list_products))
        .nest("/chat", chat::router())
}
