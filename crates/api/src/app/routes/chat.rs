use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use storefront_catalog::RefreshOutcome;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(chat))
        .route("/welcome", get(welcome))
        .route("/refresh", post(refresh))
}

pub async fn chat(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<dto::ChatRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return errors::rejection_to_response(rejection),
    };

    let delay = services.typing_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let reply = services.assistant().answer(&body.message);
    tracing::debug!(intent = %reply.intent, products = reply.products.len(), "chat reply");

    Json(dto::ChatResponse::from(reply)).into_response()
}

pub async fn welcome(Extension(services): Extension<Arc<AppServices>>) -> Json<dto::WelcomeResponse> {
    Json(dto::WelcomeResponse::new(services.assistant().welcome()))
}

/// Re-fetch the catalog. A failed fetch keeps serving the previous snapshot.
pub async fn refresh(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let outcome = services.assistant().refresh_catalog().await;
    let status = match outcome {
        RefreshOutcome::Replaced { .. } => StatusCode::OK,
        RefreshOutcome::Retained { .. } => StatusCode::BAD_GATEWAY,
        RefreshOutcome::InFlight => StatusCode::CONFLICT,
    };
    (status, Json(outcome)).into_response()
}
