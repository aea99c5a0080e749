use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::catalog::Catalog;
use crate::server::api;
use crate::server::static_files;

#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// Every response, including the raw data files, is marked `no-store`.
pub fn router(catalog: Arc<Catalog>) -> Router {
    let data_files = static_files::data_service(catalog.data_dir());

    Router::new()
        .route("/", get(static_files::index_page))
        .route("/api/health", get(api::health))
        .route("/api/weapons", get(api::weapons))
        .route("/api/categories", get(api::categories))
        .route("/api/view", get(api::view))
        .nest_service("/data", data_files)
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(AppState { catalog })
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}

pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "status": "error",
            "message": message,
        })),
    )
        .into_response()
}
