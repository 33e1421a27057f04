//! Operational endpoints every service exposes.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

#[derive(Debug, Clone, Copy)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// `/health` and `/metrics`, ready to be merged into a service router.
pub fn ops_router(info: ServiceInfo) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .with_state(info)
}

pub async fn health_check(State(info): State<ServiceInfo>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": info.name,
        "version": info.version,
    }))
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        crate::observability::get_metrics(),
    )
}
