use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use titledash_core::Config;

use crate::metrics::encode_metrics;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_sha256: Option<String>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dataset = state.dataset();
    Json(HealthResponse {
        status: "ok".to_string(),
        records: dataset.len(),
        dataset_sha256: dataset.fingerprint().map(str::to_string),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Config> {
    Json(state.config().clone())
}

/// GET /metrics
///
/// Prometheus text exposition.
pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
