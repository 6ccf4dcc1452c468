use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ApiHealthResponse {
    status: String,
    message: String,
    timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
struct VersionResponse {
    version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn api_health_check() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        status: "OK".to_string(),
        message: "School Timetable API is running".to_string(),
        timestamp: Utc::now(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/health", get(api_health_check))
        .route("/version", get(version))
}
