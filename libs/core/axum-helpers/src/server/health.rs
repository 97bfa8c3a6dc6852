use axum::{Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use core_config::AppInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::response::ApiResponse;

/// Liveness payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the process started
    pub uptime: f64,
    pub version: String,
    pub environment: String,
}

/// Readiness payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadyResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub services: ServiceStatus,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    pub api: String,
}

/// Health check endpoint handler.
///
/// Always returns 200 while the process is serving.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = ApiResponse<HealthResponse>)
    )
)]
pub async fn health_handler(State(app): State<AppInfo>) -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        uptime: app.uptime_secs(),
        version: app.version.clone(),
        environment: app.environment.to_string(),
    })
}

/// Readiness endpoint handler.
///
/// The in-process API has no external dependencies to probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ApiResponse<ReadyResponse>)
    )
)]
pub async fn ready_handler() -> ApiResponse<ReadyResponse> {
    ApiResponse::success(ReadyResponse {
        status: "ready".to_string(),
        timestamp: Utc::now(),
        services: ServiceStatus {
            api: "operational".to_string(),
        },
    })
}

/// Creates a router with the `/health` and `/health/ready` endpoints.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
/// use core_config::app_info;
///
/// let app = Router::new().merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/health/ready", get(ready_handler))
        .with_state(app_info)
}
