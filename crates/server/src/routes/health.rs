use crate::error::{ServerError, ServerResult};
use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(ServerMetadata {
        status: "success",
        service: "navigator-server",
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime_seconds(),
    })
}

/// Store connectivity response
#[derive(Debug, Serialize)]
pub struct StoreStatusResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: String,
}

/// Store connectivity check
///
/// Round-trips to the store and reports its server version, or a 500
/// envelope carrying the driver's message.
pub async fn test_db_connection(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let version = state.health.server_version().await?;

    Ok(Json(StoreStatusResponse {
        status: "success",
        message: "Connected to MongoDB",
        version,
    }))
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or(ServerError::NotFound)
}
