use crate::error::{ServerError, ServerResult};
use crate::routes::{json_body, DataResponse};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use navigator::FindRoutes;
use serde_json::Value;
use std::sync::Arc;

/// Suggest routes between two points
///
/// All five request keys are required. A body missing one is a client bug
/// the server does not try to describe, so it surfaces as a 500.
pub async fn find_routes(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let body = json_body(payload)?;
    let request: FindRoutes =
        serde_json::from_value(body).map_err(|e| ServerError::Internal(e.to_string()))?;

    let routes = state.routes.find_routes(&request).await;

    Ok(Json(DataResponse::success(routes)))
}
