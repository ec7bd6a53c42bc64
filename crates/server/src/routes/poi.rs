use crate::error::ServerResult;
use crate::routes::DataResponse;
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for POI search
#[derive(Debug, Deserialize)]
pub struct SearchPoiQuery {
    /// Search text; absent is treated like empty
    #[serde(default)]
    pub query: String,
}

/// Search points of interest by name, address or id
///
/// Returns at most ten POIs, each with every field populated.
pub async fn search_poi(
    State(state): State<Arc<ServerState>>,
    params: Result<Query<SearchPoiQuery>, QueryRejection>,
) -> ServerResult<impl IntoResponse> {
    let Query(params) = params?;
    let pois = navigator::search::search(state.pois.as_ref(), &params.query).await?;
    tracing::debug!(query = %params.query, results = pois.len(), "poi search");

    Ok(Json(DataResponse::success(pois)))
}
