use crate::error::ServerResult;
use crate::routes::json_body;
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use navigator::{AccessibilityReport, ReportError, SubmitReport};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Response from report submission
#[derive(Debug, Serialize)]
pub struct SubmitReportResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub report_id: String,
}

/// Submit an accessibility report
///
/// Requires `report_type`, `latitude` and `longitude`; `description` and
/// `photo_url` are optional. Stored as `pending` with a GeoJSON location.
pub async fn submit_report(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let body = json_body(payload)?;
    let submission: SubmitReport = serde_json::from_value(body).map_err(|e| {
        tracing::debug!(error = %e, "report body has wrong-typed fields");
        ReportError::MissingRequiredFields
    })?;
    let report = AccessibilityReport::pending(submission.validate()?, chrono::Utc::now());

    let report_id = state.reports.insert_report(&report).await?;
    tracing::info!(
        report_id = %report_id,
        report_type = %report.report_type,
        "accessibility report submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitReportResponse {
            status: "success",
            message: "Report submitted",
            report_id,
        }),
    ))
}
