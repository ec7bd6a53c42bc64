//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: liveness, store connectivity and metrics
//! - `poi`: point-of-interest search
//! - `routing`: route suggestions
//! - `report`: accessibility report submission
//!
//! Every JSON response uses the `{status, data | message}` envelope.

pub mod health;
pub mod poi;
pub mod report;
pub mod routing;

use crate::error::{ServerError, ServerResult};
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Success envelope carrying a payload
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Liveness string for the bare root path
pub async fn root() -> &'static str {
    "Urban Navigator Backend is running!"
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

/// Unwrap a JSON body, rejecting anything unparseable or empty.
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` all count as empty.
pub(crate) fn json_body(payload: Result<Json<Value>, JsonRejection>) -> ServerResult<Value> {
    let Json(value) = payload?;
    let empty = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    };
    if empty {
        return Err(ServerError::invalid_json());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_bodies_are_rejected() {
        for value in [json!(null), json!({}), json!([]), json!(""), json!(0), json!(false)] {
            let err = json_body(Ok(Json(value.clone()))).unwrap_err();
            assert_eq!(err.to_string(), "Invalid JSON", "{value}");
        }
    }

    #[test]
    fn non_empty_object_passes_through() {
        let value = json!({ "report_type": "stairs" });
        assert_eq!(json_body(Ok(Json(value.clone()))).unwrap(), value);
    }
}
