use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use navigator::{ReportError, SearchError, StoreError};
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Client sent a missing, empty or malformed input.
    #[error("{0}")]
    BadRequest(String),

    /// The backing store failed; the store's message is echoed as-is.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// Failure envelope shared by every JSON error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Store(_) | ServerError::Internal(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid_json() -> Self {
        ServerError::BadRequest("Invalid JSON".to_string())
    }

    pub fn invalid_query() -> Self {
        ServerError::BadRequest("Invalid query string".to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<SearchError> for ServerError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidRequest => ServerError::BadRequest(err.to_string()),
            SearchError::Store(store) => ServerError::Store(store),
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl From<ReportError> for ServerError {
    fn from(err: ReportError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(err: JsonRejection) -> Self {
        tracing::debug!(error = %err, "rejected request body");
        ServerError::invalid_json()
    }
}

impl From<QueryRejection> for ServerError {
    fn from(err: QueryRejection) -> Self {
        tracing::debug!(error = %err, "rejected query string");
        ServerError::invalid_query()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
