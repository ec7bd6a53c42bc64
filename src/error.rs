//! Error types produced by the navigator core.
//!
//! Each concern owns a small typed enum so the HTTP layer can map failures to
//! status codes without inspecting message text.
//!
//! | Error | Raised by | HTTP mapping |
//! |-------|-----------|--------------|
//! | [`StoreError`] | any store backend | 500, message echoed |
//! | [`SearchError::InvalidRequest`] | [`search`](crate::search::search) | 400 |
//! | [`SearchError::MissingField`] | POI projection | 500 |
//! | [`ReportError`] | report validation | 400 |
//!
//! # Examples
//!
//! ```rust
//! use navigator::{SearchError, StoreError};
//!
//! let err = SearchError::from(StoreError::query("connection reset"));
//! assert_eq!(err.to_string(), "connection reset");
//! ```
use thiserror::Error;

/// Faults raised while talking to the backing document store.
///
/// The display form is the underlying message with no prefix, since callers
/// echo it verbatim to HTTP clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// The store could not be reached or the handshake failed.
    #[error("{0}")]
    Connection(String),

    /// A read or command failed while executing.
    #[error("{0}")]
    Query(String),

    /// A write was rejected or did not acknowledge.
    #[error("{0}")]
    Insert(String),

    /// Backend-internal failure (poisoned lock, driver bug, ...).
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn connection(msg: impl Into<String>) -> Self {
        StoreError::Connection(msg.into())
    }

    pub fn query(msg: impl Into<String>) -> Self {
        StoreError::Query(msg.into())
    }

    pub fn insert(msg: impl Into<String>) -> Self {
        StoreError::Insert(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}

/// Failures of the POI search operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// The query text was empty.
    #[error("Query parameter is required")]
    InvalidRequest,

    /// A matched record lacks a field the response cannot default.
    ///
    /// Only `name` and `address` raise this; every other field has a
    /// documented fallback.
    #[error("stored POI is missing required field '{0}'")]
    MissingField(&'static str),

    /// The store rejected or failed the query.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validation failures for an accessibility report submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    /// `report_type`, `latitude` or `longitude` was absent or empty.
    #[error("Missing required fields")]
    MissingRequiredFields,
}
