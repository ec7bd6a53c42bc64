//! Store abstraction.
//!
//! Handlers never reach a database directly: they hold an [`Arc`] to a value
//! implementing the traits below, constructed once at startup and shared by
//! every request. Implementations must be safe for concurrent use.
//!
//! Out of the box there are two backends:
//!
//! - [`InMemoryStore`]: a `Vec`-backed store that evaluates [`PoiFilter`]s in
//!   process. Used by tests and local tooling.
//! - [`MongoStore`]: the MongoDB backend (enabled via the `mongo` feature).
//!
//! [`Arc`]: std::sync::Arc

mod memory;
#[cfg(feature = "mongo")]
mod mongo;

pub use memory::InMemoryStore;
#[cfg(feature = "mongo")]
pub use mongo::MongoStore;

use async_trait::async_trait;
use bson::Document;

use crate::error::StoreError;
use crate::report::AccessibilityReport;
use crate::search::PoiFilter;

/// Collection holding points of interest.
pub const POIS_COLLECTION: &str = "pois";

/// Collection holding submitted accessibility reports.
pub const REPORTS_COLLECTION: &str = "accessibility_reports";

/// Read access to stored points of interest.
#[async_trait]
pub trait PoiStore: Send + Sync {
    /// Return up to `limit` raw records matching `filter`, in store order.
    async fn find_pois(&self, filter: &PoiFilter, limit: usize)
    -> Result<Vec<Document>, StoreError>;
}

/// Write access for accessibility reports.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a report and return the generated identifier as a string.
    async fn insert_report(&self, report: &AccessibilityReport) -> Result<String, StoreError>;
}

/// Connectivity check.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip to the store and report its server version.
    async fn server_version(&self) -> Result<String, StoreError>;
}

/// Convenience bound for a backend that serves every endpoint.
pub trait Store: PoiStore + ReportStore + StoreHealth {}

impl<T: PoiStore + ReportStore + StoreHealth> Store for T {}
