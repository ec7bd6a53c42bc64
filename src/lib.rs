//! Core of the Urban Navigator backend.
//!
//! This crate holds everything the HTTP layer delegates to:
//!
//! - [`search`]: free-text point-of-interest search with literal,
//!   case-insensitive matching on name and address (plus an exact id match
//!   when the query is an ObjectId), projected into the fixed [`Poi`] shape.
//! - [`report`]: validation and persisted shape of accessibility reports.
//! - [`route`]: the route-finding seam, currently served by fixture data.
//! - [`store`]: the injected store handle and its MongoDB and in-memory
//!   backends.
//!
//! ```
//! use bson::doc;
//! use navigator::{InMemoryStore, search::search};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = InMemoryStore::with_pois([
//!     doc! { "name": "Central Library", "address": "5 Main St", "latitude": 40.1 },
//! ]);
//!
//! let hits = search(&store, "library").await.unwrap();
//! assert_eq!(hits[0].poi_type, "unknown");
//! assert_eq!(hits[0].longitude, 0.0);
//! # }
//! ```

pub mod error;
pub mod poi;
pub mod report;
pub mod route;
pub mod search;
pub mod store;

pub use error::{ReportError, SearchError, StoreError};
pub use poi::{DEFAULT_POI_TYPE, PLACEHOLDER_IMAGE_URL, Poi};
pub use report::{AccessibilityReport, GeoPoint, NewReport, ReportStatus, SubmitReport};
pub use route::{FindRoutes, FixtureRouteFinder, Route, RouteFinder, RouteSegment, SegmentMode};
pub use search::{PoiFilter, SEARCH_LIMIT};
#[cfg(feature = "mongo")]
pub use store::MongoStore;
pub use store::{InMemoryStore, PoiStore, ReportStore, Store, StoreHealth};
