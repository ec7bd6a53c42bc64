//! Urban Navigator Server - HTTP REST API for accessible navigation
//!
//! This crate exposes the `navigator` core over HTTP:
//!
//! - **POI Search**: name/address/id search with normalized results
//! - **Routes**: accessible route suggestions (fixture data for now)
//! - **Accessibility Reports**: crowd-sourced report submission
//! - **Health & Metrics**: liveness, store connectivity and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - Liveness string
//! - `GET /health` - Liveness check
//! - `GET /metrics` - Prometheus metrics
//! - `GET /test_db_mongo` - Store connectivity check
//! - `GET /api/search-poi?query=...` - Search points of interest
//! - `POST /api/routes/find` - Suggest routes
//! - `POST /api/accessibility-reports/submit` - Submit an accessibility report
//!
//! Every JSON response is wrapped as `{"status": "success", ...}` or
//! `{"status": "error", "message": ...}`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
