use crate::config::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use navigator::{FixtureRouteFinder, PoiStore, ReportStore, RouteFinder, Store, StoreHealth};
use std::sync::Arc;

/// Shared application state
///
/// Every store-facing handle points at the same backend instance, created
/// once at startup. Handlers only see the narrow trait they need.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// POI reads for search
    pub pois: Arc<dyn PoiStore>,

    /// Report persistence
    pub reports: Arc<dyn ReportStore>,

    /// Connectivity check
    pub health: Arc<dyn StoreHealth>,

    /// Route suggestions
    pub routes: Arc<dyn RouteFinder>,

    /// Prometheus render handle, present when the recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state over a single store backend
    pub fn new<S>(config: ServerConfig, store: Arc<S>) -> Self
    where
        S: Store + 'static,
    {
        Self {
            config: Arc::new(config),
            pois: store.clone(),
            reports: store.clone(),
            health: store,
            routes: Arc::new(FixtureRouteFinder),
            metrics: None,
        }
    }

    /// Attach the Prometheus handle rendered by `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub status: &'static str,
    pub service: &'static str,
    pub version: String,
    pub uptime_seconds: u64,
}
