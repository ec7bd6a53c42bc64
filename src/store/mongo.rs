use async_trait::async_trait;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use super::{POIS_COLLECTION, PoiStore, REPORTS_COLLECTION, ReportStore, StoreHealth};
use crate::error::StoreError;
use crate::poi::id_string;
use crate::report::AccessibilityReport;
use crate::search::PoiFilter;

/// MongoDB-backed store.
///
/// Wraps a single driver [`Client`], which pools connections internally and
/// is cheap to clone, so one `MongoStore` serves every request.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Build a client for `uri` and bind it to database `db_name`.
    ///
    /// The driver connects lazily; an unreachable server surfaces on the
    /// first operation, not here.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;
        info!(db = db_name, "mongodb client initialised");
        Ok(Self::with_client(client, db_name))
    }

    pub fn with_client(client: Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self { client, db }
    }

    fn pois(&self) -> Collection<Document> {
        self.db.collection(POIS_COLLECTION)
    }

    fn reports(&self) -> Collection<Document> {
        self.db.collection(REPORTS_COLLECTION)
    }
}

#[async_trait]
impl PoiStore for MongoStore {
    async fn find_pois(
        &self,
        filter: &PoiFilter,
        limit: usize,
    ) -> Result<Vec<Document>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let cursor = self
            .pois()
            .find(filter.to_document())
            .limit(limit)
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;
        let records: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::query(e.to_string()))?;
        debug!(count = records.len(), "pois fetched");
        Ok(records)
    }
}

#[async_trait]
impl ReportStore for MongoStore {
    async fn insert_report(&self, report: &AccessibilityReport) -> Result<String, StoreError> {
        let result = self
            .reports()
            .insert_one(report.to_document())
            .await
            .map_err(|e| StoreError::insert(e.to_string()))?;
        let id = id_string(&result.inserted_id);
        debug!(report_id = %id, report_type = %report.report_type, "accessibility report stored");
        Ok(id)
    }
}

#[async_trait]
impl StoreHealth for MongoStore {
    async fn server_version(&self) -> Result<String, StoreError> {
        let info = self
            .client
            .database("admin")
            .run_command(doc! { "buildInfo": 1 })
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;
        info.get_str("version")
            .map(str::to_string)
            .map_err(|e| StoreError::query(e.to_string()))
    }
}
