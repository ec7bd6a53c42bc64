use std::sync::RwLock;

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};

use super::{PoiStore, ReportStore, StoreHealth};
use crate::error::StoreError;
use crate::poi::fields;
use crate::report::AccessibilityReport;
use crate::search::PoiFilter;

/// Version string reported by [`StoreHealth::server_version`].
pub const IN_MEMORY_VERSION: &str = "in-memory";

/// Process-local store keeping documents in insertion order.
///
/// Records inserted without an `_id` get a fresh ObjectId, matching what a
/// document database does on insert.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pois: RwLock<Vec<Document>>,
    reports: RwLock<Vec<Document>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with POI records.
    pub fn with_pois(records: impl IntoIterator<Item = Document>) -> Self {
        let store = Self::new();
        for record in records {
            // A freshly created lock cannot be poisoned.
            let _ = store.insert_poi(record);
        }
        store
    }

    /// Insert a POI record, returning its identifier.
    pub fn insert_poi(&self, mut record: Document) -> Result<Bson, StoreError> {
        let id = ensure_id(&mut record);
        self.pois
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?
            .push(record);
        Ok(id)
    }

    /// Snapshot of every persisted report document.
    pub fn reports(&self) -> Result<Vec<Document>, StoreError> {
        let guard = self
            .reports
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.clone())
    }
}

fn ensure_id(record: &mut Document) -> Bson {
    if let Some(id) = record.get(fields::ID) {
        return id.clone();
    }
    let id = Bson::ObjectId(ObjectId::new());
    record.insert(fields::ID, id.clone());
    id
}

#[async_trait]
impl PoiStore for InMemoryStore {
    async fn find_pois(
        &self,
        filter: &PoiFilter,
        limit: usize,
    ) -> Result<Vec<Document>, StoreError> {
        let guard = self
            .pois
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard
            .iter()
            .filter(|record| filter.matches(record))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReportStore for InMemoryStore {
    async fn insert_report(&self, report: &AccessibilityReport) -> Result<String, StoreError> {
        let id = ObjectId::new();
        let mut document = report.to_document();
        document.insert(fields::ID, id);
        self.reports
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?
            .push(document);
        Ok(id.to_hex())
    }
}

#[async_trait]
impl StoreHealth for InMemoryStore {
    async fn server_version(&self) -> Result<String, StoreError> {
        Ok(IN_MEMORY_VERSION.to_string())
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;

    use super::*;

    #[tokio::test]
    async fn find_respects_limit_and_insertion_order() {
        let store = InMemoryStore::with_pois(
            (0..15).map(|i| doc! { "name": format!("Stop {i}"), "address": "Ring Rd" }),
        );
        let filter = PoiFilter::for_query("stop").unwrap();

        let found = store.find_pois(&filter, 10).await.unwrap();
        let names: Vec<_> = found.iter().map(|d| d.get_str("name").unwrap()).collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Stop 0");
        assert_eq!(names[9], "Stop 9");
    }

    #[test]
    fn insert_keeps_existing_id_and_generates_missing_ones() {
        let store = InMemoryStore::new();
        let explicit = store.insert_poi(doc! { "_id": "poi-1", "name": "A" }).unwrap();
        let generated = store.insert_poi(doc! { "name": "B" }).unwrap();

        assert_eq!(explicit, Bson::String("poi-1".into()));
        assert!(matches!(generated, Bson::ObjectId(_)));
    }

    #[tokio::test]
    async fn reports_are_stored_with_generated_id() {
        use crate::report::{AccessibilityReport, SubmitReport};

        let store = InMemoryStore::new();
        let report = SubmitReport {
            report_type: Some("broken_elevator".into()),
            latitude: Some(1.0),
            longitude: Some(2.0),
            ..Default::default()
        }
        .validate()
        .unwrap();

        let id = store
            .insert_report(&AccessibilityReport::pending(report, chrono::Utc::now()))
            .await
            .unwrap();

        let stored = store.reports().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].get_object_id("_id").unwrap().to_hex(), id);
        assert_eq!(store.server_version().await.unwrap(), IN_MEMORY_VERSION);
    }
}
