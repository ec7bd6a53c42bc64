//! End-to-end POI search against the in-memory store.

use async_trait::async_trait;
use bson::{Bson, Document, doc, oid::ObjectId};
use std::sync::atomic::{AtomicUsize, Ordering};

use navigator::search::search;
use navigator::{
    InMemoryStore, PLACEHOLDER_IMAGE_URL, PoiFilter, PoiStore, SEARCH_LIMIT, SearchError,
    StoreError,
};

/// Counts calls and always fails, to observe whether the store was reached.
#[derive(Default)]
struct FailingStore {
    calls: AtomicUsize,
}

#[async_trait]
impl PoiStore for FailingStore {
    async fn find_pois(&self, _: &PoiFilter, _: usize) -> Result<Vec<Document>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::connection("server selection timeout"))
    }
}

#[tokio::test]
async fn library_scenario_fills_defaults() {
    let store = InMemoryStore::with_pois([
        doc! {
            "name": "Central Library",
            "address": "5 Main St",
            "latitude": 40.1,
            "wheelchair_accessible": true,
        },
        doc! { "name": "Corner Cafe", "address": "9 Elm St" },
    ]);

    let hits = search(&store, "library").await.unwrap();

    assert_eq!(hits.len(), 1);
    let poi = &hits[0];
    assert_eq!(poi.name, "Central Library");
    assert_eq!(poi.poi_type, "unknown");
    assert_eq!(poi.image_url, PLACEHOLDER_IMAGE_URL);
    assert!(poi.wheelchair_accessible);
    assert!(!poi.has_accessible_restroom);
    assert!(!poi.has_ramp);
    assert_eq!(poi.latitude, 40.1);
    assert_eq!(poi.longitude, 0.0);
    assert_eq!(poi.id.len(), 24);
}

#[tokio::test]
async fn results_are_capped_at_ten() {
    let store = InMemoryStore::with_pois(
        (0..25).map(|i| doc! { "name": format!("Bus stop {i}"), "address": "Route 9" }),
    );

    let hits = search(&store, "route 9").await.unwrap();
    assert_eq!(hits.len(), SEARCH_LIMIT);
    assert_eq!(hits[0].name, "Bus stop 0");
}

#[tokio::test]
async fn id_query_returns_record_without_text_hit() {
    let oid = ObjectId::new();
    let store = InMemoryStore::with_pois([
        doc! { "_id": oid, "name": "Riverside Park", "address": "Water Ln" },
        doc! { "name": "Town Hall", "address": "1 Civic Sq" },
    ]);

    let hits = search(&store, &oid.to_hex()).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, oid.to_hex());
    assert_eq!(hits[0].name, "Riverside Park");
}

#[tokio::test]
async fn empty_query_never_reaches_store() {
    let store = FailingStore::default();
    assert_eq!(search(&store, "").await, Err(SearchError::InvalidRequest));
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn store_fault_is_surfaced_verbatim() {
    let store = FailingStore::default();
    let err = search(&store, "park").await.unwrap_err();
    assert_eq!(err.to_string(), "server selection timeout");
    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn record_without_address_fails_the_search() {
    let store = InMemoryStore::with_pois([doc! { "name": "Nameless plaza" }]);
    assert_eq!(
        search(&store, "plaza").await,
        Err(SearchError::MissingField("address"))
    );
}

#[tokio::test]
async fn wrong_typed_optionals_fall_back_to_defaults() {
    let store = InMemoryStore::with_pois([doc! {
        "name": "Station",
        "address": "Platform 1",
        "latitude": "north",
        "longitude": Bson::Null,
        "type": 7,
        "has_ramp": "yes",
        "imageUrl": Bson::Null,
    }]);

    let poi = &search(&store, "station").await.unwrap()[0];
    assert_eq!((poi.latitude, poi.longitude), (0.0, 0.0));
    assert_eq!(poi.poi_type, "unknown");
    assert!(!poi.has_ramp);
    assert_eq!(poi.image_url, PLACEHOLDER_IMAGE_URL);
}
