//! Free-text POI search.
//!
//! A query is turned into a [`PoiFilter`], handed to a [`PoiStore`], and every
//! returned record is projected through [`Poi::from_document`].
//!
//! Matching rules:
//!
//! - `name` or `address` contains the query, case-insensitively. The query is
//!   matched literally, so `"St. (North)"` finds exactly that text.
//! - When the query is itself a valid ObjectId (24 hex characters) the record
//!   with that `_id` also matches, even with no text hit.
//! - At most [`SEARCH_LIMIT`] records come back, in whatever order the store
//!   yields them.

use bson::{Bson, Document, doc, oid::ObjectId};
use tracing::debug;

use crate::error::SearchError;
use crate::poi::{Poi, fields};
use crate::store::PoiStore;

/// Maximum number of POIs returned by one search.
pub const SEARCH_LIMIT: usize = 10;

/// Disjunctive match over name, address and (optionally) id.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiFilter {
    text: String,
    id: Option<ObjectId>,
}

impl PoiFilter {
    /// Build the filter for a search query.
    ///
    /// Fails with [`SearchError::InvalidRequest`] for an empty query.
    pub fn for_query(query: &str) -> Result<Self, SearchError> {
        if query.is_empty() {
            return Err(SearchError::InvalidRequest);
        }
        Ok(Self {
            text: query.to_string(),
            id: ObjectId::parse_str(query).ok(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Identifier clause, present only when the query parses as an ObjectId.
    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    /// Render as a MongoDB query document.
    pub fn to_document(&self) -> Document {
        let pattern = regex::escape(&self.text);
        let mut clauses = vec![
            Bson::Document(doc! { "name": { "$regex": pattern.as_str(), "$options": "i" } }),
            Bson::Document(doc! { "address": { "$regex": pattern.as_str(), "$options": "i" } }),
        ];
        if let Some(id) = self.id {
            clauses.push(Bson::Document(doc! { "_id": id }));
        }
        doc! { "$or": clauses }
    }

    /// Evaluate the filter against a stored record.
    ///
    /// Mirrors [`to_document`](Self::to_document) for stores that cannot run
    /// Mongo queries. Non-text `name`/`address` values never match.
    pub fn matches(&self, record: &Document) -> bool {
        let needle = self.text.to_lowercase();
        let contains = |key: &str| match record.get(key) {
            Some(Bson::String(value)) => value.to_lowercase().contains(&needle),
            _ => false,
        };

        contains(fields::NAME)
            || contains(fields::ADDRESS)
            || self
                .id
                .is_some_and(|id| record.get(fields::ID) == Some(&Bson::ObjectId(id)))
    }
}

/// Run a POI search against `store`.
///
/// An empty query is rejected before the store is touched. Store faults come
/// back as [`SearchError::Store`]; a matched record lacking `name` or
/// `address` fails the whole call with [`SearchError::MissingField`].
pub async fn search(store: &dyn PoiStore, query: &str) -> Result<Vec<Poi>, SearchError> {
    let filter = PoiFilter::for_query(query)?;
    let records = store.find_pois(&filter, SEARCH_LIMIT).await?;
    debug!(query, id_clause = filter.id.is_some(), hits = records.len(), "poi search executed");

    records.iter().take(SEARCH_LIMIT).map(Poi::from_document).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_rejected() {
        assert_eq!(PoiFilter::for_query(""), Err(SearchError::InvalidRequest));
    }

    #[test]
    fn plain_text_has_two_clauses() {
        let filter = PoiFilter::for_query("library").unwrap();
        assert_eq!(filter.id(), None);

        let rendered = filter.to_document();
        let clauses = rendered.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(
            clauses[0],
            Bson::Document(doc! { "name": { "$regex": "library", "$options": "i" } })
        );
        assert_eq!(
            clauses[1],
            Bson::Document(doc! { "address": { "$regex": "library", "$options": "i" } })
        );
    }

    #[test]
    fn object_id_query_appends_id_clause() {
        let oid = ObjectId::new();
        let filter = PoiFilter::for_query(&oid.to_hex()).unwrap();
        assert_eq!(filter.id(), Some(oid));

        let rendered = filter.to_document();
        let clauses = rendered.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[2], Bson::Document(doc! { "_id": oid }));
    }

    #[test]
    fn near_miss_ids_add_no_id_clause() {
        for query in ["507f1f77bcf86cd79943901", "507f1f77bcf86cd79943901z", "hello world!"] {
            assert_eq!(PoiFilter::for_query(query).unwrap().id(), None, "{query}");
        }
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        let filter = PoiFilter::for_query("St. (North)").unwrap();
        let rendered = filter.to_document();
        let clauses = rendered.get_array("$or").unwrap();
        let name = clauses[0].as_document().unwrap().get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), r"St\. \(North\)");
    }

    #[test]
    fn matches_case_insensitive_substring() {
        let filter = PoiFilter::for_query("LIBR").unwrap();
        assert!(filter.matches(&doc! { "name": "Central Library", "address": "5 Main St" }));
        assert!(filter.matches(&doc! { "name": "Hall", "address": "Library Square" }));
        assert!(!filter.matches(&doc! { "name": "Hall", "address": "Main St" }));
        assert!(!filter.matches(&doc! { "name": 42, "address": Bson::Null }));
    }

    #[test]
    fn matches_by_id_without_text_hit() {
        let oid = ObjectId::new();
        let filter = PoiFilter::for_query(&oid.to_hex()).unwrap();
        assert!(filter.matches(&doc! { "_id": oid, "name": "Park", "address": "Elm St" }));
        assert!(!filter.matches(&doc! { "_id": ObjectId::new(), "name": "Park", "address": "Elm St" }));
    }
}
