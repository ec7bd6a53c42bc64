//! Point-of-interest response shape and the projection from stored records.
//!
//! Stored POIs are schemaless documents written by processes outside this
//! crate. [`Poi::from_document`] turns one of them into the fixed ten-field
//! shape returned to clients, substituting documented defaults for anything
//! optional that is absent or of the wrong type.

use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Image shown for POIs that carry no `imageUrl` of their own.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/100x100/E0E0E0/333333?text=POI";

/// Category used when a stored POI has no `type`.
pub const DEFAULT_POI_TYPE: &str = "unknown";

/// Stored field names, as written by the POI ingestion side.
pub mod fields {
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const TYPE: &str = "type";
    pub const WHEELCHAIR_ACCESSIBLE: &str = "wheelchair_accessible";
    pub const HAS_ACCESSIBLE_RESTROOM: &str = "has_accessible_restroom";
    pub const HAS_RAMP: &str = "has_ramp";
    pub const IMAGE_URL: &str = "imageUrl";
}

/// Normalized POI as returned by the search endpoint.
///
/// Every field is always populated. Coordinates of `0.0` may mean either a
/// real position or "no coordinates stored"; callers cannot tell the two
/// apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub poi_type: String,
    pub wheelchair_accessible: bool,
    pub has_accessible_restroom: bool,
    pub has_ramp: bool,
    pub image_url: String,
}

impl Poi {
    /// Project a stored record into the response shape.
    ///
    /// `name` and `address` are required; a record lacking either (or holding
    /// non-text there) fails with [`SearchError::MissingField`] rather than
    /// being defaulted.
    pub fn from_document(doc: &Document) -> Result<Self, SearchError> {
        Ok(Self {
            id: doc.get(fields::ID).map(id_string).unwrap_or_default(),
            name: required_text(doc, fields::NAME)?,
            address: required_text(doc, fields::ADDRESS)?,
            latitude: coordinate(doc, fields::LATITUDE),
            longitude: coordinate(doc, fields::LONGITUDE),
            poi_type: text_or(doc, fields::TYPE, DEFAULT_POI_TYPE),
            wheelchair_accessible: flag(doc, fields::WHEELCHAIR_ACCESSIBLE),
            has_accessible_restroom: flag(doc, fields::HAS_ACCESSIBLE_RESTROOM),
            has_ramp: flag(doc, fields::HAS_RAMP),
            image_url: text_or(doc, fields::IMAGE_URL, PLACEHOLDER_IMAGE_URL),
        })
    }
}

/// Canonical string form of a stored identifier.
pub fn id_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn required_text(doc: &Document, key: &'static str) -> Result<String, SearchError> {
    match doc.get(key) {
        Some(Bson::String(s)) => Ok(s.clone()),
        _ => Err(SearchError::MissingField(key)),
    }
}

// Integers and doubles pass through; anything else silently becomes 0.0.
fn coordinate(doc: &Document, key: &str) -> f64 {
    match doc.get(key) {
        Some(Bson::Double(v)) => *v,
        Some(Bson::Int32(v)) => f64::from(*v),
        Some(Bson::Int64(v)) => *v as f64,
        _ => 0.0,
    }
}

fn text_or(doc: &Document, key: &str, default: &str) -> String {
    match doc.get(key) {
        Some(Bson::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

fn flag(doc: &Document, key: &str) -> bool {
    matches!(doc.get(key), Some(Bson::Boolean(true)))
}
