//! Accessibility report submission.
//!
//! [`SubmitReport`] is the wire schema clients post. [`SubmitReport::validate`]
//! performs every presence check once, producing a [`NewReport`] that can no
//! longer be missing anything. [`AccessibilityReport::pending`] stamps it into
//! the persisted shape.

use bson::{Bson, DateTime as BsonDateTime, Document, doc};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Report as posted by a client. Everything is optional on the wire so that
/// absence can be reported uniformly by [`validate`](Self::validate).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmitReport {
    #[serde(default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub report_type: String,
    pub description: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub photo_url: Option<String>,
}

impl SubmitReport {
    /// Require a non-empty `report_type` plus both coordinates.
    pub fn validate(self) -> Result<NewReport, ReportError> {
        let report_type = self
            .report_type
            .filter(|t| !t.is_empty())
            .ok_or(ReportError::MissingRequiredFields)?;
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Err(ReportError::MissingRequiredFields);
        };

        Ok(NewReport {
            report_type,
            description: self.description,
            latitude,
            longitude,
            photo_url: self.photo_url,
        })
    }
}

/// GeoJSON point. Coordinates are stored `[longitude, latitude]`, the order
/// geospatial indexes expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: "Point",
            coordinates: [longitude, latitude],
        }
    }

    /// `[longitude, latitude]`.
    pub fn coordinates(&self) -> [f64; 2] {
        self.coordinates
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn to_document(&self) -> Document {
        doc! {
            "type": self.kind,
            "coordinates": [self.coordinates[0], self.coordinates[1]],
        }
    }
}

/// Moderation state of a report. New submissions always start `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
        }
    }
}

/// Persisted accessibility report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityReport {
    pub report_type: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub location: GeoPoint,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

impl AccessibilityReport {
    pub fn pending(report: NewReport, created_at: DateTime<Utc>) -> Self {
        Self {
            location: GeoPoint::new(report.latitude, report.longitude),
            report_type: report.report_type,
            description: report.description,
            photo_url: report.photo_url,
            status: ReportStatus::Pending,
            created_at,
        }
    }

    /// Store document. Absent `description`/`photo_url` are written as null
    /// and `created_at` as a native BSON date.
    pub fn to_document(&self) -> Document {
        doc! {
            "report_type": self.report_type.as_str(),
            "description": self.description.clone().map_or(Bson::Null, Bson::String),
            "photo_url": self.photo_url.clone().map_or(Bson::Null, Bson::String),
            "location": self.location.to_document(),
            "status": self.status.as_str(),
            "created_at": BsonDateTime::from_millis(self.created_at.timestamp_millis()),
        }
    }
}
