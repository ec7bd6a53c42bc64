//! Accessible route suggestions.
//!
//! No path-finding runs here yet. [`FixtureRouteFinder`] answers every request
//! with the same two routes, one step-free and one faster but with stairs,
//! so clients can build against a stable payload.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Route request as posted by clients. All five keys are required; their
/// values are taken as-is, so `null` or a string coordinate is accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FindRoutes {
    pub start_lat: Value,
    pub start_lon: Value,
    pub end_lat: Value,
    pub end_lon: Value,
    pub user_profile: Value,
}

/// How a segment is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMode {
    Walk,
    Bus,
    Metro,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    pub id: String,
    pub description: String,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub accessibility_notes: String,
    pub is_accessible: bool,
    #[serde(rename = "type")]
    pub mode: SegmentMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub name: String,
    pub total_distance_km: f64,
    pub total_duration_minutes: u32,
    pub segments: Vec<RouteSegment>,
    pub is_fully_accessible: bool,
    pub accessibility_summary: String,
}

/// Produces candidate routes for a request.
#[async_trait]
pub trait RouteFinder: Send + Sync {
    async fn find_routes(&self, request: &FindRoutes) -> Vec<Route>;
}

/// Returns [`fixture_routes`] regardless of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRouteFinder;

#[async_trait]
impl RouteFinder for FixtureRouteFinder {
    async fn find_routes(&self, _request: &FindRoutes) -> Vec<Route> {
        fixture_routes()
    }
}

fn segment(
    id: &str,
    description: &str,
    distance_km: f64,
    duration_minutes: u32,
    accessibility_notes: &str,
    is_accessible: bool,
    mode: SegmentMode,
) -> RouteSegment {
    RouteSegment {
        id: id.to_string(),
        description: description.to_string(),
        distance_km,
        duration_minutes,
        accessibility_notes: accessibility_notes.to_string(),
        is_accessible,
        mode,
    }
}

/// The two constant routes: an accessible bus route and a faster metro route
/// with stairs.
pub fn fixture_routes() -> Vec<Route> {
    vec![
        Route {
            id: "route1".to_string(),
            name: "Accessible Bus Route".to_string(),
            total_distance_km: 2.5,
            total_duration_minutes: 15,
            segments: vec![
                segment("seg1_1", "Walk from start", 0.5, 5, "Flat pavement", true, SegmentMode::Walk),
                segment(
                    "seg1_2",
                    "Take bus 101",
                    2.0,
                    10,
                    "Accessible bus with ramp",
                    true,
                    SegmentMode::Bus,
                ),
            ],
            is_fully_accessible: true,
            accessibility_summary: "Fully accessible.".to_string(),
        },
        Route {
            id: "route2".to_string(),
            name: "Fastest (Less Accessible)".to_string(),
            total_distance_km: 4.8,
            total_duration_minutes: 10,
            segments: vec![
                segment(
                    "seg2_1",
                    "Walk through park shortcut",
                    0.3,
                    3,
                    "Includes 2 flights of stairs",
                    false,
                    SegmentMode::Walk,
                ),
                segment(
                    "seg2_2",
                    "Take metro line A",
                    4.5,
                    7,
                    "Metro station has stairs, no elevator",
                    false,
                    SegmentMode::Metro,
                ),
            ],
            is_fully_accessible: false,
            accessibility_summary: "Faster, but includes stairs at metro station.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(start_lat: Value, end_lon: Value) -> FindRoutes {
        FindRoutes {
            start_lat,
            start_lon: json!(0.0),
            end_lat: json!(0.0),
            end_lon,
            user_profile: json!({ "wheelchair": true }),
        }
    }

    #[tokio::test]
    async fn fixture_ignores_request_values() {
        let finder = FixtureRouteFinder;
        let a = finder.find_routes(&request(json!(40.7), json!(-73.9))).await;
        let b = finder.find_routes(&request(json!(-33.8), json!(151.2))).await;
        let c = finder.find_routes(&request(json!("40.7"), Value::Null)).await;
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn accessible_route_is_all_accessible_segments() {
        for route in fixture_routes() {
            let all = route.segments.iter().all(|s| s.is_accessible);
            assert_eq!(route.is_fully_accessible, all, "{}", route.id);
        }
    }

    #[test]
    fn serializes_with_client_field_names() {
        let value = serde_json::to_value(&fixture_routes()[1]).unwrap();
        assert_eq!(value["totalDistanceKm"], json!(4.8));
        assert_eq!(value["isFullyAccessible"], json!(false));
        assert_eq!(value["segments"][1]["type"], json!("metro"));
        assert_eq!(
            value["segments"][1]["accessibilityNotes"],
            json!("Metro station has stairs, no elevator")
        );
        assert_eq!(value["segments"][0]["durationMinutes"], json!(3));
    }

    #[test]
    fn missing_key_fails_to_deserialize() {
        let body = json!({ "start_lat": 1.0, "start_lon": 2.0, "end_lat": 3.0, "end_lon": 4.0 });
        assert!(serde_json::from_value::<FindRoutes>(body).is_err());
    }

    #[test]
    fn present_keys_accept_any_value() {
        let body = json!({
            "start_lat": "40.7", "start_lon": null, "end_lat": [], "end_lon": false,
            "user_profile": null
        });
        let request = serde_json::from_value::<FindRoutes>(body).unwrap();
        assert_eq!(request.start_lat, json!("40.7"));
        assert_eq!(request.user_profile, Value::Null);
    }
}
