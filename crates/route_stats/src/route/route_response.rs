use geo_types::Coord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::RouteStatsError,
    route::{
        geometry::{DEFAULT_POLYLINE_MULTIPLIER, decode_polyline},
        labeled_interval::LabeledInterval,
    },
};

/// A GraphHopper route response, extended with the vehicle the route was
/// requested for.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename = "RouteResponse")]
pub struct RouteResponse {
    /// Vehicle identifier, e.g. `bvv-bike` or `racingbike`
    #[serde(default)]
    pub vehicle: String,
    pub paths: Vec<ResponsePath>,
}

impl RouteResponse {
    pub fn first_path(&self) -> Result<&ResponsePath, RouteStatsError> {
        self.paths.first().ok_or(RouteStatsError::MissingPath)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename = "ResponsePath")]
pub struct ResponsePath {
    /// Distance in meters
    pub distance: f64,

    /// Travel time in milliseconds, as estimated by the routing backend
    pub time: f64,

    pub points: PathPoints,

    /// Scale of the encoded polyline, `1e5` unless stated otherwise
    #[serde(default = "default_points_encoded_multiplier")]
    pub points_encoded_multiplier: f64,

    #[serde(default)]
    pub details: PathDetails,
}

fn default_points_encoded_multiplier() -> f64 {
    DEFAULT_POLYLINE_MULTIPLIER
}

impl ResponsePath {
    pub fn coordinates(&self) -> Result<Vec<Coord>, RouteStatsError> {
        match &self.points {
            PathPoints::Encoded(encoded) => {
                decode_polyline(encoded, self.points_encoded_multiplier)
            }
            PathPoints::LineString(line_string) => Ok(line_string.coordinates()),
        }
    }
}

/// Route geometry, either encoded (`points_encoded=true`) or as a GeoJSON
/// line string.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum PathPoints {
    Encoded(String),
    LineString(GeoJsonLineString),
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeoJsonLineString {
    /// `[lon, lat]` or `[lon, lat, ele]` positions
    pub coordinates: Vec<Vec<f64>>,
}

impl GeoJsonLineString {
    fn coordinates(&self) -> Vec<Coord> {
        self.coordinates
            .iter()
            .filter_map(|position| match position.as_slice() {
                [lon, lat, ..] => Some(Coord { x: *lon, y: *lat }),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename = "PathDetails")]
pub struct PathDetails {
    #[serde(default)]
    #[schemars(with = "Vec<(usize, usize, Option<serde_json::Value>)>")]
    pub surface: Vec<LabeledInterval>,

    #[serde(default)]
    #[schemars(with = "Vec<(usize, usize, Option<serde_json::Value>)>")]
    pub road_class: Vec<LabeledInterval>,

    #[serde(default)]
    #[schemars(with = "Vec<(usize, usize, Option<serde_json::Value>)>")]
    pub track_type: Vec<LabeledInterval>,
}

/// Cumulated ascent and descent of a route, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElevationProfile {
    pub sum_up: f64,
    pub sum_down: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_encoded_path() {
        let response: RouteResponse = serde_json::from_str(
            r#"{
                "vehicle": "bvv-hike",
                "paths": [{
                    "distance": 1200.5,
                    "time": 900000,
                    "points": "_p~iF~ps|U_ulLnnqC",
                    "details": {
                        "surface": [[0, 1, "asphalt"]],
                        "road_class": [[0, 1, "path"]]
                    }
                }]
            }"#,
        )
        .unwrap();

        let path = response.first_path().unwrap();
        assert_eq!(response.vehicle, "bvv-hike");
        assert_eq!(path.time, 900000.0);
        assert_eq!(path.points_encoded_multiplier, DEFAULT_POLYLINE_MULTIPLIER);
        assert_eq!(path.details.surface.len(), 1);
        assert!(path.details.track_type.is_empty());
        assert_eq!(path.coordinates().unwrap().len(), 2);
    }

    #[test]
    fn test_deserialize_geojson_path() {
        let path: ResponsePath = serde_json::from_str(
            r#"{
                "distance": 10.0,
                "time": 1000,
                "points": { "type": "LineString", "coordinates": [[11.5, 48.1, 520.0], [11.6, 48.2, 530.0]] }
            }"#,
        )
        .unwrap();

        let coordinates = path.coordinates().unwrap();
        assert_eq!(coordinates, vec![Coord { x: 11.5, y: 48.1 }, Coord { x: 11.6, y: 48.2 }]);
    }

    #[test]
    fn test_missing_path() {
        let response: RouteResponse = serde_json::from_str(r#"{ "paths": [] }"#).unwrap();
        assert!(matches!(
            response.first_path(),
            Err(RouteStatsError::MissingPath)
        ));
    }

    #[test]
    fn test_deserialize_elevation_profile() {
        let profile: ElevationProfile =
            serde_json::from_str(r#"{ "sumUp": 50.0, "sumDown": 42.5 }"#).unwrap();
        assert_eq!(
            profile,
            ElevationProfile {
                sum_up: 50.0,
                sum_down: 42.5
            }
        );
    }
}
