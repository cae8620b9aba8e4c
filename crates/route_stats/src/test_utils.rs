use geo_types::{Coord, coord};

use crate::route::{
    labeled_interval::LabeledInterval,
    route_response::{PathDetails, PathPoints, ResponsePath, RouteResponse},
};

pub fn intervals(values: &[(usize, usize, Option<&str>)]) -> Vec<LabeledInterval> {
    values
        .iter()
        .map(|(from, to, label)| LabeledInterval::new(*from, *to, label.map(String::from)))
        .collect()
}

pub fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// `count` points heading east around Munich, alternating between two
/// latitudes.
pub fn zigzag_coordinates(count: usize) -> Vec<Coord> {
    (0..count)
        .map(|i| coord! { x: 11.5 + i as f64 * 0.001, y: 48.1 + (i % 2) as f64 * 0.001 })
        .collect()
}

pub fn encoded_zigzag(count: usize) -> String {
    polyline::encode_coordinates(zigzag_coordinates(count), 5).unwrap()
}

pub struct RouteResponseBuilder {
    vehicle: String,
    points: String,
    distance: f64,
    time: f64,
    details: PathDetails,
}

impl RouteResponseBuilder {
    pub fn new(vehicle: &str, points: String) -> Self {
        Self {
            vehicle: vehicle.to_owned(),
            points,
            distance: 1000.0,
            time: 600_000.0,
            details: PathDetails::default(),
        }
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    pub fn surface(mut self, surface: Vec<LabeledInterval>) -> Self {
        self.details.surface = surface;
        self
    }

    pub fn road_class(mut self, road_class: Vec<LabeledInterval>) -> Self {
        self.details.road_class = road_class;
        self
    }

    pub fn track_type(mut self, track_type: Vec<LabeledInterval>) -> Self {
        self.details.track_type = track_type;
        self
    }

    pub fn build(self) -> RouteResponse {
        RouteResponse {
            vehicle: self.vehicle,
            paths: vec![ResponsePath {
                distance: self.distance,
                time: self.time,
                points: PathPoints::Encoded(self.points),
                points_encoded_multiplier: 1e5,
                details: self.details,
            }],
        }
    }
}
