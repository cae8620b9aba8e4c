use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    config::StatsConfig,
    error::RouteStatsError,
    route::{
        meters::Meters,
        route_response::{ElevationProfile, RouteResponse},
    },
    stats::{
        eta::estimate_with_profile,
        interval_merger::merge_road_classes,
        segment_aggregator::{AggregatedAttributes, aggregate_segments},
    },
    warnings::{
        vehicle_class::VehicleClass,
        warning_engine::{AggregatedWarnings, compute_warnings},
    },
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename = "RouteStats")]
pub struct RouteStats {
    /// Travel time in milliseconds
    pub time: f64,

    /// Distance in meters, as reported by the routing backend
    pub dist: f64,

    /// `[ascend, descend]` when the elevation profile is known, empty
    /// otherwise
    #[serde(rename = "twoDiff")]
    pub two_diff: Vec<f64>,

    pub details: RouteDetails,

    pub warnings: AggregatedWarnings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct RouteDetails {
    pub surface: AggregatedAttributes,
    pub road_class: AggregatedAttributes,
}

/// Computes distances per detail, warnings and the travel time of the first
/// path of `response`.
#[instrument(skip_all, fields(vehicle = %response.vehicle))]
pub fn compute_stats(
    response: &RouteResponse,
    elevation: Option<&ElevationProfile>,
    config: &StatsConfig,
) -> Result<RouteStats, RouteStatsError> {
    let path = response.first_path()?;
    let coordinates = path.coordinates()?;
    let details = &path.details;

    let surface = aggregate_segments(&details.surface, &coordinates);

    let road_classes = merge_road_classes(
        &details.road_class,
        &details.track_type,
        &config.mergeable_road_classes,
    );
    let road_class = aggregate_segments(&road_classes, &coordinates);

    let language = config.language();
    if language.is_none() {
        debug!(language = %config.language, "No warning messages for language");
    }

    let warnings = compute_warnings(
        VehicleClass::from_vehicle(&response.vehicle),
        &road_classes,
        &details.surface,
        language,
    );

    let estimated_time = match config.speed_profile(&response.vehicle) {
        Some(profile) => estimate_with_profile(Meters::new(path.distance), elevation, profile),
        None => {
            debug!("No speed profile for vehicle, using routing time");
            None
        }
    };

    let two_diff = elevation
        .map(|elevation| vec![elevation.sum_up, elevation.sum_down])
        .unwrap_or_default();

    debug!(
        points = coordinates.len(),
        surfaces = surface.len(),
        road_classes = road_class.len(),
        warnings = warnings.len(),
        estimated = estimated_time.is_some(),
        "Computed route stats"
    );

    Ok(RouteStats {
        time: estimated_time.unwrap_or(path.time),
        dist: path.distance,
        two_diff,
        details: RouteDetails {
            surface,
            road_class,
        },
        warnings,
    })
}
