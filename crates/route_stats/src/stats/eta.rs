use crate::{
    route::{meters::Meters, route_response::ElevationProfile},
    stats::speed_profile::VehicleSpeedProfile,
};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Travel time in milliseconds for `distance` with the given cumulated
/// ascent and descent.
///
/// Vertical and horizontal effort partially overlap: the smaller of the two
/// components only counts half.
pub fn estimate_travel_time(
    distance: Meters,
    ascend: Meters,
    descend: Meters,
    profile: &VehicleSpeedProfile,
) -> f64 {
    let vertical_time = (ascend / profile.up + descend / profile.down) * MILLIS_PER_HOUR;
    let horizontal_time = (distance / profile.horizontal) * MILLIS_PER_HOUR;

    if vertical_time > horizontal_time {
        horizontal_time / 2.0 + vertical_time
    } else {
        vertical_time / 2.0 + horizontal_time
    }
}

/// Estimated travel time, or `None` when the elevation totals are unknown.
pub fn estimate_with_profile(
    distance: Meters,
    elevation: Option<&ElevationProfile>,
    profile: &VehicleSpeedProfile,
) -> Option<f64> {
    elevation.map(|elevation| {
        estimate_travel_time(
            distance,
            Meters::new(elevation.sum_up),
            Meters::new(elevation.sum_down),
            profile,
        )
    })
}
