use geo::{Distance, Geodesic};
use geo_types::{Coord, LineString, Point};
use tracing::warn;

use crate::{error::RouteStatsError, route::meters::Meters};

pub const DEFAULT_POLYLINE_MULTIPLIER: f64 = 1e5;

/// Decodes a Google encoded polyline into `(lon, lat)` coordinates.
pub fn decode_polyline(encoded: &str, multiplier: f64) -> Result<Vec<Coord>, RouteStatsError> {
    let precision = multiplier.log10().round();
    if !precision.is_finite()
        || precision < 0.0
        || (10f64.powf(precision) - multiplier).abs() > multiplier * 1e-9
    {
        return Err(RouteStatsError::InvalidMultiplier(multiplier));
    }

    let line_string: LineString = polyline::decode_polyline(encoded, precision as u32)
        .map_err(|error| RouteStatsError::InvalidPolyline(error.to_string()))?;

    Ok(line_string.0)
}

/// Geodesic length of the polyline visiting `coordinates` in order, on the
/// WGS84 ellipsoid.
pub fn geodesic_length(coordinates: &[Coord]) -> Meters {
    coordinates
        .windows(2)
        .map(|pair| Meters::new(Geodesic.distance(Point(pair[0]), Point(pair[1]))))
        .sum()
}

/// Geodesic length of the inclusive index range `[from, to]`.
///
/// Indices past the end of the geometry are clamped.
pub fn geodesic_length_between(coordinates: &[Coord], from: usize, to: usize) -> Meters {
    let Some(last) = coordinates.len().checked_sub(1) else {
        return Meters::ZERO;
    };

    if to > last {
        warn!(
            from,
            to,
            points = coordinates.len(),
            "Interval exceeds route geometry, clamping"
        );
    }

    let to = to.min(last);
    if from >= to {
        return Meters::ZERO;
    }

    geodesic_length(&coordinates[from..=to])
}
