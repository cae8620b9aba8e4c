use fxhash::FxHashMap;
use geo_types::Coord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::route::{
    geometry::geodesic_length_between,
    labeled_interval::{LabeledInterval, Segment},
    meters::Meters,
};

/// Distance and index ranges covered by one detail value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct AggregatedAttribute {
    pub distance: Meters,
    pub segments: Vec<Segment>,
}

impl AggregatedAttribute {
    fn add(&mut self, segment: Segment, distance: Meters) {
        self.distance += distance;
        self.segments.push(segment);
    }
}

pub type AggregatedAttributes = FxHashMap<String, AggregatedAttribute>;

/// Groups `intervals` by label, summing the geodesic length of each
/// interval's part of the geometry.
pub fn aggregate_segments(
    intervals: &[LabeledInterval],
    coordinates: &[Coord],
) -> AggregatedAttributes {
    let mut aggregated = AggregatedAttributes::default();

    for interval in intervals {
        let Some(label) = interval.label() else {
            continue;
        };

        let distance = geodesic_length_between(coordinates, interval.from, interval.to);
        match aggregated.get_mut(label) {
            Some(attribute) => attribute.add(interval.segment(), distance),
            None => {
                let mut attribute = AggregatedAttribute::default();
                attribute.add(interval.segment(), distance);
                aggregated.insert(label.to_owned(), attribute);
            }
        }
    }

    aggregated
}
