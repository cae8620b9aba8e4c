use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    route::labeled_interval::{LabeledInterval, Segment},
    stats::interval_merger::{interacting, merge_interval},
    warnings::{
        rules::WARNING_RULES,
        vehicle_class::VehicleClass,
        warning_rule::{Criticality, Language, RuleContext, Warning, WarningId, WarningRule},
    },
};

/// All occurrences of one warning on a route.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct AggregatedWarning {
    /// Absent when no translation exists for the requested language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub criticality: Criticality,
    pub segments: Vec<Segment>,
}

pub type AggregatedWarnings = FxHashMap<WarningId, AggregatedWarning>;

pub fn compute_warnings(
    vehicle: VehicleClass,
    road_classes: &[LabeledInterval],
    surfaces: &[LabeledInterval],
    language: Option<Language>,
) -> AggregatedWarnings {
    compute_warnings_with_rules(WARNING_RULES, vehicle, road_classes, surfaces, language)
}

/// Evaluates `rules` on every overlap of a road class and a surface
/// interval and groups the matches by warning id.
///
/// Each matching overlap adds its index range to the warning, ranges are
/// kept even when they overlap previous ones.
pub fn compute_warnings_with_rules(
    rules: &[WarningRule],
    vehicle: VehicleClass,
    road_classes: &[LabeledInterval],
    surfaces: &[LabeledInterval],
    language: Option<Language>,
) -> AggregatedWarnings {
    let mut warnings = AggregatedWarnings::default();

    for road_class in road_classes {
        if interacting(road_class, surfaces).next().is_none() {
            continue;
        }

        let matched = merge_interval(
            road_class,
            surfaces,
            |road_class, surface| {
                let context = RuleContext {
                    language,
                    vehicle,
                    road_class: road_class.label(),
                    surface: surface.label(),
                };

                rules
                    .iter()
                    .filter_map(|rule| rule.evaluate(&context))
                    .collect::<Vec<Warning>>()
            },
            |_| Vec::new(),
        );

        for interval in matched.into_iter().filter(|i| !i.label.is_empty()) {
            let segment = interval.segment();
            for warning in interval.label {
                add_warning(&mut warnings, warning, segment);
            }
        }
    }

    debug!(
        %vehicle,
        warnings = warnings.len(),
        "Evaluated route warnings"
    );

    warnings
}

fn add_warning(warnings: &mut AggregatedWarnings, warning: Warning, segment: Segment) {
    warnings
        .entry(warning.id)
        .or_insert_with(|| AggregatedWarning {
            message: warning.message,
            criticality: warning.criticality,
            segments: Vec::new(),
        })
        .segments
        .push(segment);
}
