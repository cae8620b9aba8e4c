use tracing::debug;

use crate::route::labeled_interval::LabeledInterval;

/// Intervals of `others` sharing more than an endpoint with `primary`.
pub fn interacting<'a, L, S>(
    primary: &'a LabeledInterval<L>,
    others: &'a [LabeledInterval<S>],
) -> impl Iterator<Item = &'a LabeledInterval<S>> + 'a {
    others
        .iter()
        .filter(move |other| primary.interacts_with(*other))
}

/// Splits `primary` along the intervals of `secondaries` it interacts with.
///
/// Each overlap becomes the intersection of both intervals, labeled with
/// `merge_fn`. Whatever part of `primary` no secondary covers gets the label
/// of `default_fn`, extending the previous interval when it carries the
/// same label. The output always covers `[primary.from, primary.to]`.
pub fn merge_interval<L, S, M, F, D>(
    primary: &LabeledInterval<L>,
    secondaries: &[LabeledInterval<S>],
    merge_fn: F,
    default_fn: D,
) -> Vec<LabeledInterval<M>>
where
    M: PartialEq,
    F: Fn(&LabeledInterval<L>, &LabeledInterval<S>) -> M,
    D: Fn(&LabeledInterval<L>) -> M,
{
    let mut merged: Vec<LabeledInterval<M>> = Vec::new();
    let mut cursor = primary.from;

    for secondary in interacting(primary, secondaries) {
        let from = primary.from.max(secondary.from);
        let to = primary.to.min(secondary.to);

        if from > cursor {
            fill(&mut merged, cursor, from, default_fn(primary));
        }

        merged.push(LabeledInterval::new(
            from,
            to,
            merge_fn(primary, secondary),
        ));
        cursor = cursor.max(to);
    }

    if cursor < primary.to || merged.is_empty() {
        fill(&mut merged, cursor, primary.to, default_fn(primary));
    }

    merged
}

fn fill<M: PartialEq>(merged: &mut Vec<LabeledInterval<M>>, from: usize, to: usize, label: M) {
    match merged.last_mut() {
        Some(last) if last.to == from && last.label == label => last.to = to,
        _ => merged.push(LabeledInterval::new(from, to, label)),
    }
}

/// Combines road classes with track types, `path` on a `grade4` track
/// becomes `path_grade4`.
///
/// Only road classes listed in `mergeable` are combined, all others pass
/// through unchanged.
pub fn merge_road_classes(
    road_classes: &[LabeledInterval],
    track_types: &[LabeledInterval],
    mergeable: &[String],
) -> Vec<LabeledInterval> {
    let merged: Vec<LabeledInterval> = road_classes
        .iter()
        .flat_map(|road_class| match road_class.label() {
            Some(label) if mergeable.iter().any(|m| m == label) => merge_interval(
                road_class,
                track_types,
                |road_class, track_type| match (road_class.label(), track_type.label()) {
                    (Some(road_class), Some(track_type)) => {
                        Some(format!("{road_class}_{track_type}"))
                    }
                    _ => road_class.label.clone(),
                },
                |road_class| road_class.label.clone(),
            ),
            _ => vec![road_class.clone()],
        })
        .collect();

    debug!(
        road_classes = road_classes.len(),
        merged = merged.len(),
        "Merged road classes with track types"
    );

    merged
}
