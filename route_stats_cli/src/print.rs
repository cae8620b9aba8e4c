use comfy_table::{Table, presets::UTF8_FULL};
use jiff::SignedDuration;
use route_stats::{
    RouteStats,
    route::labeled_interval::Segment,
    stats::segment_aggregator::AggregatedAttributes,
};

pub fn print_stats(stats: &RouteStats) {
    let mut summary = Table::new();
    summary.load_preset(UTF8_FULL).set_header(vec!["Distance", "Time", "Ascent", "Descent"]);

    let (ascent, descent) = match stats.two_diff.as_slice() {
        [ascent, descent] => (format!("{ascent:.0} m"), format!("{descent:.0} m")),
        _ => (String::from("-"), String::from("-")),
    };
    summary.add_row(vec![
        format!("{:.2} km", stats.dist / 1000.0),
        format_time(stats.time),
        ascent,
        descent,
    ]);
    println!("{summary}");

    println!("{}", attributes_table("Surface", &stats.details.surface));
    println!("{}", attributes_table("Road class", &stats.details.road_class));

    if stats.warnings.is_empty() {
        return;
    }

    let mut warnings = Table::new();
    warnings
        .load_preset(UTF8_FULL)
        .set_header(vec!["Id", "Criticality", "Message", "Segments"]);

    let mut ids: Vec<_> = stats.warnings.keys().copied().collect();
    ids.sort();
    for id in ids {
        let warning = &stats.warnings[&id];
        warnings.add_row(vec![
            id.to_string(),
            format!("{:?}", warning.criticality),
            warning.message.clone().unwrap_or_default(),
            format_segments(&warning.segments),
        ]);
    }
    println!("{warnings}");
}

fn attributes_table(name: &str, attributes: &AggregatedAttributes) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![name, "Distance", "Segments"]);

    let mut rows: Vec<_> = attributes.iter().collect();
    rows.sort_by(|(_, a), (_, b)| b.distance.value().total_cmp(&a.distance.value()));

    for (label, attribute) in rows {
        table.add_row(vec![
            label.clone(),
            format!("{:.0} m", attribute.distance.value()),
            format_segments(&attribute.segments),
        ]);
    }

    table
}

fn format_time(millis: f64) -> String {
    let duration = SignedDuration::from_millis(millis.round() as i64);
    format!("{duration:#}")
}

fn format_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|[from, to]| format!("{from}-{to}"))
        .collect::<Vec<_>>()
        .join(", ")
}
