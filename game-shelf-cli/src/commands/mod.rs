pub(crate) mod compare;
pub(crate) mod normalize;
pub(crate) mod stats;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_compare::CollectionStats;

/// Log per-set counts side by side, one column per labelled set.
pub(crate) fn log_stats_table(columns: &[(&str, &CollectionStats)]) {
    let header: String = columns.iter().map(|(label, _)| format!("{label:>10}")).collect();
    log::info!(
        "  {:<18}{}",
        "",
        header.if_supports_color(Stdout, |t| t.bold()),
    );

    log_row("Total", columns, |s| s.total);
    log_row("Completed", columns, |s| s.completed);

    let mut platforms: Vec<&String> = columns
        .iter()
        .flat_map(|&(_, s)| s.by_platform.keys())
        .collect();
    platforms.sort();
    platforms.dedup();
    for platform in platforms {
        log_row(
            &format!("Platform {}", truncate_str(platform, 9)),
            columns,
            |s| s.platform_count(platform),
        );
    }

    let mut formats: Vec<&String> = columns
        .iter()
        .flat_map(|&(_, s)| s.by_format.keys())
        .collect();
    formats.sort();
    formats.dedup();
    for format in formats {
        log_row(
            &format!("Format {}", truncate_str(format, 11)),
            columns,
            |s| s.format_count(format),
        );
    }
}

fn log_row(
    name: &str,
    columns: &[(&str, &CollectionStats)],
    value: impl Fn(&CollectionStats) -> usize,
) {
    let cells: String = columns
        .iter()
        .map(|&(_, s)| format!("{:>10}", value(s)))
        .collect();
    log::info!("  {:<18}{}", name, cells);
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}
