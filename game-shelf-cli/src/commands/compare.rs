use std::collections::HashMap;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use game_shelf_catalog::{Collection, is_blank_after_normalization};
use game_shelf_compare::{
    CollectionComparison, CommonGame, ComparisonStats, MatchMethod, Partition, Placed, SortOrder,
    reconcile, select,
};

use crate::CliError;
use crate::cli_types::Show;
use crate::settings::CompareSettings;

use super::{log_stats_table, truncate_str};

/// Options for the compare command, after flags and settings are merged.
pub(crate) struct CompareOptions {
    pub a: PathBuf,
    pub b: PathBuf,
    pub show: Option<Show>,
    pub filter: Option<String>,
    pub sort: Option<SortOrder>,
    pub a_label: Option<String>,
    pub b_label: Option<String>,
    pub json: bool,
}

pub(crate) fn run_compare(
    options: CompareOptions,
    settings: &CompareSettings,
) -> Result<(), CliError> {
    let show = match options.show {
        Some(show) => show,
        None => parse_setting(settings.show.as_deref(), "show")?.unwrap_or_default(),
    };
    let sort = match options.sort {
        Some(sort) => sort,
        None => parse_setting(settings.sort.as_deref(), "sort")?.unwrap_or_default(),
    };

    let a = game_shelf_catalog::load_collection(&options.a)?;
    let b = game_shelf_catalog::load_collection(&options.b)?;

    let a_label = options
        .a_label
        .or_else(|| settings.a_label.clone())
        .unwrap_or_else(|| a.label("A").to_string());
    let b_label = options
        .b_label
        .or_else(|| settings.b_label.clone())
        .unwrap_or_else(|| b.label("B").to_string());

    warn_blank_titles(&a, &a_label);
    warn_blank_titles(&b, &b_label);

    let comparison = reconcile(&a.games, &b.games);

    if options.json {
        let view = ReportView {
            show,
            filter: options.filter.as_deref(),
            sort,
        };
        println!(
            "{}",
            render_json(&comparison, &view, &a_label, &b_label)?
        );
        return Ok(());
    }

    log::info!(
        "{} {} {}",
        a_label.if_supports_color(Stdout, |t| t.bold()),
        "vs".if_supports_color(Stdout, |t| t.dimmed()),
        b_label.if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  {} in common, {} only in {}, {} only in {}",
        comparison
            .common
            .len()
            .if_supports_color(Stdout, |t| t.green()),
        comparison
            .unique_to_a
            .len()
            .if_supports_color(Stdout, |t| t.yellow()),
        a_label,
        comparison
            .unique_to_b
            .len()
            .if_supports_color(Stdout, |t| t.yellow()),
        b_label,
    );

    for partition in show.partitions() {
        crate::log_blank();
        log_partition(
            &comparison,
            partition,
            options.filter.as_deref(),
            sort,
            &a_label,
            &b_label,
        );
    }

    crate::log_blank();
    log::info!("{}", "Statistics".if_supports_color(Stdout, |t| t.bold()));
    let a_col = truncate_str(&a_label, 10);
    let b_col = truncate_str(&b_label, 10);
    log_stats_table(&[
        (a_col.as_str(), &comparison.stats.a),
        (b_col.as_str(), &comparison.stats.b),
        ("Common", &comparison.stats.common),
    ]);

    Ok(())
}

/// Partition selection shared by the text and JSON reports.
pub(crate) struct ReportView<'f> {
    pub show: Show,
    pub filter: Option<&'f str>,
    pub sort: SortOrder,
}

/// JSON form of a comparison. Partitions left out by `--show` are omitted;
/// `stats` always cover the full collections, as in the text report.
#[derive(Serialize)]
struct JsonReport<'r, 'a> {
    a_label: &'r str,
    b_label: &'r str,
    #[serde(skip_serializing_if = "Option::is_none")]
    common: Option<Vec<CommonGame<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unique_to_a: Option<Vec<Placed<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unique_to_b: Option<Vec<Placed<'a>>>,
    stats: &'r ComparisonStats,
}

pub(crate) fn render_json(
    comparison: &CollectionComparison<'_>,
    view: &ReportView<'_>,
    a_label: &str,
    b_label: &str,
) -> Result<String, CliError> {
    let mut report = JsonReport {
        a_label,
        b_label,
        common: None,
        unique_to_a: None,
        unique_to_b: None,
        stats: &comparison.stats,
    };

    for partition in view.show.partitions() {
        let entries = select(comparison, partition, view.filter, view.sort);
        match partition {
            Partition::Common => {
                let by_a_index: HashMap<usize, &CommonGame<'_>> =
                    comparison.common.iter().map(|c| (c.a.index, c)).collect();
                report.common = Some(
                    entries
                        .iter()
                        .filter_map(|e| by_a_index.get(&e.index).map(|c| **c))
                        .collect(),
                );
            }
            Partition::OnlyA => report.unique_to_a = Some(entries),
            Partition::OnlyB => report.unique_to_b = Some(entries),
        }
    }

    Ok(serde_json::to_string_pretty(&report)?)
}

fn parse_setting<T: std::str::FromStr<Err = String>>(
    value: Option<&str>,
    name: &str,
) -> Result<Option<T>, CliError> {
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| CliError::config(format!("compare.{name}: {e}")))
        })
        .transpose()
}

fn warn_blank_titles(collection: &Collection, label: &str) {
    for game in &collection.games {
        if is_blank_after_normalization(&game.title) {
            log::warn!(
                "{}: title {:?} has nothing left after normalization and will match any other such title",
                label,
                game.title,
            );
        }
    }
}

fn log_partition(
    comparison: &CollectionComparison<'_>,
    partition: Partition,
    filter: Option<&str>,
    sort: SortOrder,
    a_label: &str,
    b_label: &str,
) {
    let heading = match partition {
        Partition::Common => "In both".to_string(),
        Partition::OnlyA => format!("Only in {a_label}"),
        Partition::OnlyB => format!("Only in {b_label}"),
    };
    let entries = select(comparison, partition, filter, sort);

    log::info!(
        "{} ({})",
        heading.if_supports_color(Stdout, |t| t.bold()),
        entries.len(),
    );
    if entries.is_empty() {
        log::info!("  {}", "(none)".if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }

    // Only common entries carry a match method, keyed by A's index.
    let methods: HashMap<usize, MatchMethod> = match partition {
        Partition::Common => comparison
            .common
            .iter()
            .map(|c| (c.a.index, c.method))
            .collect(),
        _ => HashMap::new(),
    };

    for entry in &entries {
        let method = methods.get(&entry.index).copied();
        log::info!("  {}", format_entry(entry, method));
    }
}

fn format_entry(entry: &Placed<'_>, method: Option<MatchMethod>) -> String {
    let record = entry.record;
    let mut line = record.title.clone();
    if let Some(ref platform) = record.platform {
        line.push_str(&format!(
            " [{}]",
            platform.if_supports_color(Stdout, |t| t.cyan())
        ));
    }
    if let Some(ref format) = record.format {
        line.push_str(&format!(" ({format})"));
    }
    if record.completed {
        line.push_str(&format!(
            " {}",
            "completed".if_supports_color(Stdout, |t| t.green())
        ));
    }
    if let Some(method) = method {
        line.push_str(&format!(
            " {}",
            format!("via {}", method.as_str()).if_supports_color(Stdout, |t| t.dimmed())
        ));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_shelf_catalog::GameRecord;

    fn shelves() -> (Vec<GameRecord>, Vec<GameRecord>) {
        let a = vec![
            GameRecord::new("Metroid Prime").with_platform("GameCube"),
            GameRecord::new("Metroid Dread").with_external_id(7),
            GameRecord::new("?!"),
            GameRecord::new("Hades"),
        ];
        let b = vec![
            GameRecord::new("Metroid Dread (Switch)").with_external_id(7),
            GameRecord::new("..."),
            GameRecord::new("Celeste"),
        ];
        (a, b)
    }

    fn titles(list: &serde_json::Value) -> Vec<&str> {
        list.as_array()
            .unwrap()
            .iter()
            .map(|e| {
                e.get("record")
                    .or_else(|| e["a"].get("record"))
                    .unwrap()["title"]
                    .as_str()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_json_report_is_valid_json() {
        let (a, b) = shelves();
        let comparison = reconcile(&a, &b);
        let view = ReportView {
            show: Show::All,
            filter: None,
            sort: SortOrder::Original,
        };
        let json = render_json(&comparison, &view, "Sam", "Alex").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["a_label"], "Sam");
        assert_eq!(value["b_label"], "Alex");
        assert_eq!(titles(&value["common"]), vec!["Metroid Dread", "?!"]);
        assert_eq!(value["common"][0]["method"], "external_id");
        assert_eq!(value["common"][1]["b_index"], 1);
        assert_eq!(titles(&value["unique_to_a"]), vec!["Metroid Prime", "Hades"]);
        assert_eq!(titles(&value["unique_to_b"]), vec!["Celeste"]);
        assert_eq!(value["stats"]["a"]["total"], 4);
    }

    #[test]
    fn test_json_report_honors_show_filter_and_sort() {
        let (a, b) = shelves();
        let comparison = reconcile(&a, &b);

        let view = ReportView {
            show: Show::One(Partition::OnlyA),
            filter: None,
            sort: SortOrder::Title,
        };
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&comparison, &view, "A", "B").unwrap()).unwrap();
        assert!(value.get("common").is_none());
        assert!(value.get("unique_to_b").is_none());
        assert_eq!(titles(&value["unique_to_a"]), vec!["Hades", "Metroid Prime"]);
        assert_eq!(value["unique_to_a"][1]["index"], 0);
        // Stats are never filtered.
        assert_eq!(value["stats"]["common"]["total"], 2);

        let view = ReportView {
            show: Show::One(Partition::Common),
            filter: Some("metroid"),
            sort: SortOrder::Original,
        };
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&comparison, &view, "A", "B").unwrap()).unwrap();
        assert_eq!(titles(&value["common"]), vec!["Metroid Dread"]);
        assert_eq!(value["common"][0]["a"]["index"], 1);
        assert_eq!(value["common"][0]["b_index"], 0);
    }
}
