use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_compare::CollectionStats;

use crate::CliError;

use super::log_stats_table;

pub(crate) fn run_stats(file: &Path) -> Result<(), CliError> {
    let collection = game_shelf_catalog::load_collection(file)?;
    let stats = CollectionStats::from_records(&collection.games);
    let label = collection.label("Collection");

    log::info!(
        "{}",
        format!("Collection Statistics: {label}").if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  File: {}", file.display());
    if let Some(pct) = stats.completion_percent() {
        log::info!("  Completed: {:.1}%", pct);
    }
    crate::log_blank();
    log_stats_table(&[(label, &stats)]);

    Ok(())
}
