use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_catalog::normalize_title;

pub(crate) fn run_normalize(titles: &[String]) {
    for title in titles {
        let normalized = normalize_title(title);
        if normalized.is_empty() {
            log::info!(
                "{} -> {}",
                title,
                "(empty)".if_supports_color(Stdout, |t| t.yellow()),
            );
        } else {
            log::info!(
                "{} -> {}",
                title,
                normalized.if_supports_color(Stdout, |t| t.cyan()),
            );
        }
    }
}
