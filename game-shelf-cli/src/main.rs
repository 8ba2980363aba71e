//! game-shelf CLI
//!
//! Command-line interface for comparing game collections.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands};
use commands::compare::{CompareOptions, run_compare};
use commands::normalize::run_normalize;
use commands::stats::run_stats;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose, logs_to_stderr(&cli.command));

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Compare {
            a,
            b,
            show,
            filter,
            sort,
            a_label,
            b_label,
            json,
        } => {
            let settings = settings::load_settings(cli.config.as_deref())?;
            run_compare(
                CompareOptions {
                    a,
                    b,
                    show,
                    filter,
                    sort,
                    a_label,
                    b_label,
                    json,
                },
                &settings.compare,
            )
        }
        Commands::Stats { file } => run_stats(&file),
        Commands::Normalize { titles } => {
            run_normalize(&titles);
            Ok(())
        }
    }
}

/// Whether stdout is reserved for machine-readable output, so log lines
/// (warnings, debug) must go to stderr instead.
fn logs_to_stderr(command: &Commands) -> bool {
    matches!(command, Commands::Compare { json: true, .. })
}

/// Install the logger that also carries normal command output.
///
/// Info lines print bare to stdout, or to stderr when `to_stderr` is set.
/// `--verbose` adds timestamps and debug messages, `--quiet` keeps only
/// warnings and errors. `RUST_LOG` overrides both.
fn init_logging(quiet: bool, verbose: bool, to_stderr: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(if to_stderr {
            env_logger::Target::Stderr
        } else {
            env_logger::Target::Stdout
        });

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        });
    }

    builder.init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
