//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use game_shelf_compare::{Partition, SortOrder};

#[derive(Parser)]
#[command(name = "game-shelf")]
#[command(about = "Compare game collections", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ~/.config/game-shelf/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compare two collection files
    Compare {
        /// Collection A (its copies represent shared games)
        a: PathBuf,

        /// Collection B
        b: PathBuf,

        /// Which games to list: all, common, only-a, only-b
        #[arg(short, long)]
        show: Option<Show>,

        /// Only list games whose title contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,

        /// List order: original or title
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Label for collection A (defaults to its name, owner, or "A")
        #[arg(long)]
        a_label: Option<String>,

        /// Label for collection B (defaults to its name, owner, or "B")
        #[arg(long)]
        b_label: Option<String>,

        /// Print the comparison as JSON instead of text (honors --show,
        /// --filter and --sort; stats always cover the full collections)
        #[arg(long)]
        json: bool,
    },

    /// Show counts for a single collection file
    Stats {
        /// Collection file
        file: PathBuf,
    },

    /// Print the normalized comparison form of titles
    Normalize {
        /// Titles to normalize
        #[arg(required = true)]
        titles: Vec<String>,
    },
}

/// Which partitions the compare command lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Show {
    #[default]
    All,
    One(Partition),
}

impl Show {
    pub(crate) fn partitions(&self) -> Vec<Partition> {
        match self {
            Self::All => Partition::ALL.to_vec(),
            Self::One(p) => vec![*p],
        }
    }
}

impl FromStr for Show {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<Partition>().map(Self::One)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_parses_all_and_partitions() {
        assert_eq!("all".parse::<Show>(), Ok(Show::All));
        assert_eq!("ALL".parse::<Show>(), Ok(Show::All));
        assert_eq!("only-b".parse::<Show>(), Ok(Show::One(Partition::OnlyB)));
        assert!("nothing".parse::<Show>().is_err());
    }

    #[test]
    fn test_show_partitions() {
        assert_eq!(Show::All.partitions().len(), 3);
        assert_eq!(
            Show::One(Partition::Common).partitions(),
            vec![Partition::Common]
        );
    }

    #[test]
    fn test_cli_parses_compare() {
        let cli = Cli::try_parse_from([
            "game-shelf",
            "compare",
            "mine.yaml",
            "theirs.yaml",
            "--show",
            "common",
            "--sort",
            "title",
            "--filter",
            "zelda",
        ])
        .unwrap();
        match cli.command {
            Commands::Compare {
                show, sort, filter, json, ..
            } => {
                assert_eq!(show, Some(Show::One(Partition::Common)));
                assert_eq!(sort, Some(SortOrder::Title));
                assert_eq!(filter.as_deref(), Some("zelda"));
                assert!(!json);
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_normalize_requires_titles() {
        assert!(Cli::try_parse_from(["game-shelf", "normalize"]).is_err());
    }
}
