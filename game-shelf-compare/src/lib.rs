//! Cross-collection matching and reconciliation.
//!
//! Pure engine crate: receives two in-memory collections, returns the games
//! they share, the games only one side owns, and per-set counts. No I/O and
//! no state between calls.

pub mod index;
pub mod key;
pub mod reconcile;
pub mod stats;
pub mod view;

pub use index::{KeyIndex, Probe};
pub use key::{ComparisonKey, MatchMethod, match_method, matches};
pub use reconcile::{CollectionComparison, CommonGame, Placed, reconcile};
pub use stats::{CollectionStats, ComparisonStats};
pub use view::{Partition, SortOrder, filter_by_title, select, sort_entries};
