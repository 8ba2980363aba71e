//! Partition two collections into shared and one-sided games.
//!
//! Collection A is the reference side: shared games are reported once,
//! using A's copy, in A's order. Each side is indexed once by
//! [`KeyIndex`] and the other side probes it, so the whole pass is linear in
//! the combined size of both collections.

use game_shelf_catalog::GameRecord;
use serde::Serialize;

use crate::index::KeyIndex;
use crate::key::{ComparisonKey, MatchMethod};
use crate::stats::{CollectionStats, ComparisonStats};

/// A record together with its position in the collection it came from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Placed<'a> {
    pub index: usize,
    pub record: &'a GameRecord,
}

/// A game both collections own, represented by A's record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommonGame<'a> {
    pub a: Placed<'a>,
    /// Position in B of the first record that matched under `method`.
    pub b_index: usize,
    pub method: MatchMethod,
}

impl<'a> CommonGame<'a> {
    pub fn record(&self) -> &'a GameRecord {
        self.a.record
    }
}

/// Result of comparing collection A against collection B.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionComparison<'a> {
    pub common: Vec<CommonGame<'a>>,
    pub unique_to_a: Vec<Placed<'a>>,
    pub unique_to_b: Vec<Placed<'a>>,
    pub stats: ComparisonStats,
}

impl<'a> CollectionComparison<'a> {
    /// A's records for the shared games, in A's order.
    pub fn common_records(&self) -> Vec<&'a GameRecord> {
        self.common.iter().map(|c| c.a.record).collect()
    }

    /// B's copy of each shared game, in the same order as [`Self::common`].
    ///
    /// `b` must be the slice this comparison was built from. Returns `None`
    /// when its length differs from the one recorded in the stats.
    pub fn common_counterparts(&self, b: &'a [GameRecord]) -> Option<Vec<&'a GameRecord>> {
        if b.len() != self.stats.b.total {
            return None;
        }
        self.common.iter().map(|c| b.get(c.b_index)).collect()
    }

    /// Number of B records that matched something in A.
    pub fn matched_b_count(&self) -> usize {
        self.stats.b.total - self.unique_to_b.len()
    }
}

/// Compare two collections.
///
/// Every record in `a` ends up in exactly one of `common` or `unique_to_a`;
/// every record in `b` either matched something in `a` or is in
/// `unique_to_b`. Duplicates on either side never duplicate output entries.
/// Output lists keep the source order.
pub fn reconcile<'a>(a: &'a [GameRecord], b: &'a [GameRecord]) -> CollectionComparison<'a> {
    let a_keys: Vec<ComparisonKey> = a.iter().map(ComparisonKey::from_record).collect();
    let b_keys: Vec<ComparisonKey> = b.iter().map(ComparisonKey::from_record).collect();

    let a_index = KeyIndex::from_keys(&a_keys);
    let b_index = KeyIndex::from_keys(&b_keys);

    log::debug!(
        "reconcile: A has {} records ({} ids, {} titles), B has {} records ({} ids, {} titles)",
        a_index.len(),
        a_index.external_id_count(),
        a_index.title_count(),
        b_index.len(),
        b_index.external_id_count(),
        b_index.title_count(),
    );

    let mut common = Vec::new();
    let mut unique_to_a = Vec::new();
    for (index, (record, key)) in a.iter().zip(&a_keys).enumerate() {
        let placed = Placed { index, record };
        match b_index.probe(key) {
            Some(hit) => common.push(CommonGame {
                a: placed,
                b_index: hit.index,
                method: hit.method,
            }),
            None => unique_to_a.push(placed),
        }
    }

    let unique_to_b: Vec<Placed<'a>> = b
        .iter()
        .zip(&b_keys)
        .enumerate()
        .filter(|(_, (_, key))| a_index.probe(key).is_none())
        .map(|(index, (record, _))| Placed { index, record })
        .collect();

    let stats = ComparisonStats {
        a: CollectionStats::from_records(a),
        b: CollectionStats::from_records(b),
        common: CollectionStats::from_records(common.iter().map(|c| c.a.record)),
    };

    log::debug!(
        "reconcile: {} common, {} only in A, {} only in B",
        common.len(),
        unique_to_a.len(),
        unique_to_b.len(),
    );

    CollectionComparison {
        common,
        unique_to_a,
        unique_to_b,
        stats,
    }
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
