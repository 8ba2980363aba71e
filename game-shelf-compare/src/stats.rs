//! Per-collection aggregate counts.

use std::collections::BTreeMap;

use game_shelf_catalog::GameRecord;
use serde::Serialize;

/// Counts over a set of records, computed in a single pass.
///
/// Records without a platform or format simply don't land in a bucket, so
/// bucket sums can be lower than `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    pub by_platform: BTreeMap<String, usize>,
    pub by_format: BTreeMap<String, usize>,
    pub completed: usize,
}

impl CollectionStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a GameRecord>,
    {
        let mut stats = Self::default();
        for record in records {
            stats.add(record);
        }
        stats
    }

    fn add(&mut self, record: &GameRecord) {
        self.total += 1;
        if let Some(ref platform) = record.platform {
            *self.by_platform.entry(platform.clone()).or_default() += 1;
        }
        if let Some(ref format) = record.format {
            *self.by_format.entry(format.clone()).or_default() += 1;
        }
        if record.completed {
            self.completed += 1;
        }
    }

    /// Count for one platform, zero if absent.
    pub fn platform_count(&self, platform: &str) -> usize {
        self.by_platform.get(platform).copied().unwrap_or(0)
    }

    /// Count for one format, zero if absent.
    pub fn format_count(&self, format: &str) -> usize {
        self.by_format.get(format).copied().unwrap_or(0)
    }

    /// Completed share in percent, `None` for an empty set.
    pub fn completion_percent(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.completed as f64 * 100.0 / self.total as f64)
        }
    }
}

/// Stats for both sides and for the shared set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonStats {
    pub a: CollectionStats,
    pub b: CollectionStats,
    pub common: CollectionStats,
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
