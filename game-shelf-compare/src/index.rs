//! Key index for probing one side of a comparison.
//!
//! Indexes a collection once by external identifier and once by normalized
//! title so each record on the other side costs two hash lookups instead of
//! a scan.

use std::collections::HashMap;

use crate::key::{ComparisonKey, MatchMethod};

/// A probe hit: where the counterpart lives and which rule found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Index of the first matching record on the indexed side.
    pub index: usize,
    pub method: MatchMethod,
}

/// An indexed view of one collection's comparison keys.
pub struct KeyIndex {
    /// External id → first position holding it
    by_external_id: HashMap<i64, usize>,
    /// Normalized title → first position holding it
    by_title: HashMap<String, usize>,
    len: usize,
}

impl KeyIndex {
    /// Build an index over `keys`, keeping the earliest position for
    /// duplicate ids and titles.
    pub fn from_keys(keys: &[ComparisonKey]) -> Self {
        let mut by_external_id = HashMap::with_capacity(keys.len());
        let mut by_title = HashMap::with_capacity(keys.len());

        for (i, key) in keys.iter().enumerate() {
            if let Some(id) = key.external_id {
                by_external_id.entry(id).or_insert(i);
            }
            by_title.entry(key.normalized_title.clone()).or_insert(i);
        }

        Self {
            by_external_id,
            by_title,
            len: keys.len(),
        }
    }

    /// Find a counterpart for `key`.
    ///
    /// An identifier hit wins over a title hit. This answers "does any
    /// indexed record match", which is exactly what pairwise
    /// [`crate::key::matches`] over every indexed record would answer.
    pub fn probe(&self, key: &ComparisonKey) -> Option<Probe> {
        if let Some(id) = key.external_id {
            if let Some(&index) = self.by_external_id.get(&id) {
                return Some(Probe {
                    index,
                    method: MatchMethod::ExternalId,
                });
            }
        }

        self.by_title
            .get(&key.normalized_title)
            .map(|&index| Probe {
                index,
                method: MatchMethod::Title,
            })
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct identifiers in the index.
    pub fn external_id_count(&self) -> usize {
        self.by_external_id.len()
    }

    /// Number of distinct normalized titles in the index.
    pub fn title_count(&self) -> usize {
        self.by_title.len()
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
