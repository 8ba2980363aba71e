use game_shelf_catalog::{GameRecord, normalize_title};
use serde::Serialize;

/// The part of a record that matching looks at.
///
/// Built fresh for every comparison and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparisonKey {
    pub external_id: Option<i64>,
    /// May be empty when the title is only punctuation.
    pub normalized_title: String,
}

impl ComparisonKey {
    pub fn new(external_id: Option<i64>, title: &str) -> Self {
        Self {
            external_id,
            normalized_title: normalize_title(title),
        }
    }

    pub fn from_record(record: &GameRecord) -> Self {
        Self::new(record.external_id, &record.title)
    }
}

/// Which rule decided that two records are the same game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// Both sides carry the same provider identifier.
    ExternalId,
    /// Normalized titles are equal.
    Title,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExternalId => "external id",
            Self::Title => "title",
        }
    }
}

/// Decide whether two keys refer to the same game, and by which rule.
///
/// Rules are tried in order and the first that applies wins:
/// 1. both identifiers present and equal
/// 2. normalized titles equal (two empty titles count as equal)
///
/// Present but different identifiers do not block the title rule.
pub fn match_method(x: &ComparisonKey, y: &ComparisonKey) -> Option<MatchMethod> {
    if let (Some(a), Some(b)) = (x.external_id, y.external_id) {
        if a == b {
            return Some(MatchMethod::ExternalId);
        }
    }
    if x.normalized_title == y.normalized_title {
        return Some(MatchMethod::Title);
    }
    None
}

/// Whether two keys refer to the same game.
pub fn matches(x: &ComparisonKey, y: &ComparisonKey) -> bool {
    match_method(x, y).is_some()
}

#[cfg(test)]
#[path = "tests/key_tests.rs"]
mod tests;
