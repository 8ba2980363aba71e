//! Presentation helpers over a finished comparison.
//!
//! Sorting and filtering never re-run matching: they only reorder or hide
//! entries that [`crate::reconcile()`] already produced.

use std::str::FromStr;

use game_shelf_catalog::normalize_title;

use crate::reconcile::{CollectionComparison, Placed};

/// Which partition of a comparison to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Common,
    OnlyA,
    OnlyB,
}

impl Partition {
    pub const ALL: [Partition; 3] = [Partition::Common, Partition::OnlyA, Partition::OnlyB];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::OnlyA => "only-a",
            Self::OnlyB => "only-b",
        }
    }

    /// Entries of this partition, each placed in its own source collection.
    pub fn entries<'a>(&self, comparison: &CollectionComparison<'a>) -> Vec<Placed<'a>> {
        match self {
            Self::Common => comparison.common.iter().map(|c| c.a).collect(),
            Self::OnlyA => comparison.unique_to_a.clone(),
            Self::OnlyB => comparison.unique_to_b.clone(),
        }
    }
}

impl FromStr for Partition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "common" | "both" | "shared" => Ok(Self::Common),
            "only-a" | "a" | "left" => Ok(Self::OnlyA),
            "only-b" | "b" | "right" => Ok(Self::OnlyB),
            other => Err(format!("unknown partition: {other}")),
        }
    }
}

/// How entries are ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Source collection order.
    #[default]
    Original,
    /// Alphabetical by normalized title, ties broken by source position.
    Title,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "original" | "none" => Ok(Self::Original),
            "title" | "alpha" | "alphabetical" => Ok(Self::Title),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Keep entries whose title contains `needle`, ignoring case.
///
/// An empty or whitespace-only needle keeps everything.
pub fn filter_by_title<'a>(entries: &[Placed<'a>], needle: &str) -> Vec<Placed<'a>> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|e| e.record.title.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

/// Reorder entries in place.
pub fn sort_entries(entries: &mut [Placed<'_>], order: SortOrder) {
    match order {
        SortOrder::Original => entries.sort_by_key(|e| e.index),
        SortOrder::Title => {
            entries.sort_by_cached_key(|e| (normalize_title(&e.record.title), e.index))
        }
    }
}

/// Select, filter and sort one partition in one go.
pub fn select<'a>(
    comparison: &CollectionComparison<'a>,
    partition: Partition,
    filter: Option<&str>,
    order: SortOrder,
) -> Vec<Placed<'a>> {
    let entries = partition.entries(comparison);
    let mut entries = match filter {
        Some(needle) => filter_by_title(&entries, needle),
        None => entries,
    };
    sort_entries(&mut entries, order);
    entries
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
