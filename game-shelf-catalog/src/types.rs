//! Data model types for game collections.
//!
//! These types describe what a collection file holds: an optional header
//! (name, owner) and an ordered list of game records. Records come from many
//! places (manual entry, provider search results, trending lists, bulk
//! imports) but are always normalized into the single [`GameRecord`] shape
//! before anything compares them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Game Record ─────────────────────────────────────────────────────────────

/// A single game owned by someone.
///
/// `title` is the only field guaranteed to be present. Everything other than
/// `external_id` and `title` is payload: comparison never looks at it, only
/// the statistics pass does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Identifier from a metadata provider. Absent for manual entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Physical/digital/etc. Free-form, compared verbatim when bucketing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub origin: RecordOrigin,
    /// Any other attributes, carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yml::Value>,
}

impl GameRecord {
    /// A manually entered record with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            external_id: None,
            title: title.into(),
            platform: None,
            format: None,
            completed: false,
            origin: RecordOrigin::Manual,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_external_id(mut self, id: i64) -> Self {
        self.external_id = Some(id);
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_origin(mut self, origin: RecordOrigin) -> Self {
        self.origin = origin;
        self
    }
}

/// Where a record came from before it was added to a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordOrigin {
    #[default]
    Manual,
    Search,
    Trending,
    Import,
}

// ── Collection ──────────────────────────────────────────────────────────────

/// One side of a comparison: an ordered list of owned games.
///
/// Unknown keys are rejected: a misspelled `games` must not load as an
/// empty collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl Collection {
    pub fn from_games(games: Vec<GameRecord>) -> Self {
        Self {
            name: None,
            owner: None,
            games,
        }
    }

    /// Human-readable label: the name, else the owner, else `fallback`.
    pub fn label<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name
            .as_deref()
            .or(self.owner.as_deref())
            .unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
