//! Game collection data model, title normalization, and YAML I/O.
//!
//! This crate defines what a game record and a collection look like without
//! any comparison logic. `game-shelf-compare` builds its matching keys from
//! these types and from [`title::normalize_title`].

pub mod title;
pub mod types;
pub mod yaml;

pub use title::{is_blank_after_normalization, normalize_title};
pub use types::*;
pub use yaml::{YamlError, load_collection, load_collections, parse_collection};
