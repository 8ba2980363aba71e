//! YAML loading for collection files.
//!
//! A collection file is either a mapping with a `games` list:
//! ```yaml
//! name: Shelf
//! owner: sam
//! games:
//!   - title: Metroid Dread
//!     external_id: 1234
//!     platform: Switch
//! ```
//! or a bare sequence of games. Unknown top-level keys and empty files are
//! errors, so a typo never loads as an empty collection. Files in a directory are loaded in file-name
//! order.

use crate::types::{Collection, GameRecord};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("{0} contains no collection")]
    Empty(String),
    #[error("Game #{index} in {path} has an empty title")]
    EmptyTitle { path: String, index: usize },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Parse a collection from YAML text. `origin` names the source in errors.
///
/// The top-level shape picks the target type: a sequence is a bare list of
/// games, anything else must be a collection mapping. The text is then
/// deserialized again as that type so errors keep their field and position.
pub fn parse_collection(contents: &str, origin: &str) -> Result<Collection, YamlError> {
    let parse_err = |e| YamlError::Parse {
        path: origin.to_string(),
        source: e,
    };

    let has_content = contents.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !has_content {
        return Err(YamlError::Empty(origin.to_string()));
    }
    let shape: serde_yml::Value = serde_yml::from_str(contents).map_err(parse_err)?;

    let collection = match shape {
        serde_yml::Value::Null => return Err(YamlError::Empty(origin.to_string())),
        serde_yml::Value::Sequence(_) => {
            let games: Vec<GameRecord> = serde_yml::from_str(contents).map_err(parse_err)?;
            Collection::from_games(games)
        }
        _ => serde_yml::from_str::<Collection>(contents).map_err(parse_err)?,
    };

    if let Some(index) = collection
        .games
        .iter()
        .position(|g| g.title.trim().is_empty())
    {
        return Err(YamlError::EmptyTitle {
            path: origin.to_string(),
            index,
        });
    }

    Ok(collection)
}

/// Load a single collection file.
pub fn load_collection(path: &Path) -> Result<Collection, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_collection(&contents, &path.display().to_string())
}

/// Load every `.yaml`/`.yml` collection in a directory, sorted by file name.
///
/// A missing directory yields an empty list.
pub fn load_collections(dir: &Path) -> Result<Vec<Collection>, YamlError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    entries
        .iter()
        .map(|entry| load_collection(&entry.path()))
        .collect()
}
