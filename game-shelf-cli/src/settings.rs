//! Read-only CLI settings.
//!
//! Defaults for the compare command live in
//! `~/.config/game-shelf/settings.toml`:
//!
//! ```toml
//! [compare]
//! a_label = "Me"
//! b_label = "Friend"
//! sort = "title"
//! show = "common"
//! ```
//!
//! Command-line flags always win over the file. The file is never written.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub compare: CompareSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CompareSettings {
    pub a_label: Option<String>,
    pub b_label: Option<String>,
    pub sort: Option<String>,
    pub show: Option<String>,
}

/// Canonical settings path: `~/.config/game-shelf/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("game-shelf").join("settings.toml")
}

/// Load settings from `path`, or from the default location.
///
/// A missing file is not an error. An explicit path that doesn't exist is.
pub(crate) fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (settings_path(), false),
    };

    if !path.exists() {
        if explicit {
            return Err(CliError::config(format!(
                "settings file not found: {}",
                path.display()
            )));
        }
        log::debug!("No settings file at {}", path.display());
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    parse_settings(&contents)
        .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
}

fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}
