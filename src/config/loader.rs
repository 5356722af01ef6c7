//! Configuration file loading

use crate::constants;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Repository names as written in the config file: a YAML list or one comma-separated string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RepoNames {
    List(Vec<String>),
    Joined(String),
}

impl RepoNames {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            RepoNames::List(names) => names,
            RepoNames::Joined(joined) => split_repo_names(&joined),
        }
    }
}

/// Split a comma-separated repository list, trimming whitespace around each name.
///
/// An empty string is an empty list. Empty entries are kept so that
/// validation can reject them.
pub fn split_repo_names(joined: &str) -> Vec<String> {
    if joined.trim().is_empty() {
        return Vec::new();
    }
    joined
        .split(constants::config::REPO_SEPARATOR)
        .map(|name| name.trim().to_string())
        .collect()
}

/// Contents of a `.multi-git.yaml` file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Base directory holding the repositories
    #[serde(default)]
    pub root: Option<String>,
    /// Repository directory names under the base directory
    #[serde(default)]
    pub repos: Option<RepoNames>,
    #[serde(default)]
    pub ignore_errors: Option<bool>,
    /// Version-control binary to run instead of `git`
    #[serde(default)]
    pub git: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Find and load the config file.
    ///
    /// An explicitly requested file must exist. Without one, the default file in
    /// the home directory is used when present and skipped otherwise.
    pub fn discover(explicit: Option<&Path>) -> Result<Option<Self>> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("config file doesn't exist: {}", path.display());
            }
            return Self::load(path).map(Some);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path).map(Some),
            _ => Ok(None),
        }
    }
}

/// `$HOME/.multi-git.yaml`, if a home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(constants::config::DEFAULT_CONFIG_FILE))
}
