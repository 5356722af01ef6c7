//! Resolved run settings
//!
//! Command-line values (which also cover `MG_ROOT` and `MG_REPOS`) win over
//! the config file, which wins over built-in defaults.

use super::ConfigFile;
use crate::constants;
use crate::runner::RepositorySet;
use anyhow::Result;
use std::path::PathBuf;

/// Values taken from the command line or its bound environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub root: Option<String>,
    pub repos: Option<Vec<String>>,
    /// Only ever turns the policy on; an absent flag defers to the config file
    pub ignore_errors: bool,
}

/// Everything the executor needs, resolved once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: Option<PathBuf>,
    pub repos: Vec<String>,
    pub ignore_errors: bool,
    pub program: String,
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: Option<ConfigFile>) -> Self {
        let file = file.unwrap_or_default();

        let root = overrides
            .root
            .filter(|root| !root.is_empty())
            .or(file.root)
            .map(PathBuf::from);

        let repos = overrides
            .repos
            .or_else(|| file.repos.map(|repos| repos.into_vec()))
            .unwrap_or_default();

        Self {
            root,
            repos,
            ignore_errors: overrides.ignore_errors || file.ignore_errors.unwrap_or(false),
            program: file
                .git
                .unwrap_or_else(|| constants::git::DEFAULT_PROGRAM.to_string()),
        }
    }

    /// Build the validated repository set these settings describe
    pub fn repository_set(&self) -> Result<RepositorySet> {
        let Some(root) = &self.root else {
            anyhow::bail!(
                "base directory is not configured: use --root, set {}, or add `root` to the config file",
                constants::config::ENV_ROOT
            );
        };

        let set = RepositorySet::new(root, &self.repos, self.ignore_errors)?
            .with_program(self.program.clone());
        Ok(set)
    }
}
