//! Error types for the repository-set executor

use crate::utils::get_exit_code_description;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building a repository set or running a command across it.
#[derive(Debug, Error)]
pub enum MultiGitError {
    /// The configured base directory does not exist.
    #[error("base dir: '{}' doesn't exist", .path.display())]
    BaseDirNotFound { path: PathBuf },

    /// No repository names were configured.
    #[error("repo list can't be empty")]
    EmptyRepoList,

    /// A repository name in the list is the empty string.
    #[error("repo name at position {index} can't be empty")]
    EmptyRepoName { index: usize },

    /// A repository name does not resolve to a directory below the base dir.
    #[error("repo name '{name}' at position {index} must be a path under the base dir")]
    InvalidRepoName { index: usize, name: String },

    /// The repository directory could not be entered at run time.
    #[error("repository '{}' is unreachable: {source}", .path.display())]
    RepositoryUnreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version-control binary could not be launched.
    #[error("failed to launch '{program}' in '{}': {source}", .path.display())]
    CommandInvocationFailed {
        program: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version-control binary ran and reported failure.
    #[error(
        "command failed in '{}' with exit code {} ({})",
        .path.display(),
        .code.map_or_else(|| "none".to_string(), |c| c.to_string()),
        .code.map_or("terminated by signal", get_exit_code_description)
    )]
    CommandExitedNonZero { path: PathBuf, code: Option<i32> },

    /// The command string has an opening quote with no closing quote.
    #[error("malformed command, unterminated quote: {command}")]
    MalformedCommand { command: String },
}

impl MultiGitError {
    /// The repository path this error belongs to, if it is a per-repository failure.
    pub fn repository(&self) -> Option<&std::path::Path> {
        match self {
            MultiGitError::RepositoryUnreachable { path, .. }
            | MultiGitError::CommandInvocationFailed { path, .. }
            | MultiGitError::CommandExitedNonZero { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, MultiGitError>;
