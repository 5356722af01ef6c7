//! Running one git command across a set of repositories
//!
//! A [`RepositorySet`] is built from a base directory and repository names,
//! validated up front, and then runs a command string in every repository in
//! configuration order. With `ignore_errors` off the first failure stops the
//! run; with it on, failures are collected and the run goes on.

use crate::constants;
use crate::error::{MultiGitError, Result};
use crate::git;
use crate::tokenizer::tokenize;
use crate::utils::{absolute_path, normalize_path, stays_below};
use std::path::{Path, PathBuf};

/// Captured output of one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoOutput {
    /// Absolute repository path
    pub path: PathBuf,
    /// Combined standard output and standard error of the command
    pub output: String,
    /// Exit code of the command, `None` if it was killed by a signal
    pub exit_code: Option<i32>,
}

/// Result of running a command across a repository set
#[derive(Debug, Default)]
pub struct ExecutionResult {
    outputs: Vec<RepoOutput>,
    /// Failure that stopped the run, if any
    pub error: Option<MultiGitError>,
    /// Failures skipped because errors were ignored
    pub ignored: Vec<MultiGitError>,
}

impl ExecutionResult {
    /// Output captured for a repository, if it was attempted
    pub fn output(&self, path: &Path) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|entry| entry.path == path)
            .map(|entry| entry.output.as_str())
    }

    /// Outputs in execution order
    pub fn outputs(&self) -> &[RepoOutput] {
        &self.outputs
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Validated, ordered set of repositories plus the failure policy
#[derive(Debug, Clone)]
pub struct RepositorySet {
    repositories: Vec<PathBuf>,
    ignore_errors: bool,
    program: String,
}

impl RepositorySet {
    /// Build a repository set from a base directory and repository names.
    ///
    /// The base directory is made absolute against the current working
    /// directory and normalized, and that normalized path must exist. Each name
    /// must be a relative path that ends up strictly below the base directory;
    /// the resolved paths keep the given order.
    pub fn new<P, S>(base_dir: P, repo_names: &[S], ignore_errors: bool) -> Result<Self>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let input = base_dir.as_ref();
        let not_found = || MultiGitError::BaseDirNotFound {
            path: input.to_path_buf(),
        };
        if input.as_os_str().is_empty() {
            return Err(not_found());
        }
        // The stored paths are lexical, so the lexical form is what must exist
        let base_dir = absolute_path(input).map_err(|_| not_found())?;
        if !base_dir.exists() {
            return Err(not_found());
        }

        if repo_names.is_empty() {
            return Err(MultiGitError::EmptyRepoList);
        }

        let mut repositories = Vec::with_capacity(repo_names.len());
        for (index, name) in repo_names.iter().enumerate() {
            let name = name.as_ref();
            if name.is_empty() {
                return Err(MultiGitError::EmptyRepoName { index });
            }
            if !stays_below(Path::new(name)) {
                return Err(MultiGitError::InvalidRepoName {
                    index,
                    name: name.to_string(),
                });
            }
            repositories.push(normalize_path(&base_dir.join(name)));
        }

        Ok(Self {
            repositories,
            ignore_errors,
            program: constants::git::DEFAULT_PROGRAM.to_string(),
        })
    }

    /// Use a different version-control binary than `git`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Absolute repository paths in execution order
    pub fn repositories(&self) -> &[PathBuf] {
        &self.repositories
    }

    pub fn ignore_errors(&self) -> bool {
        self.ignore_errors
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `command` in every repository, in order.
    ///
    /// Each attempted repository gets an output entry, including ones whose
    /// command exited non-zero. Unreachable repositories and launch failures
    /// get none.
    pub fn run(&self, command: &str) -> ExecutionResult {
        let mut result = ExecutionResult::default();

        let args = match tokenize(command) {
            Ok(args) => args,
            Err(err) => {
                result.error = Some(err);
                return result;
            }
        };

        for repo in &self.repositories {
            if let Err(err) = self.run_one(repo, &args, &mut result.outputs) {
                if self.ignore_errors {
                    result.ignored.push(err);
                } else {
                    result.error = Some(err);
                    break;
                }
            }
        }

        result
    }

    fn run_one(&self, repo: &Path, args: &[String], outputs: &mut Vec<RepoOutput>) -> Result<()> {
        check_reachable(repo)?;

        let invocation = git::run_in(&self.program, args, repo).map_err(|source| {
            MultiGitError::CommandInvocationFailed {
                program: self.program.clone(),
                path: repo.to_path_buf(),
                source,
            }
        })?;

        let success = invocation.success();
        let exit_code = invocation.code;
        outputs.push(RepoOutput {
            path: repo.to_path_buf(),
            output: invocation.output,
            exit_code,
        });

        if success {
            Ok(())
        } else {
            Err(MultiGitError::CommandExitedNonZero {
                path: repo.to_path_buf(),
                code: exit_code,
            })
        }
    }
}

/// A repository is reachable when it is a directory the process may enter.
///
/// Resolving `<dir>/.` needs search permission on the directory, the same
/// access `current_dir` needs at spawn, and nothing more.
fn check_reachable(repo: &Path) -> Result<()> {
    let unreachable = |source: std::io::Error| MultiGitError::RepositoryUnreachable {
        path: repo.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(repo).map_err(unreachable)?;
    if !metadata.is_dir() {
        return Err(unreachable(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }
    std::fs::metadata(repo.join(".")).map_err(unreachable)?;
    Ok(())
}
