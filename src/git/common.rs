//! Shared helpers for reporting git runs

use crate::utils::repo_label;
use colored::*;
use std::path::Path;

/// Logger for per-repository messages with consistent formatting
///
/// Each line is prefixed with the repository's directory name in cyan/bold.
/// Headers go to stdout with the captured output, warnings to stderr.
///
/// ## Example
///
/// ```rust,no_run
/// use multi_git::git::Logger;
/// use std::path::Path;
///
/// let logger = Logger::default();
/// logger.header(Path::new("/src/api"), "status");
/// logger.warn(Path::new("/src/web"), "skipped");
/// ```
#[derive(Default)]
pub struct Logger;

impl Logger {
    /// Print the `[repo]: git <command>` line that precedes a repository's output
    pub fn header(&self, repo: &Path, command: &str) {
        println!("[{}]: git {}", repo_label(repo).cyan().bold(), command);
    }

    pub fn warn(&self, repo: &Path, msg: &str) {
        eprintln!("{} | {}", repo_label(repo).cyan().bold(), msg.yellow());
    }
}
