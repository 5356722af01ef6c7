//! Common test support utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A temporary base directory holding test repositories
pub struct Workspace {
    pub root: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn repo_path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Create a plain directory that is not a git repository
    pub fn plain_dir(&self, name: &str) -> PathBuf {
        let path = self.repo_path(name);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create a freshly initialized repository without commits
    pub fn fresh_repo(&self, name: &str) -> PathBuf {
        let path = self.plain_dir(name);
        init_git_repo(&path).expect("Failed to initialize git repo");
        path
    }

    /// Create a repository with one initial commit
    pub fn committed_repo(&self, name: &str) -> PathBuf {
        let path = self.fresh_repo(name);
        commit_file(&path, "README.md", "# Test Repository").expect("Failed to commit");
        path
    }

    /// Write a config file into the workspace and return its path
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.root.path().join("multi-git.yaml");
        fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}

fn git(path: &Path, args: &[&str]) -> std::io::Result<()> {
    let output = Command::new("git").args(args).current_dir(path).output()?;
    if !output.status.success() {
        return Err(std::io::Error::other(format!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        )));
    }
    Ok(())
}

/// Initialize a git repository with a local identity so commits work
pub fn init_git_repo(path: &Path) -> std::io::Result<()> {
    git(path, &["init"])?;
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    Ok(())
}

/// Write a file and commit it
pub fn commit_file(path: &Path, file: &str, content: &str) -> std::io::Result<()> {
    fs::write(path.join(file), content)?;
    git(path, &["add", "-A"])?;
    git(path, &["commit", "-m", "added files"])?;
    Ok(())
}

/// Run the multi-git binary with the given arguments and environment.
///
/// `HOME` points at the workspace so a developer's own config file is never
/// picked up, and colors are turned off.
pub fn run_cli(workspace: &Workspace, args: &[&str], envs: &[(&str, &str)]) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_multi-git"));
    cmd.args(args)
        .current_dir(workspace.path())
        .env_remove("MG_ROOT")
        .env_remove("MG_REPOS")
        .env("HOME", workspace.path())
        .env("NO_COLOR", "1");
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("Failed to execute multi-git");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
