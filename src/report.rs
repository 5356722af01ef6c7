//! Presenting and saving the result of a run

use crate::constants;
use crate::git::Logger;
use crate::runner::ExecutionResult;
use crate::utils::{
    ensure_directory_exists, get_exit_code_description, repo_label, sanitize_for_filename,
};
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One repository in JSON mode
#[derive(Debug, Serialize)]
struct RepoReport<'a> {
    repository: String,
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
    output: &'a str,
}

/// Whole run in JSON mode
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    command: &'a str,
    repositories: Vec<RepoReport<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ignored: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Print each repository's header and captured output, then any ignored failures
pub fn print_text(command: &str, result: &ExecutionResult) {
    let logger = Logger;

    for entry in result.outputs() {
        logger.header(&entry.path, command);
        println!("{}", entry.output);
    }

    for err in &result.ignored {
        if let Some(repo) = err.repository() {
            logger.warn(repo, &format!("ignored: {err}"));
        }
    }
}

/// Render the run as a pretty-printed JSON document
pub fn to_json(command: &str, result: &ExecutionResult) -> Result<String> {
    let report = RunReport {
        command,
        repositories: result
            .outputs()
            .iter()
            .map(|entry| RepoReport {
                repository: repo_label(&entry.path),
                path: &entry.path,
                exit_code: entry.exit_code,
                output: &entry.output,
            })
            .collect(),
        ignored: result.ignored.iter().map(|err| err.to_string()).collect(),
        error: result.error.as_ref().map(|err| err.to_string()),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Save every repository's output under `<output_dir>/runs/<timestamp>_<command>/`
///
/// Each repository gets its own subdirectory with `output.log` and a
/// `metadata.json`. Returns the run directory.
pub fn save_run(output_dir: &Path, command: &str, result: &ExecutionResult) -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    let run_dir = output_dir
        .join(constants::config::RUNS_DIR)
        .join(format!("{}_{}", timestamp, sanitize_for_filename(command)));
    ensure_directory_exists(&run_dir)?;

    for entry in result.outputs() {
        let repo_dir = run_dir.join(sanitize_for_filename(&repo_label(&entry.path)));
        ensure_directory_exists(&repo_dir)?;

        let metadata = serde_json::json!({
            "command": command,
            "repository": entry.path,
            "exit_code": entry.exit_code,
            "exit_code_description": entry
                .exit_code
                .map_or("terminated by signal", get_exit_code_description),
            "timestamp": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        std::fs::write(
            repo_dir.join("metadata.json"),
            serde_json::to_string_pretty(&metadata)?,
        )?;
        std::fs::write(repo_dir.join("output.log"), &entry.output)?;
    }

    Ok(run_dir)
}
