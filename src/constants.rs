//! Central constants for the multi-git application

/// Default values for Git operations
pub mod git {
    /// Version-control binary invoked in each repository
    pub const DEFAULT_PROGRAM: &str = "git";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name, looked up in the user's home directory
    pub const DEFAULT_CONFIG_FILE: &str = ".multi-git.yaml";

    /// Environment variable holding the base directory
    pub const ENV_ROOT: &str = "MG_ROOT";

    /// Environment variable holding the comma-separated repository names
    pub const ENV_REPOS: &str = "MG_REPOS";

    /// Separator between repository names in a single string
    pub const REPO_SEPARATOR: char = ',';

    /// Subdirectory of the output directory that holds saved runs
    pub const RUNS_DIR: &str = "runs";
}
