//! Configuration management module

pub mod loader;
pub mod settings;

pub use loader::{ConfigFile, RepoNames, default_config_path, split_repo_names};
pub use settings::{Overrides, Settings};
