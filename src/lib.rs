//! multi-git - run one git command across several repositories

pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod report;
pub mod runner;
pub mod tokenizer;
pub mod utils;

// Re-export commonly used types
pub use config::{ConfigFile, Overrides, Settings};
pub use error::MultiGitError;
pub use runner::{ExecutionResult, RepoOutput, RepositorySet};
pub use tokenizer::tokenize;
