//! Utility modules for common functionality

pub mod exit_codes;
pub mod filesystem;
pub mod sanitizers;

// Re-export commonly used functions
pub use exit_codes::get_exit_code_description;
pub use filesystem::{
    absolute_path, ensure_directory_exists, normalize_path, repo_label, stays_below,
};
pub use sanitizers::sanitize_for_filename;
