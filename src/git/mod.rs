//! Git operations using the system git binary
//!
//! ## Sub-modules
//!
//! - [`command`]: launching the binary in a repository directory
//!   - `run_in()` - Run with an explicit working directory, capturing combined output
//!
//! - [`common`]: Shared utilities and helpers
//!   - `Logger` - Consistent per-repository output lines

pub mod command;
pub mod common;

pub use command::{Invocation, run_in};
pub use common::Logger;
