//! Launching the version-control binary inside one repository
//!
//! The binary gets the repository as an explicit working directory, so the
//! calling process never changes its own current directory. Standard output
//! and standard error share a single pipe, which keeps their lines in the
//! order the child wrote them.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Combined standard output and standard error
    pub output: String,
    /// Exit code, `None` when the child was killed by a signal
    pub code: Option<i32>,
}

impl Invocation {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run `program` with `args` in `dir`, capturing combined output.
///
/// Errors only when the process cannot be spawned or its output cannot be
/// read; a non-zero exit is reported through [`Invocation::code`].
pub fn run_in(program: &str, args: &[String], dir: &Path) -> io::Result<Invocation> {
    let (mut reader, writer) = io::pipe()?;

    let mut command = Command::new(program);
    command
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);

    let mut child = command.spawn()?;
    // The command still owns the write ends; drop them so reading sees EOF
    drop(command);

    let mut buf = Vec::new();
    let read = reader.read_to_end(&mut buf);
    // Reap the child even when reading failed; closing the read end first
    // keeps a child blocked on a full pipe from hanging the wait
    drop(reader);
    let status = child.wait()?;
    read?;

    Ok(Invocation {
        output: String::from_utf8_lossy(&buf).into_owned(),
        code: status.code(),
    })
}
