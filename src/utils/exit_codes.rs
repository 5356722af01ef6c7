//! Exit code descriptions for the version-control binary

/// Get a human-readable description for a git exit code
///
/// Git reports `fatal:` conditions (such as running outside a repository)
/// with 128 and option parsing errors with 129.
pub fn get_exit_code_description(exit_code: i32) -> &'static str {
    match exit_code {
        0 => "success",
        1 => "general error",
        126 => "command invoked cannot execute",
        127 => "command not found",
        128 => "fatal error",
        129 => "usage error",
        130 => "terminated by Control-C",
        131..=255 => "terminated by signal",
        _ => "error",
    }
}
