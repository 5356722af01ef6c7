//! String sanitization for run directory names

/// Longest name kept for a run or repository directory
const MAX_NAME_LEN: usize = 50;

/// Sanitize a git command or repository label for use as a directory name
///
/// Filesystem-unsafe characters (including spaces and quotes) become underscores.
pub fn sanitize_for_filename(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            c if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' => c,
            _ => '_',
        })
        .take(MAX_NAME_LEN)
        .collect()
}
