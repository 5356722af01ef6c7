//! Command-line tokenizer
//!
//! Splits a command string on spaces into the argument vector handed to the
//! version-control binary. A word that starts with a double quote opens a
//! quoted span that runs until a word ending in a double quote; the span is
//! emitted as one token, taken verbatim from the input so inner runs of
//! spaces survive, quotes included.

use crate::error::{MultiGitError, Result};

const DELIMITER: char = ' ';
const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InQuotes,
}

/// Tokenize a command string into arguments.
///
/// Returns [`MultiGitError::MalformedCommand`] when a quoted span is never closed.
pub fn tokenize(command: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut state = State::Normal;
    // Byte offset of the word being scanned, if any
    let mut word_start: Option<usize> = None;

    let mut chars = command.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match state {
            State::Normal => match c {
                DELIMITER => {
                    if let Some(start) = word_start.take() {
                        tokens.push(command[start..i].to_string());
                    }
                }
                QUOTE if word_start.is_none() => {
                    word_start = Some(i);
                    state = State::InQuotes;
                }
                _ => {
                    word_start.get_or_insert(i);
                }
            },
            State::InQuotes => {
                let at_word_end = matches!(chars.peek(), None | Some((_, DELIMITER)));
                if c == QUOTE && at_word_end {
                    if let Some(start) = word_start.take() {
                        tokens.push(command[start..=i].to_string());
                    }
                    state = State::Normal;
                }
            }
        }
    }

    if state == State::InQuotes {
        return Err(MultiGitError::MalformedCommand {
            command: command.to_string(),
        });
    }

    if let Some(start) = word_start {
        tokens.push(command[start..].to_string());
    }

    Ok(tokens)
}
