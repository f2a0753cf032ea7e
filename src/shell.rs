//! Shell-style tokenization of command lines
//!
//! Splits a curl invocation into words the way a POSIX shell would, including
//! quote grouping and backslash-newline line continuations. The "loose" mode
//! tolerates a missing closing quote, which matters when sniffing half-pasted
//! commands from a text field.

use crate::errors::{RecurlError, Result};

/// Tokenize a command line into shell words.
///
/// Quoting rules:
/// - Single quotes group literally; no escapes inside.
/// - Double quotes group; backslash escapes `"`, `\`, `$` and a backtick,
///   removes a following newline, and is kept literally otherwise.
/// - Outside quotes a backslash escapes the next character; backslash-newline
///   joins continuation lines.
///
/// With `loose` set, an unterminated quote yields the token accumulated up to
/// end of input instead of an error. A trailing backslash is an error in both
/// modes.
pub fn tokenize(input: &str, loose: bool) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut has_token = false;
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' if in_single_quote => {
                current.push(c);
            }
            '\\' if in_double_quote => match chars.next() {
                Some(next @ ('"' | '\\' | '$' | '`')) => current.push(next),
                Some('\n') => {}
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => {
                    return Err(RecurlError::Parse(
                        "Unterminated escape at end of input".to_string(),
                    ));
                }
            },
            '\\' => match chars.next() {
                Some('\n') => {}
                Some(next) => {
                    current.push(next);
                    has_token = true;
                }
                None => {
                    return Err(RecurlError::Parse(
                        "Unterminated escape at end of input".to_string(),
                    ));
                }
            },
            '\'' if !in_double_quote => {
                in_single_quote = !in_single_quote;
                has_token = true;
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
                has_token = true;
            }
            ' ' | '\t' | '\n' | '\r' if !in_single_quote && !in_double_quote => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            _ => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if (in_single_quote || in_double_quote) && !loose {
        return Err(RecurlError::Parse(
            "Unterminated quote in command".to_string(),
        ));
    }

    if has_token {
        tokens.push(current);
    }

    Ok(tokens)
}
