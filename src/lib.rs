#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use crate::lexer::lexer::{tokenize, tokenize_spanned, tokenize_strict, Lexer};
pub use crate::lexer::tokens::{Spanned, Token};

/// Byte offset into a source, and the name of that source.
///
/// Offsets are `u32`: sources past 4 GiB saturate at `u32::MAX` instead of
/// wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte `position`.
///
/// Returns the 1-based line number, the line text (with its line break) and
/// the character column of `position` within that line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line.get(..pos - start)?.chars().count();
            return Some((index + 1, line.to_string(), column));
        }

        start = end;
    }

    None
}

/// Renders `error` against `source` with a caret under the offending column:
///
/// ```text
/// Error: UnrecognisedToken (Unrecognised character `@`)
/// -> input.monkey
///   |
/// 1 | let x = @;
///   | --------^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    Diagnostic { error, source }.to_string()
}

struct Diagnostic<'a> {
    error: &'a Error,
    source: &'a str,
}

impl Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let error = self.error;
        let position = error.get_position();

        if let ErrorTip::None = error.get_tip() {
            writeln!(f, "Error: {}", error.get_error_name())?;
        } else {
            writeln!(f, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
        }
        writeln!(f, "-> {}", position.1)?;

        let Some((line, line_text, line_pos)) = get_line_at_position(self.source, position.0)
        else {
            return Ok(());
        };

        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        writeln!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let removed = string.len() - trimmed.len();

    (trimmed, removed)
}
