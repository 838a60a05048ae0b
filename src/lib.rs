#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod source;

pub use config::{ErrorMode, LexOptions, SkipPolicy};
pub use lexer::{
    lexer::{tokenize, tokenize_with, LexReport, Lexer},
    tokens::{KeywordTable, Token, TokenKind, RESERVED_KEYWORDS},
};

/// Zero-indexed line and column (in code points) within a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: usize, col: usize, file: Rc<String>) -> Self {
        Position { line, col, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

/// Renders a diagnostic for `error`, pointing at the offending column of
/// `lines[position.line]`. The line is shown as the lexer scanned it, so it
/// is trimmed when `options.trim_lines` is set.
///
/// ```text
/// Error: UnrecognisedCharacter (`@` is not a letter, ...)
/// -> demo.monkey:2:8
///   |
/// 2 | let a = @;
///   | --------^
///   = unrecognised character '@', remaining text "@;" at line 2, col 8
/// ```
pub fn render_error<S: AsRef<str>>(error: &Error, lines: &[S], options: &LexOptions) -> String {
    let mut out = String::new();
    let position = error.get_position();

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    // Writing into a String cannot fail.
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}:{}:{}", position.file, position.line, position.col);

    if let Some(line_text) = lines.get(position.line) {
        let line_text = line_text.as_ref();
        let line_text = if options.trim_lines { line_text.trim() } else { line_text };

        let _ = writeln!(out, "{:>padding$}", "|");
        let _ = writeln!(out, "{} | {}", line_str, line_text);

        let arrows = position.col + 1;
        let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    }

    let _ = write!(out, "{:>padding$} {}", "=", error);

    out
}
