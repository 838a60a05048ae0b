//! Character classification and the maximal-munch token scanners.
//!
//! Scanners take the cursor by shared reference and report either a match
//! starting under the cursor or `None`. They never move the cursor, so the
//! driver can try them one after another without undoing anything.

use super::{cursor::Cursor, tokens::TokenKind};

/// A matched run of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub literal: String,
    /// Length in code points.
    pub len: usize,
}

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn scan_run(cursor: &Cursor, pred: fn(char) -> bool) -> Option<Lexeme> {
    let len = cursor.run_length(pred);
    if len == 0 {
        return None;
    }

    Some(Lexeme {
        literal: cursor.slice(len),
        len,
    })
}

/// Longest run of letters under the cursor.
pub fn scan_identifier(cursor: &Cursor) -> Option<Lexeme> {
    scan_run(cursor, is_letter)
}

/// Longest run of decimal digits under the cursor.
pub fn scan_number(cursor: &Cursor) -> Option<Lexeme> {
    scan_run(cursor, is_digit)
}

pub fn punctuation_kind(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        '{' => Some(TokenKind::OpenBrace),
        '}' => Some(TokenKind::CloseBrace),
        '=' => Some(TokenKind::Equals),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        '+' => Some(TokenKind::Plus),
        _ => None,
    }
}

/// Exactly one punctuation code point; there are no multi-character
/// operators.
pub fn scan_punctuation(cursor: &Cursor) -> Option<(TokenKind, Lexeme)> {
    let c = cursor.peek()?;
    let kind = punctuation_kind(c)?;

    Some((
        kind,
        Lexeme {
            literal: c.to_string(),
            len: 1,
        },
    ))
}
