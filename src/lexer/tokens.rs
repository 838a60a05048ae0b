use lazy_static::lazy_static;
use serde::{Serialize, Serializer};
use std::{collections::HashMap, fmt::Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::scanners::is_letter;

lazy_static! {
    /// The reserved words of the language, built once on first use.
    pub static ref RESERVED_KEYWORDS: KeywordTable = KeywordTable::default();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,

    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,

    Equals, // =
    Plus,
    Semicolon,
    Comma,

    // Reserved
    Let,
    Function,
}

impl TokenKind {
    /// Whether a keyword table may map a word to this kind.
    pub fn is_keyword(&self) -> bool {
        match self {
            TokenKind::Let | TokenKind::Function => true,
            TokenKind::Number
            | TokenKind::Identifier
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::OpenBrace
            | TokenKind::CloseBrace
            | TokenKind::Equals
            | TokenKind::Plus
            | TokenKind::Semicolon
            | TokenKind::Comma => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::OpenBrace => "OPEN_BRACE",
            TokenKind::CloseBrace => "CLOSE_BRACE",
            TokenKind::Equals => "EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Let => "LET",
            TokenKind::Function => "FUNCTION",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A classified, positioned fragment of one source line.
///
/// `literal` is never empty and always equals the code points of the
/// scanned line starting at `col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub line: usize,
    pub col: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {} {}", self.line, self.col, self.kind, self.literal)
    }
}

impl Token {
    /// Length of the literal in code points.
    pub fn len(&self) -> usize {
        self.literal.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.literal.is_empty()
    }

    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

/// Maps reserved words to their token kinds.
///
/// The table is immutable once built. The lexer borrows it for its whole
/// lifetime, so one table can be shared by any number of lexers.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    words: HashMap<String, TokenKind>,
}

impl KeywordTable {
    /// Builds a table from `(word, kind)` pairs.
    ///
    /// Every word must be a non-empty run of ASCII letters, otherwise the
    /// identifier scanner could never produce it, and must map to a keyword
    /// kind.
    pub fn new<I, S>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, TokenKind)>,
        S: Into<String>,
    {
        let mut words = HashMap::new();
        for (word, kind) in entries {
            let word = word.into();
            if word.is_empty() || !word.chars().all(is_letter) || !kind.is_keyword() {
                return Err(Error::new(
                    ErrorImpl::InvalidKeyword { word },
                    Position::null(),
                ));
            }
            words.insert(word, kind);
        }

        Ok(KeywordTable { words })
    }

    /// Returns the reserved kind for `literal`, or `Identifier`.
    pub fn resolve(&self, literal: &str) -> TokenKind {
        self.words
            .get(literal)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    pub fn is_reserved(&self, literal: &str) -> bool {
        self.words.contains_key(literal)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        let mut words = HashMap::new();
        words.insert(String::from("let"), TokenKind::Let);
        words.insert(String::from("fn"), TokenKind::Function);
        KeywordTable { words }
    }
}
