//! Lexical analysis module.
//!
//! This module contains the lexer that converts source lines into a stream
//! of tokens for a parser. It handles:
//!
//! - Character classification and maximal-munch scanning
//! - Resolution of reserved words against a keyword table
//! - Token position tracking (zero-indexed line and column)
//! - Skipping of spaces and backslash continuation markers
//!
//! Tokens never span lines; each line is scanned on its own.

pub mod cursor;
pub mod lexer;
pub mod scanners;
pub mod tokens;
