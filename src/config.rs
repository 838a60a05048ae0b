//! Lexer options.
//!
//! The defaults reproduce the original behaviour: only spaces and
//! backslashes are skipped, the first bad character ends the run, and lines
//! are scanned untrimmed.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown skip policy {value:?}, expected `strict` or `whitespace`")]
    UnknownSkipPolicy { value: String },
    #[error("unknown error mode {value:?}, expected `fail-fast` or `collect`")]
    UnknownErrorMode { value: String },
}

/// Which code points the driver passes over without emitting a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Space and backslash only.
    #[default]
    Strict,
    /// Any Unicode whitespace, plus backslash.
    Whitespace,
}

impl SkipPolicy {
    pub fn skips(&self, c: char) -> bool {
        match self {
            SkipPolicy::Strict => c == ' ' || c == '\\',
            SkipPolicy::Whitespace => c.is_whitespace() || c == '\\',
        }
    }
}

impl FromStr for SkipPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(SkipPolicy::Strict),
            "whitespace" => Ok(SkipPolicy::Whitespace),
            _ => Err(ConfigError::UnknownSkipPolicy {
                value: s.to_string(),
            }),
        }
    }
}

impl Display for SkipPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipPolicy::Strict => write!(f, "strict"),
            SkipPolicy::Whitespace => write!(f, "whitespace"),
        }
    }
}

/// What the driver does when no scanner matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Stop the whole run at the first unrecognised character.
    #[default]
    FailFast,
    /// Record the error, drop the rest of that line and carry on with the
    /// next one.
    Collect,
}

impl FromStr for ErrorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail-fast" | "failfast" => Ok(ErrorMode::FailFast),
            "collect" => Ok(ErrorMode::Collect),
            _ => Err(ConfigError::UnknownErrorMode {
                value: s.to_string(),
            }),
        }
    }
}

impl Display for ErrorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorMode::FailFast => write!(f, "fail-fast"),
            ErrorMode::Collect => write!(f, "collect"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexOptions {
    pub skip: SkipPolicy,
    pub error_mode: ErrorMode,
    /// Trim surrounding whitespace from each line before scanning. Columns
    /// are then relative to the trimmed line.
    pub trim_lines: bool,
}
