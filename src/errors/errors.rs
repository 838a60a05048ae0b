use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::InvalidKeyword { .. } => "InvalidKeyword",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character, .. } => ErrorTip::Suggestion(format!(
                "`{}` is not a letter, digit, space or one of ( ) {{ }} = , ; +",
                character.escape_debug()
            )),
            ErrorImpl::InvalidKeyword { word } => ErrorTip::Suggestion(format!(
                "Keyword `{}` must be made of ASCII letters and map to a keyword kind",
                word
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => write!(
                f,
                "{} at line {}, col {}",
                self.internal_error, self.position.line, self.position.col
            ),
            ErrorImpl::InvalidKeyword { .. } => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character {character:?}, remaining text {remainder:?}")]
    UnrecognisedCharacter { character: char, remainder: String },
    #[error("invalid keyword {word:?}")]
    InvalidKeyword { word: String },
}
