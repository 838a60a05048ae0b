use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::{
    config::{ErrorMode, LexOptions},
    errors::errors::{Error, ErrorImpl},
    source::split_lines,
    Position, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    scanners::{scan_identifier, scan_number, scan_punctuation, Lexeme},
    tokens::{KeywordTable, Token, TokenKind, RESERVED_KEYWORDS},
};

/// Tokens produced by a run together with every error it hit.
///
/// In fail-fast mode `errors` holds at most one entry.
#[derive(Debug, Clone, Default)]
pub struct LexReport {
    pub tokens: Vec<Token>,
    pub errors: Vec<Error>,
}

impl LexReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Vec<Token>, Vec<Error>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

pub struct Lexer<'k> {
    keywords: &'k KeywordTable,
    options: LexOptions,
    tokens: Vec<Token>,
    file: Rc<String>,
}

impl<'k> Lexer<'k> {
    pub fn new(keywords: &'k KeywordTable, options: LexOptions, file: Option<String>) -> Lexer<'k> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            keywords,
            options,
            tokens: vec![],
            file: file_name,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn options(&self) -> &LexOptions {
        &self.options
    }

    /// Tries punctuation, then identifiers (resolved against the keyword
    /// table), then numbers. The first match wins.
    fn scan(&self, cursor: &Cursor) -> Option<(TokenKind, Lexeme)> {
        scan_punctuation(cursor)
            .or_else(|| {
                scan_identifier(cursor)
                    .map(|lexeme| (self.keywords.resolve(&lexeme.literal), lexeme))
            })
            .or_else(|| scan_number(cursor).map(|lexeme| (TokenKind::Number, lexeme)))
    }

    /// Tokenizes one line, appending to the lexer's tokens.
    ///
    /// On an unrecognised character the tokens already pushed for this line
    /// are kept and the rest of the line is abandoned.
    pub fn lex_line(&mut self, line_num: usize, line: &str) -> Result<(), Error> {
        let line = if self.options.trim_lines { line.trim() } else { line };
        let chars: Vec<char> = line.chars().collect();
        let mut cursor = Cursor::new(&chars);

        debug!(line = line_num, len = chars.len(), "lexing line");

        while let Some(c) = cursor.peek() {
            if self.options.skip.skips(c) {
                cursor.advance();
                continue;
            }

            let col = cursor.pos();
            let Some((kind, lexeme)) = self.scan(&cursor) else {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedCharacter {
                        character: c,
                        remainder: cursor.remainder().iter().collect(),
                    },
                    Position::new(line_num, col, Rc::clone(&self.file)),
                ));
            };

            trace!(%kind, literal = %lexeme.literal, line = line_num, col, "token");
            cursor.advance_n(lexeme.len);
            self.push(MK_TOKEN!(kind, lexeme.literal, line_num, col));
        }

        Ok(())
    }

    /// Tokenizes every line, stopping the whole run at the first error.
    pub fn tokenize_lines<I, S>(mut self, lines: I) -> Result<Vec<Token>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (line_num, line) in lines.into_iter().enumerate() {
            self.lex_line(line_num, line.as_ref())?;
        }

        Ok(self.tokens)
    }

    /// Tokenizes every line, recording one error per failing line and
    /// resuming at the next line.
    pub fn tokenize_lines_collecting<I, S>(mut self, lines: I) -> LexReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut errors = vec![];

        for (line_num, line) in lines.into_iter().enumerate() {
            if let Err(error) = self.lex_line(line_num, line.as_ref()) {
                warn!(line = line_num, %error, "skipping rest of line");
                errors.push(error);
            }
        }

        LexReport {
            tokens: self.tokens,
            errors,
        }
    }
}

/// Tokenizes `lines` with the given table and options, honouring
/// `options.error_mode`.
pub fn tokenize_with<I, S>(
    lines: I,
    keywords: &KeywordTable,
    options: &LexOptions,
    file: Option<String>,
) -> LexReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lexer = Lexer::new(keywords, *options, file);

    match options.error_mode {
        ErrorMode::FailFast => match lexer.tokenize_lines(lines) {
            Ok(tokens) => LexReport {
                tokens,
                errors: vec![],
            },
            Err(error) => LexReport {
                tokens: vec![],
                errors: vec![error],
            },
        },
        ErrorMode::Collect => lexer.tokenize_lines_collecting(lines),
    }
}

/// Tokenizes a whole source text with the reserved keywords and default
/// options.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(&RESERVED_KEYWORDS, LexOptions::default(), file).tokenize_lines(split_lines(source))
}
