//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The matched source text
/// * `$line` - Zero-indexed line number
/// * `$col` - Zero-indexed column, in code points
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 0, 8);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $line:expr, $col:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            line: $line,
            col: $col,
        }
    };
}
