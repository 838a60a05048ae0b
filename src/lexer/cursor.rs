//! Position tracking over the code points of a single source line.
//!
//! The cursor never reads out of bounds: `peek` returns `None` at the end
//! of the line, so scanners cannot run past it.

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        Cursor { chars, pos: 0 }
    }

    /// Current column, in code points.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The code point under the cursor.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Moves forward by `n` code points, stopping at the end of the line.
    pub fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.chars.len());
    }

    /// Counts the code points from the cursor onward that satisfy `pred`.
    pub fn run_length(&self, pred: impl Fn(char) -> bool) -> usize {
        self.remainder().iter().take_while(|c| pred(**c)).count()
    }

    /// The unconsumed code points of the line.
    pub fn remainder(&self) -> &'a [char] {
        &self.chars[self.pos..]
    }

    /// The next `len` code points as a string, clamped to the line.
    pub fn slice(&self, len: usize) -> String {
        let end = self.pos.saturating_add(len).min(self.chars.len());
        self.chars[self.pos..end].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn test_peek_and_advance() {
        let chars: Vec<char> = "ab".chars().collect();
        let mut cursor = Cursor::new(&chars);

        assert_eq!(cursor.peek(), Some('a'));
        cursor.advance();
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.peek(), Some('b'));
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_advance_clamps_to_line_end() {
        let chars: Vec<char> = "abc".chars().collect();
        let mut cursor = Cursor::new(&chars);

        cursor.advance_n(usize::MAX);
        assert_eq!(cursor.pos(), 3);
        assert!(cursor.at_end());
        assert!(cursor.remainder().is_empty());
    }

    #[test]
    fn test_run_length_and_slice() {
        let chars: Vec<char> = "xyz12".chars().collect();
        let cursor = Cursor::new(&chars);

        let run = cursor.run_length(|c| c.is_ascii_alphabetic());
        assert_eq!(run, 3);
        assert_eq!(cursor.slice(run), "xyz");
        assert_eq!(cursor.slice(usize::MAX), "xyz12");
    }

    #[test]
    fn test_empty_line() {
        let chars: Vec<char> = Vec::new();
        let cursor = Cursor::new(&chars);

        assert!(cursor.at_end());
        assert_eq!(cursor.run_length(|_| true), 0);
    }
}
