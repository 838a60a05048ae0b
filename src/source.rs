//! Line provider for source files.
//!
//! Lines come back in source order with their terminators (`\n` or `\r\n`)
//! removed. A trailing newline at the end of the file does not produce an
//! extra empty line.

use std::{fs, io, path::Path, str::Lines};

use tracing::debug;

pub fn split_lines(text: &str) -> Lines<'_> {
    text.lines()
}

pub fn read_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = split_lines(&content).map(String::from).collect();

    debug!(path = %path.display(), lines = lines.len(), "read source");
    Ok(lines)
}
