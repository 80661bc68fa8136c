//! Line index over document text.
//!
//! Offsets and columns are measured in Unicode scalar values (`char`).
//! Lines are separated by `\n`; a preceding `\r` stays part of the line.

use crate::Position;

/// Pre-computed line starts for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Char offset of each line start. Always holds at least one entry.
    line_starts: Vec<usize>,
    /// Document length in chars.
    len: usize,
}

impl LineIndex {
    /// Builds the index in a single pass over `text`.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;

        for ch in text.chars() {
            len += 1;
            if ch == '\n' {
                line_starts.push(len);
            }
        }

        Self { line_starts, len }
    }

    /// Returns the document length in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of lines. An empty document has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the char offset where the 0-indexed `line` starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the length of the 0-indexed `line`, excluding its `\n`.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => self.len,
        };
        Some(end - start)
    }

    /// Converts a char offset into a 1-indexed position.
    ///
    /// `offset == len()` is valid and points just past the last char.
    pub fn position(&self, offset: usize) -> Option<Position> {
        if offset > self.len {
            return None;
        }

        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line];
        Some(Position::new(line as u32 + 1, column as u32 + 1))
    }
}
