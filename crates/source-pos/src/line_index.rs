//! Line index for character offset ↔ line/column conversion.

use crate::Position;
use std::borrow::Borrow;

/// An index for converting between character offsets into a canonical buffer
/// and line/column positions.
///
/// The buffer is expected to use `\n` as its only line terminator, which is what
/// the normalizing reader produces. The index stores the offset of the start of
/// each line, enabling O(log n) lookups in both directions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Character offset of the start of each line.
    /// `line_starts[i]` is the offset where line `i` begins.
    line_starts: Vec<usize>,
    /// Total number of characters in the buffer.
    len: usize,
}

impl LineIndex {
    /// Creates a new line index from canonical characters.
    pub fn new<I>(chars: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<char>,
    {
        let mut line_starts = vec![0];
        let mut len = 0;

        for c in chars {
            let c: &char = c.borrow();
            len += 1;
            if *c == '\n' {
                line_starts.push(len);
            }
        }

        Self { line_starts, len }
    }

    /// Creates a line index over a canonical string.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars())
    }

    /// Returns the number of lines in the buffer.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the number of characters in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the indexed buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Converts a character offset to a line/column position.
    ///
    /// The offset one past the last character is accepted and maps to the end of
    /// the final line. Returns `None` for anything beyond that.
    pub fn position(&self, offset: usize) -> Option<Position> {
        if offset > self.len {
            return None;
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        let column = offset - self.line_starts[line];

        Some(Position::new(line, column))
    }

    /// Converts a line/column position to a character offset.
    ///
    /// Returns `None` if the line does not exist or the column runs past the
    /// line's terminator.
    pub fn offset(&self, pos: Position) -> Option<usize> {
        let start = *self.line_starts.get(pos.line)?;
        let offset = start.checked_add(pos.column)?;

        let limit = match self.line_starts.get(pos.line + 1) {
            // Up to and including the `\n` that ends this line.
            Some(&next) => next - 1,
            None => self.len,
        };

        (offset <= limit).then_some(offset)
    }

    /// Returns the character offset where a line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_line() {
        let index = LineIndex::from_text("hello world");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.position(0), Some(Position::new(0, 0)));
        assert_eq!(index.position(5), Some(Position::new(0, 5)));
        assert_eq!(index.position(11), Some(Position::new(0, 11)));
        assert_eq!(index.position(12), None);
    }

    #[test]
    fn test_multiple_lines() {
        let index = LineIndex::from_text("hello\nworld\nfoo");
        assert_eq!(index.line_count(), 3);

        // First line, including its terminator
        assert_eq!(index.position(0), Some(Position::new(0, 0)));
        assert_eq!(index.position(5), Some(Position::new(0, 5)));

        // Second line
        assert_eq!(index.position(6), Some(Position::new(1, 0)));
        assert_eq!(index.position(10), Some(Position::new(1, 4)));

        // Third line
        assert_eq!(index.position(12), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_offset_roundtrip() {
        let text = "hello\nworld\nfoo";
        let index = LineIndex::from_text(text);

        for offset in 0..=text.chars().count() {
            let pos = index.position(offset).unwrap();
            assert_eq!(index.offset(pos), Some(offset));
        }
    }

    #[test]
    fn test_offset_out_of_range() {
        let index = LineIndex::from_text("ab\ncd");
        assert_eq!(index.offset(Position::new(0, 2)), Some(2));
        assert_eq!(index.offset(Position::new(0, 3)), None);
        assert_eq!(index.offset(Position::new(1, 2)), Some(5));
        assert_eq!(index.offset(Position::new(1, 3)), None);
        assert_eq!(index.offset(Position::new(2, 0)), None);
    }

    #[test]
    fn test_line_start() {
        let index = LineIndex::from_text("hello\nworld\n");
        assert_eq!(index.line_start(0), Some(0));
        assert_eq!(index.line_start(1), Some(6));
        assert_eq!(index.line_start(2), Some(12));
        assert_eq!(index.line_start(3), None);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let index = LineIndex::from_text("é\nü");
        assert_eq!(index.len(), 3);
        assert_eq!(index.position(2), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_offset_rejects_huge_column() {
        let index = LineIndex::from_text("ab\ncd");
        assert_eq!(index.offset(Position::new(1, usize::MAX)), None);
        assert_eq!(index.offset(Position::new(0, u32::MAX as usize + 1)), None);
    }

    #[test]
    fn test_empty() {
        let index = LineIndex::new(std::iter::empty::<char>());
        assert!(index.is_empty());
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.position(0), Some(Position::new(0, 0)));
    }
}
