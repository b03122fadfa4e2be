//! Line/column coordinates.

use std::fmt;

/// A line and column position (0-indexed).
///
/// Ordering is line-major, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// 0-indexed line number.
    pub line: usize,
    /// 0-indexed column, counted in characters of the canonical buffer.
    pub column: usize,
}

impl Position {
    /// Creates a new line/column position.
    #[inline]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the position one column to the right.
    ///
    /// Saturates at `usize::MAX` instead of wrapping back to column 0.
    #[inline]
    pub fn next_column(self) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_add(1),
        }
    }

    /// Returns the first column of the following line.
    ///
    /// Saturates at `usize::MAX` instead of wrapping back to line 0.
    #[inline]
    pub fn next_line(self) -> Self {
        Self {
            line: self.line.saturating_add(1),
            column: 0,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_line_major() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert!(Position::new(3, 0) > Position::new(2, 40));
        assert_eq!(Position::new(1, 1).cmp(&Position::new(1, 1)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_advance() {
        let pos = Position::new(4, 7);
        assert_eq!(pos.next_column(), Position::new(4, 8));
        assert_eq!(pos.next_line(), Position::new(5, 0));
    }

    #[test]
    fn test_advance_past_u32_range() {
        let wide = u32::MAX as usize;
        assert_eq!(Position::new(0, wide).next_column(), Position::new(0, wide + 1));
        assert_eq!(Position::new(wide, 3).next_line(), Position::new(wide + 1, 0));
    }

    #[test]
    fn test_advance_saturates() {
        let end = Position::new(usize::MAX, usize::MAX);
        assert_eq!(end.next_column(), end);
        assert_eq!(end.next_line(), Position::new(usize::MAX, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(12, 3).to_string(), "12:3");
    }
}
