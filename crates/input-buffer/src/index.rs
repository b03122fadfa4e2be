//! Absolute and from-end indices.

use std::fmt;

/// An index into a [`SliceView`](crate::SliceView).
///
/// `FromStart(i)` addresses position `i`. `FromEnd(n)` addresses position
/// `len - n`, so `FromEnd(0)` is one past the last element (useful as an open
/// upper bound) and `FromEnd(len)` is the first element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    /// Offset counted forward from the start of the view.
    FromStart(usize),
    /// Offset counted backward from the end of the view.
    FromEnd(usize),
}

impl Index {
    /// Resolves this index to an absolute position within a view of `len`
    /// elements.
    ///
    /// Returns `None` if a from-end anchor reaches before the start. A forward
    /// index is returned as-is; callers check it against their own bounds.
    #[inline]
    pub fn resolve(self, len: usize) -> Option<usize> {
        match self {
            Index::FromStart(i) => Some(i),
            Index::FromEnd(n) => len.checked_sub(n),
        }
    }
}

impl From<usize> for Index {
    #[inline]
    fn from(i: usize) -> Self {
        Index::FromStart(i)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::FromStart(i) => write!(f, "{i}"),
            Index::FromEnd(n) => write!(f, "^{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_start() {
        assert_eq!(Index::FromStart(3).resolve(5), Some(3));
        assert_eq!(Index::FromStart(9).resolve(5), Some(9));
    }

    #[test]
    fn test_resolve_from_end() {
        assert_eq!(Index::FromEnd(5).resolve(5), Some(0));
        assert_eq!(Index::FromEnd(1).resolve(5), Some(4));
        assert_eq!(Index::FromEnd(0).resolve(5), Some(5));
        assert_eq!(Index::FromEnd(6).resolve(5), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Index::from(2).to_string(), "2");
        assert_eq!(Index::FromEnd(1).to_string(), "^1");
    }
}
