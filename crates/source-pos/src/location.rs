//! Position ranges.

use crate::Position;
use std::cmp::Ordering;
use std::fmt;

/// A range between two positions.
///
/// `from` never comes after `to`. A location built from a single position is a
/// point (`from == to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Where the range begins.
    pub from: Position,
    /// Where the range ends.
    pub to: Position,
}

impl Location {
    /// Creates a location spanning `from..to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` comes after `to`.
    #[inline]
    pub fn new(from: Position, to: Position) -> Self {
        assert!(from <= to, "location starts at {from} but ends at {to}");
        Self { from, to }
    }

    /// Creates a point location at the given position.
    #[inline]
    pub fn at(pos: Position) -> Self {
        Self { from: pos, to: pos }
    }

    /// Returns true if this location starts and ends at the same position.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if this location contains the given position.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.from <= pos && pos < self.to
    }

    /// Returns a location covering both this location and another.
    #[inline]
    pub fn cover(self, other: Location) -> Location {
        Location {
            from: std::cmp::min(self.from, other.from),
            to: std::cmp::max(self.to, other.to),
        }
    }

    /// Compares two locations by their endpoints.
    ///
    /// A point location compares equal to everything. Otherwise a location whose
    /// endpoints are both at or after the other's is greater, one whose endpoints
    /// are both at or before is less, a nested location is less than the range
    /// around it, and a location containing the other is greater.
    ///
    /// This is not a total order, which is why `Location` does not implement
    /// `Ord`. Identical ranges are each greater than the other, and a point
    /// receiver is equal to ranges that are not equal to each other.
    pub fn compare(&self, other: &Location) -> Ordering {
        if self.from == self.to {
            return Ordering::Equal;
        }
        if self.from >= other.from && self.to >= other.to {
            return Ordering::Greater;
        }
        if self.from <= other.from && self.to <= other.to {
            return Ordering::Less;
        }
        if self.from >= other.from && self.to <= other.to {
            return Ordering::Less;
        }
        if self.from <= other.from && self.to >= other.to {
            return Ordering::Greater;
        }
        Ordering::Equal
    }
}

impl From<Position> for Location {
    fn from(pos: Position) -> Self {
        Self::at(pos)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}
