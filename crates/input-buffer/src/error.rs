//! Error types.

use crate::Index;
use thiserror::Error;

/// Direct element access resolved outside the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for view of length {len}")]
pub struct IndexError {
    /// The index as the caller supplied it.
    pub index: Index,
    /// Length of the view at the time of access.
    pub len: usize,
}

impl IndexError {
    /// Creates a new index error.
    pub fn new(index: Index, len: usize) -> Self {
        Self { index, len }
    }
}
