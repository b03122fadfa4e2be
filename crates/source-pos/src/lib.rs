//! Source coordinates for the input-buffering front end.
//!
//! Positions are zero-based line/column pairs measured over the *canonical*
//! character buffer, i.e. after every line terminator has been collapsed into a
//! single `\n`. Locations pair two positions into a range, and the line index
//! recovers positions from plain character offsets.

mod line_index;
mod location;
mod position;

pub use line_index::LineIndex;
pub use location::Location;
pub use position::Position;
