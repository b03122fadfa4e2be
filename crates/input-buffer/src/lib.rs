//! Input buffering for the parser front end.
//!
//! This crate turns a raw character stream into a canonical buffer and exposes
//! that buffer through [`SliceView`], a cheap, shareable window that the lexer
//! and grammar engine slice and re-slice without copying:
//! - [`normalize`] collapses `\r\n`, lone `\r` and lone `\n` into one `\n`,
//!   tagging every character with its [`Position`] in the canonical output
//! - [`read`], [`read_positioned`] and [`read_split`] materialize the three
//!   output shapes into views
//! - [`SliceView`] supports absolute and from-end ([`Index::FromEnd`]) bounds
//!   and compares structurally against any [`Elements`] sequence
//!
//! # Example
//!
//! ```
//! use input_buffer::{read, Index};
//!
//! let buf = read("let x\r\n= 1;".chars());
//! assert_eq!(buf, ['l', 'e', 't', ' ', 'x', '\n', '=', ' ', '1', ';']);
//!
//! let tail = buf.slice(Index::FromEnd(4)..);
//! assert_eq!(tail, ['=', ' ', '1', ';']);
//! ```

mod elements;
mod error;
mod index;
mod reader;
mod slice_view;

pub use elements::Elements;
pub use error::IndexError;
pub use index::Index;
pub use reader::{
    canonicalize, normalize, read, read_positioned, read_split, Normalize, NormalizedChars,
};
pub use slice_view::{Iter, SliceView};
pub use source_pos::{LineIndex, Location, Position};
