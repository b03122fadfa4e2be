//! Line-ending normalization with canonical coordinates.
//!
//! `\r\n`, a lone `\r` and a lone `\n` each become exactly one `\n`. Every
//! emitted character carries the position it occupies in the normalized output,
//! so coordinates never drift on CRLF input.

use crate::SliceView;
use source_pos::Position;
use std::iter::FusedIterator;
use tracing::debug;

/// Whether the previous input character was a carriage return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Normal,
    SeenCr,
}

/// Lazily normalizes a character stream, yielding `(Position, char)` pairs.
///
/// Works on unbounded sources; nothing is buffered beyond the one-character
/// carriage-return lookbehind.
#[derive(Debug, Clone)]
pub struct Normalize<I> {
    chars: I,
    state: LineState,
    pos: Position,
}

impl<I: Iterator<Item = char>> Normalize<I> {
    /// Starts normalizing `chars` at line 0, column 0.
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            state: LineState::Normal,
            pos: Position::default(),
        }
    }

    /// Returns the position the next emitted character will occupy.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Drops the positions and yields only the canonical characters.
    pub fn chars(self) -> NormalizedChars<I> {
        NormalizedChars { inner: self }
    }
}

impl<I: Iterator<Item = char>> Iterator for Normalize<I> {
    type Item = (Position, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.chars.next()?;
            let at = self.pos;

            match (c, self.state) {
                ('\r', _) => {
                    self.pos = at.next_line();
                    self.state = LineState::SeenCr;
                    return Some((at, '\n'));
                }
                // Second half of a CRLF; its newline was already emitted.
                ('\n', LineState::SeenCr) => {
                    self.state = LineState::Normal;
                }
                ('\n', LineState::Normal) => {
                    self.pos = at.next_line();
                    return Some((at, '\n'));
                }
                (c, _) => {
                    self.pos = at.next_column();
                    self.state = LineState::Normal;
                    return Some((at, c));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.chars.size_hint();
        (lower / 2, upper)
    }
}

impl<I: FusedIterator<Item = char>> FusedIterator for Normalize<I> {}

/// Canonical characters of a [`Normalize`] stream, without positions.
#[derive(Debug, Clone)]
pub struct NormalizedChars<I> {
    inner: Normalize<I>,
}

impl<I: Iterator<Item = char>> NormalizedChars<I> {
    /// Returns the position the next emitted character will occupy.
    #[inline]
    pub fn position(&self) -> Position {
        self.inner.position()
    }
}

impl<I: Iterator<Item = char>> Iterator for NormalizedChars<I> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        self.inner.next().map(|(_, c)| c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: FusedIterator<Item = char>> FusedIterator for NormalizedChars<I> {}

/// Normalizes a character source lazily, pairing each canonical character with
/// its position.
pub fn normalize<S>(source: S) -> Normalize<S::IntoIter>
where
    S: IntoIterator<Item = char>,
{
    Normalize::new(source.into_iter())
}

/// Normalizes a string into its canonical form.
pub fn canonicalize(text: &str) -> String {
    normalize(text.chars()).chars().collect()
}

/// Reads a finite source into a view over its canonical characters.
pub fn read<S>(source: S) -> SliceView<char>
where
    S: IntoIterator<Item = char>,
{
    let mut chars = normalize(source).chars();
    let buf: Vec<char> = chars.by_ref().collect();
    debug!(
        chars = buf.len(),
        lines = chars.position().line.saturating_add(1),
        "read canonical buffer"
    );
    SliceView::new(buf)
}

/// Reads a finite source into a view of `(Position, char)` pairs.
pub fn read_positioned<S>(source: S) -> SliceView<(Position, char)>
where
    S: IntoIterator<Item = char>,
{
    let mut pairs = normalize(source);
    let buf: Vec<(Position, char)> = pairs.by_ref().collect();
    debug!(
        chars = buf.len(),
        lines = pairs.position().line.saturating_add(1),
        "read positioned buffer"
    );
    SliceView::new(buf)
}

/// Reads a finite source into parallel views of positions and characters.
///
/// Both views have the same length; `positions[i]` is where `chars[i]` sits in
/// the canonical output.
pub fn read_split<S>(source: S) -> (SliceView<Position>, SliceView<char>)
where
    S: IntoIterator<Item = char>,
{
    let mut pairs = normalize(source);
    let (lower, _) = pairs.size_hint();
    let mut positions = Vec::with_capacity(lower);
    let mut chars = Vec::with_capacity(lower);

    for (pos, c) in pairs.by_ref() {
        positions.push(pos);
        chars.push(c);
    }

    debug!(
        chars = chars.len(),
        lines = pairs.position().line.saturating_add(1),
        "read split buffers"
    );
    (SliceView::new(positions), SliceView::new(chars))
}
