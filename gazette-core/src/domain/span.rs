//! Half-open character ranges
//!
//! Every offset handled by this crate is a character position (a position in
//! `str::chars()`) into a single reference string.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open character range `[left, right)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset
    pub left: usize,
    /// Exclusive end offset
    pub right: usize,
}

impl Span {
    /// Creates a new span
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert!(left <= right, "span left {left} is past right {right}");
        Self { left, right }
    }

    /// Creates a span from a `(start, length)` pair
    pub fn from_start_len(start: usize, length: usize) -> Self {
        Self::new(start, start + length)
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.right - self.left
    }

    /// Returns true if the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.left == self.right
    }

    /// Returns true if `offset` lies strictly inside the span, edges excluded
    pub fn strictly_contains(&self, offset: usize) -> bool {
        self.left < offset && offset < self.right
    }

    /// Returns true if the two spans share at least one position.
    ///
    /// Touching spans (`a.right == b.left`) do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        overlaps(self, other)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.left..span.right
    }
}

/// Half-open overlap test
pub fn overlaps(a: &Span, b: &Span) -> bool {
    !(a.right <= b.left || a.left >= b.right)
}
