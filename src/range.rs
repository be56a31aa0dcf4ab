//! Half-open byte ranges over a source text.
//!
//! All positions are byte offsets. A range `[start, end)` is empty whenever
//! `start >= end`; empty ranges behave as the identity for union-adjacent
//! operations and annihilate under intersection.

/// A half-open interval `[start, end)` of byte positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// True if the range contains no positions.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Smallest range enclosing both `self` and `other`.
    pub fn union(&self, other: &Range) -> Range {
        Range::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Overlap of `self` and `other` (possibly empty).
    pub fn intersection(&self, other: &Range) -> Range {
        Range::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// True if `pos` lies within the range.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}
