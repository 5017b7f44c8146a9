use crate::error::SearchError;

/// An inclusive index range `[low, high]`, or the explicit `Empty` range.
///
/// A `Span` always satisfies `low <= high`; constructors that would violate
/// that produce `Empty` instead. Whether a span fits a particular sequence is
/// checked separately with [`check`](SearchRange::check), because the same
/// range type also describes abstract index spaces with no backing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchRange {
    /// No indices at all.
    Empty,

    /// Every index from `low` through `high`, both inclusive.
    Span { low: usize, high: usize },
}

impl SearchRange {
    /// `[low, high]`, or `Empty` when `low > high`.
    pub fn new(low: usize, high: usize) -> Self {
        if low > high {
            Self::Empty
        } else {
            Self::Span { low, high }
        }
    }

    /// Every valid index of a sequence of length `len`.
    pub fn full(len: usize) -> Self {
        match len {
            0 => Self::Empty,
            n => Self::Span { low: 0, high: n - 1 },
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of indices covered. Saturates for the full `usize` domain.
    pub fn len(&self) -> usize {
        match *self {
            Self::Empty => 0,
            Self::Span { low, high } => (high - low).saturating_add(1),
        }
    }

    /// `(low, high)` for a span, `None` for `Empty`.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Empty => None,
            Self::Span { low, high } => Some((low, high)),
        }
    }

    /// Lower midpoint, computed as `low + (high - low) / 2` so it never overflows.
    pub fn midpoint(&self) -> Option<usize> {
        self.bounds().map(|(low, high)| midpoint(low, high))
    }

    pub fn contains(&self, index: usize) -> bool {
        match *self {
            Self::Empty => false,
            Self::Span { low, high } => low <= index && index <= high,
        }
    }

    /// Verify the range addresses only valid indices of a length-`len` sequence.
    ///
    /// `Empty` fits every sequence.
    pub fn check(&self, len: usize) -> Result<(), SearchError> {
        match *self {
            Self::Span { low, high } if high >= len => {
                Err(SearchError::RangeOutOfBounds { low, high, len })
            }
            _ => Ok(()),
        }
    }
}

/// Overflow-free lower midpoint of `low..=high`. Requires `low <= high`.
pub(crate) fn midpoint(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}
