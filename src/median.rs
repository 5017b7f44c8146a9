use num_traits::ToPrimitive;
use tracing::trace;

use crate::error::SearchError;
use crate::range::midpoint;
use crate::traits::SequenceAccessor;

// ---------------------------------------------------------------------------
// Median
// ---------------------------------------------------------------------------

/// The median of a combined multiset, kept in the element type.
///
/// An odd total has one middle element, which is always an exact member of
/// the input. An even total has two, and the numeric median is their mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Median<T> {
    /// The single middle element of an odd-length multiset.
    Middle(T),

    /// The lower and upper middle elements of an even-length multiset.
    Between(T, T),
}

impl<T: ToPrimitive> Median<T> {
    /// The median as a float: the middle element, or the mean of the pair.
    ///
    /// `None` only if an element cannot be represented as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Middle(v) => v.to_f64(),
            Self::Between(lo, hi) => Some((lo.to_f64()? + hi.to_f64()?) / 2.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Partition search
// ---------------------------------------------------------------------------

/// Median of two sorted (non-decreasing) sequences without merging them.
///
/// Bisects the shorter sequence for a split whose left halves together hold
/// `ceil((m + n) / 2)` elements and never exceed the right halves, so the
/// cost is `O(log(min(m, n)))` probes. Either sequence may be empty.
///
/// Sortedness is trusted, not checked. Unsorted input still terminates but
/// yields an arbitrary `Ok` value.
///
/// # Errors
///
/// [`SearchError::EmptyInput`] when both sequences are empty.
///
/// ```rust
/// use monosearch::{median, Median};
///
/// assert_eq!(median(&[1, 3], &[2]), Ok(Median::Middle(2)));
/// assert_eq!(median(&[1_i32, 2], &[3, 4]).unwrap().as_f64(), Some(2.5));
/// ```
pub fn median<X, Y>(x: &X, y: &Y) -> Result<Median<X::Item>, SearchError>
where
    X: SequenceAccessor + ?Sized,
    Y: SequenceAccessor<Item = X::Item> + ?Sized,
    X::Item: PartialOrd + Copy,
{
    if x.len() <= y.len() {
        partition(x, y)
    } else {
        partition(y, x)
    }
}

fn partition<S, L, T>(small: &S, large: &L) -> Result<Median<T>, SearchError>
where
    S: SequenceAccessor<Item = T> + ?Sized,
    L: SequenceAccessor<Item = T> + ?Sized,
    T: PartialOrd + Copy,
{
    let (m, n) = (small.len(), large.len());
    if m == 0 && n == 0 {
        return Err(SearchError::EmptyInput);
    }

    // ceil((m + n) / 2) and (m + n) % 2 without forming m + n, which can
    // exceed usize::MAX for implicit sequences.
    // With m <= n, `half - px` stays in [0, n].
    let half = m / 2 + n / 2 + (m % 2 + n % 2 + 1) / 2;
    let odd = (m % 2 + n % 2) % 2 == 1;
    let (mut low, mut high) = (0, m);

    // Moving right at split p and left at split p + 1 would need
    // large[half - p - 1] > small[p] and small[p] > large[half - p - 1] at
    // once, so the bounds never cross and every exit is a return.
    loop {
        let px = midpoint(low, high);
        let py = half - px;

        // `None` on the left is -inf, on the right +inf.
        let left_x  = px.checked_sub(1).map(|i| small.get(i));
        let right_x = (px < m).then(|| small.get(px));
        let left_y  = py.checked_sub(1).map(|i| large.get(i));
        let right_y = (py < n).then(|| large.get(py));

        if exceeds(left_x, right_y) {
            // left_x is Some, so px >= 1.
            high = px - 1;
        } else if exceeds(left_y, right_x) {
            // right_x is Some, so px < m.
            low = px + 1;
        } else {
            trace!(split_small = px, split_large = py, m, n, "median partition found");
            let lower = max_left(left_x, left_y);
            let found = if odd {
                lower.map(Median::Middle)
            } else {
                lower
                    .zip(min_right(right_x, right_y))
                    .map(|(lo, hi)| Median::Between(lo, hi))
            };
            // half >= 1 for non-empty input, so a left element always exists.
            return found.ok_or(SearchError::EmptyInput);
        }
    }
}

/// `left > right`, treating a missing side as the matching infinity.
fn exceeds<T: PartialOrd>(left: Option<T>, right: Option<T>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l > r)
}

fn max_left<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b > a { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

fn min_right<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b < a { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}
