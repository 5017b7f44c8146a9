//! The search kernels.
//!
//! Every function here is a pure, single-call binary search: no state
//! survives between calls and the only cost is the number of
//! [`SequenceAccessor::get`] probes, which is `O(log n)` throughout.
//!
//! Shapes are trusted, never validated. Handing [`find_peak`] something that
//! is not a mountain, or [`partition_point`] a predicate that is not
//! monotonic, yields an unspecified index (never a panic or an endless loop).

use tracing::trace;

use crate::error::SearchError;
use crate::range::{midpoint, SearchRange};
use crate::traits::{Predicate, SequenceAccessor};

// ---------------------------------------------------------------------------
// Search parameters
// ---------------------------------------------------------------------------

/// Sort direction of a sequence or sub-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Non-decreasing.
    #[default]
    Ascending,

    /// Non-increasing.
    Descending,
}

/// Which match to report when the target occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occurrence {
    /// Whichever equal element the bisection lands on first. Cheapest.
    #[default]
    Any,

    /// The lowest index holding the target.
    First,

    /// The highest index holding the target.
    Last,
}

/// Which side of a monotonic predicate's transition to report.
///
/// `FirstTrue` and `LastFalse` expect a *rising* predicate (a `false`
/// prefix followed by a `true` suffix). `LastTrue` and `FirstFalse` expect a
/// *falling* one (`true` prefix, `false` suffix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    FirstTrue,
    LastFalse,
    LastTrue,
    FirstFalse,
}

impl Boundary {
    fn is_rising(self) -> bool {
        matches!(self, Self::FirstTrue | Self::LastFalse)
    }
}

// ---------------------------------------------------------------------------
// Boundary search
// ---------------------------------------------------------------------------

/// Locate the transition point of a monotonic predicate over `range`.
///
/// Returns `None` when the requested side of the transition does not exist
/// inside the range, e.g. `FirstTrue` on a predicate that is `false`
/// everywhere, or `LastFalse` on one that is `true` everywhere. An `Empty`
/// range always yields `None` without evaluating the predicate.
///
/// Performs at most `ceil(log2(range.len())) + 1` predicate evaluations.
pub fn partition_point<P>(range: SearchRange, predicate: &P, boundary: Boundary) -> Option<usize>
where
    P: Predicate + ?Sized,
{
    let (low, high) = range.bounds()?;

    // Normalise to a rising predicate; `first` is its first true index.
    let rising = boundary.is_rising();
    let first = first_true(low, high, |i| predicate.test(i) == rising);

    let result = match boundary {
        Boundary::FirstTrue | Boundary::FirstFalse => first,
        Boundary::LastFalse | Boundary::LastTrue => match first {
            None => Some(high),
            Some(i) if i > low => Some(i - 1),
            Some(_) => None,
        },
    };

    trace!(low, high, ?boundary, ?result, "boundary resolved");
    result
}

/// First index in `low..=high` where the rising predicate `q` holds.
fn first_true(mut low: usize, mut high: usize, q: impl Fn(usize) -> bool) -> Option<usize> {
    while low < high {
        let mid = midpoint(low, high);
        if q(mid) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    q(low).then_some(low)
}

// ---------------------------------------------------------------------------
// Sorted search
// ---------------------------------------------------------------------------

/// Find `target` inside `range` of a sequence sorted in `order`.
///
/// `Ok(None)` means the target is absent, which is an ordinary outcome.
/// `Err` is reserved for a range that does not fit the sequence.
///
/// [`Occurrence::First`] and [`Occurrence::Last`] reduce to a
/// [`partition_point`] followed by one equality probe.
pub fn search_sorted<A>(
    seq: &A,
    target: &A::Item,
    range: SearchRange,
    order: Order,
    occurrence: Occurrence,
) -> Result<Option<usize>, SearchError>
where
    A: SequenceAccessor + ?Sized,
    A::Item: PartialOrd,
{
    range.check(seq.len())?;
    let Some((low, high)) = range.bounds() else {
        return Ok(None);
    };

    // `before(v)`: v sorts strictly ahead of the target in this order.
    let before = |v: &A::Item| match order {
        Order::Ascending  => v < target,
        Order::Descending => v > target,
    };
    let after = |v: &A::Item| match order {
        Order::Ascending  => v > target,
        Order::Descending => v < target,
    };
    let holds_target = |i: &usize| seq.get(*i) == *target;

    let found = match occurrence {
        Occurrence::Any => {
            // Half-open [lo, hi); `high < len` so `high + 1` cannot overflow.
            let (mut lo, mut hi) = (low, high + 1);
            let mut hit = None;
            while lo < hi {
                let mid = midpoint(lo, hi);
                let value = seq.get(mid);
                if value == *target {
                    hit = Some(mid);
                    break;
                }
                if before(&value) {
                    lo = mid + 1;
                } else {
                    hi = mid;
                }
            }
            hit
        }
        Occurrence::First => {
            partition_point(range, &|i: usize| !before(&seq.get(i)), Boundary::FirstTrue)
                .filter(holds_target)
        }
        Occurrence::Last => {
            partition_point(range, &|i: usize| after(&seq.get(i)), Boundary::LastFalse)
                .filter(holds_target)
        }
    };

    Ok(found)
}

// ---------------------------------------------------------------------------
// Mountain search
// ---------------------------------------------------------------------------

/// Index of the peak of a strictly-increasing-then-strictly-decreasing sequence.
///
/// Compares each midpoint with its right neighbour: a rising step means the
/// peak lies to the right, anything else means it is at or left of the
/// midpoint. Converges in `2 * ceil(log2(len))` probes.
///
/// # Errors
///
/// [`SearchError::MountainTooShort`] when `seq.len() < 3`.
pub fn find_peak<A>(seq: &A) -> Result<usize, SearchError>
where
    A: SequenceAccessor + ?Sized,
    A::Item: PartialOrd,
{
    let len = seq.len();
    if len < 3 {
        return Err(SearchError::MountainTooShort(len));
    }

    let (mut low, mut high) = (0, len - 1);
    while low < high {
        let mid = midpoint(low, high);
        if seq.get(mid) < seq.get(mid + 1) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    trace!(peak = low, len, "located mountain peak");
    Ok(low)
}

/// Find `target` in a mountain-shaped sequence.
///
/// Searches the ascending side `[0, peak]` first, then the descending side
/// `[peak + 1, len - 1]`, so a target equal to the peak is reported at the
/// peak and a value present on both sides is reported on the ascending side.
///
/// # Errors
///
/// [`SearchError::MountainTooShort`] when `seq.len() < 3`.
pub fn find_in_mountain<A>(seq: &A, target: &A::Item) -> Result<Option<usize>, SearchError>
where
    A: SequenceAccessor + ?Sized,
    A::Item: PartialOrd,
{
    let peak = find_peak(seq)?;

    let rising = SearchRange::new(0, peak);
    if let Some(i) = search_sorted(seq, target, rising, Order::Ascending, Occurrence::Any)? {
        return Ok(Some(i));
    }

    let falling = SearchRange::new(peak + 1, seq.len() - 1);
    search_sorted(seq, target, falling, Order::Descending, Occurrence::Any)
}
