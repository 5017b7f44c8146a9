/// Indexed, length-bounded read access to an ordered sequence.
///
/// Implement this to make monosearch search anything randomly addressable:
/// slices, memory-mapped tables, remote arrays, or an implicit index space
/// computed on demand.
///
/// # Cost Model
///
/// Every [`get`](SequenceAccessor::get) call is treated as a chargeable probe.
/// The engine never enumerates the sequence; each search performs `O(log n)`
/// calls. Wrap an accessor in [`Metered`](crate::Metered) to count them.
///
/// # Contract
///
/// `get` and `len` must be stable and deterministic for the duration of one
/// search call. `get` is only ever called with `index < len()`. Nothing about
/// ordering is verified: a sequence that is not in the shape the search
/// expects produces an unspecified (but memory-safe) result.
///
/// # Example
///
/// ```rust
/// use monosearch::SequenceAccessor;
///
/// /// The squares `0, 1, 4, 9, ...` without storing them.
/// struct Squares(usize);
///
/// impl SequenceAccessor for Squares {
///     type Item = u64;
///
///     fn get(&self, index: usize) -> u64 {
///         (index as u64) * (index as u64)
///     }
///
///     fn len(&self) -> usize {
///         self.0
///     }
/// }
///
/// let squares = Squares(1_000);
/// assert_eq!(monosearch::engine::search_sorted(
///     &squares,
///     &81,
///     monosearch::SearchRange::full(squares.len()),
///     monosearch::Order::Ascending,
///     monosearch::Occurrence::Any,
/// ), Ok(Some(9)));
/// ```
pub trait SequenceAccessor {
    /// The element type yielded by [`get`](SequenceAccessor::get).
    type Item;

    /// Read the element at `index`. Called only with `index < self.len()`.
    fn get(&self, index: usize) -> Self::Item;

    /// Number of addressable elements.
    fn len(&self) -> usize;

    /// `true` when there is nothing to probe.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A boolean predicate over an index range, assumed monotonic.
///
/// Monotonic means the `false` results form one contiguous run and the
/// `true` results another. Which run comes first is chosen by the
/// [`Boundary`](crate::Boundary) passed to
/// [`partition_point`](crate::engine::partition_point).
///
/// Any `Fn(usize) -> bool` closure is a `Predicate`.
///
/// ```rust
/// use monosearch::{Boundary, Predicate, SearchRange};
///
/// struct AtLeast(usize);
///
/// impl Predicate for AtLeast {
///     fn test(&self, index: usize) -> bool {
///         index * index >= self.0
///     }
/// }
///
/// let root = monosearch::engine::partition_point(
///     SearchRange::new(0, 1_000),
///     &AtLeast(50),
///     Boundary::FirstTrue,
/// );
/// assert_eq!(root, Some(8));
/// ```
pub trait Predicate {
    /// Evaluate the predicate at `index`.
    fn test(&self, index: usize) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(usize) -> bool,
{
    fn test(&self, index: usize) -> bool {
        self(index)
    }
}
