use std::cell::Cell;

use crate::traits::SequenceAccessor;

// ---------------------------------------------------------------------------
// In-memory accessors
// ---------------------------------------------------------------------------

impl<T: Copy> SequenceAccessor for [T] {
    type Item = T;

    fn get(&self, index: usize) -> T {
        self[index]
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Copy, const N: usize> SequenceAccessor for [T; N] {
    type Item = T;

    fn get(&self, index: usize) -> T {
        self[index]
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T: Copy> SequenceAccessor for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> T {
        self[index]
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<A> SequenceAccessor for &A
where
    A: SequenceAccessor + ?Sized,
{
    type Item = A::Item;

    fn get(&self, index: usize) -> A::Item {
        (**self).get(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

// ---------------------------------------------------------------------------
// FromFn
// ---------------------------------------------------------------------------

/// An implicit sequence of `len` elements computed by `f(index)`.
///
/// Useful for searching an index space that is never materialized, such as
/// "the k-th candidate answer" in binary-search-on-answer problems.
///
/// ```rust
/// use monosearch::{FromFn, SequenceAccessor};
///
/// let evens = FromFn::new(10, |i: usize| i * 2);
/// assert_eq!(evens.get(4), 8);
/// assert_eq!(evens.len(), 10);
/// ```
pub struct FromFn<F> {
    len: usize,
    f:   F,
}

impl<F> FromFn<F> {
    pub fn new(len: usize, f: F) -> Self {
        Self { len, f }
    }
}

impl<F, T> SequenceAccessor for FromFn<F>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    fn get(&self, index: usize) -> T {
        (self.f)(index)
    }

    fn len(&self) -> usize {
        self.len
    }
}

// ---------------------------------------------------------------------------
// Metered
// ---------------------------------------------------------------------------

/// Wraps an accessor and counts every [`get`](SequenceAccessor::get) call.
///
/// `len()` is free and not counted. The counter lives in a [`Cell`], so a
/// `Metered` accessor is `!Sync`; searches are single-threaded anyway.
///
/// ```rust
/// use monosearch::{engine, Metered};
///
/// let data: Vec<u32> = (0..1_024).collect();
/// let metered = Metered::new(&data);
///
/// let found = engine::search_sorted(
///     &metered,
///     &700,
///     monosearch::SearchRange::full(data.len()),
///     monosearch::Order::Ascending,
///     monosearch::Occurrence::Any,
/// );
/// assert_eq!(found, Ok(Some(700)));
/// assert!(metered.probes() <= 11);
/// ```
pub struct Metered<A> {
    inner:  A,
    probes: Cell<usize>,
}

impl<A> Metered<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            probes: Cell::new(0),
        }
    }

    /// Number of `get` calls made so far.
    pub fn probes(&self) -> usize {
        self.probes.get()
    }

    /// Zero the probe counter, returning the previous count.
    pub fn reset(&self) -> usize {
        self.probes.replace(0)
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: SequenceAccessor> SequenceAccessor for Metered<A> {
    type Item = A::Item;

    fn get(&self, index: usize) -> A::Item {
        self.probes.set(self.probes.get() + 1);
        self.inner.get(index)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
