//! # monosearch
//!
//! Bounded binary search engine: generic over storage, logarithmic in probes.
//!
//! monosearch owns the search kernels, the contracts ([`SequenceAccessor`],
//! [`Predicate`]), the error type, and the builder API. It does **not** own
//! the data: every search reads through an accessor, and every `get` counts.
//!
//! Three shapes are supported:
//!
//! - sorted sequences, ascending or descending, with first/last/any match
//! - mountain sequences (strictly up, then strictly down), via peak location
//!   followed by a search of each side
//! - pairs of sorted sequences, for the median of their union
//!
//! plus the kernel underneath them all: [`engine::partition_point`], the
//! transition of any monotonic predicate over an index range.
//!
//! # Quick Start
//!
//! ```rust
//! use monosearch::Shape;
//!
//! let data = [1, 2, 3, 4, 5, 3, 1];
//!
//! let results = monosearch::search()
//!     .sequence(&data)
//!     .shape(Shape::Mountain)
//!     .target(3)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(results.index, Some(2));
//! println!("found in {} probes over {} elements",
//!     results.stats.probes,
//!     results.stats.len,
//! );
//! ```
//!
//! # Direct Calls
//!
//! The builder is a convenience. The kernels are plain functions:
//!
//! ```rust
//! use monosearch::{engine, median, Boundary, Median, SearchRange};
//!
//! assert_eq!(engine::find_peak(&[1, 2, 5, 4, 3]), Ok(2));
//! assert_eq!(engine::find_in_mountain(&[0, 1, 2, 4, 2, 1], &3), Ok(None));
//!
//! assert_eq!(median(&[1, 3], &[2]), Ok(Median::Middle(2)));
//!
//! // Smallest n with n * n > 200.
//! let n = engine::partition_point(SearchRange::new(0, 100), &|n: usize| n * n > 200, Boundary::FirstTrue);
//! assert_eq!(n, Some(15));
//! ```
//!
//! # Not Found vs. Bad Input
//!
//! An absent target is `None`, never an error. [`SearchError`] is reserved
//! for calls that cannot be answered (a mountain shorter than 3, two empty
//! median inputs, a range outside the sequence, a misconfigured builder).
//! Shape preconditions such as sortedness are trusted, not verified: checking
//! them would cost `O(n)`.

#![forbid(unsafe_code)]

pub mod engine;

mod accessor;
mod builder;
mod error;
mod median;
mod range;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use accessor::{FromFn, Metered};
pub use builder::{SearchBuilder, Shape};
pub use engine::{Boundary, Occurrence, Order};
pub use error::SearchError;
pub use median::{median, Median};
pub use range::SearchRange;
pub use results::{ProbeStats, Results};
pub use traits::{Predicate, SequenceAccessor};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] to configure and run a search.
///
/// # Example
///
/// ```rust
/// use monosearch::{SearchError, Shape};
///
/// let descending = vec![90, 70, 50, 30, 10];
///
/// let results = monosearch::search()
///     .sequence(&descending)
///     .shape(Shape::Descending)
///     .target(30)
///     .run()
///     .unwrap();
/// assert_eq!(results.index, Some(3));
///
/// let err = monosearch::search()
///     .sequence(&descending)
///     .peak()
///     .run()
///     .unwrap_err();
/// assert!(matches!(err, SearchError::InvalidConfig(_)));
/// ```
pub fn search<'a, T>() -> SearchBuilder<'a, T> {
    SearchBuilder::default()
}
