use std::time::Instant;

use tracing::{debug, debug_span};

use crate::accessor::Metered;
use crate::engine::{self, Occurrence, Order};
use crate::error::SearchError;
use crate::range::SearchRange;
use crate::results::{ProbeStats, Results};
use crate::traits::SequenceAccessor;

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// The ordering the searched sequence is trusted to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    /// Sorted non-decreasing.
    #[default]
    Ascending,

    /// Sorted non-increasing.
    Descending,

    /// Strictly increasing up to a single peak, then strictly decreasing.
    Mountain,
}

enum Query<T> {
    Target(T),
    Peak,
}

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a single search.
///
/// Created via [`monosearch::search()`](crate::search). Configure with
/// chained builder methods, then call [`run()`](SearchBuilder::run).
///
/// # Example
///
/// ```rust
/// use monosearch::{Occurrence, SearchRange};
///
/// let data = [1, 2, 2, 2, 5, 8, 13];
/// let results = monosearch::search()
///     .sequence(&data)
///     .target(2)
///     .occurrence(Occurrence::Last)
///     .within(SearchRange::new(0, 5))
///     .run()
///     .unwrap();
///
/// assert_eq!(results.index, Some(3));
/// ```
pub struct SearchBuilder<'a, T> {
    sequence:   Option<Box<dyn SequenceAccessor<Item = T> + 'a>>,
    query:      Option<Query<T>>,
    shape:      Shape,
    range:      Option<SearchRange>,
    occurrence: Occurrence,
}

impl<T> Default for SearchBuilder<'_, T> {
    fn default() -> Self {
        Self {
            sequence:   None,
            query:      None,
            shape:      Shape::default(),
            range:      None,
            occurrence: Occurrence::default(),
        }
    }
}

impl<'a, T> SearchBuilder<'a, T> {
    // ── Sequence ──────────────────────────────────────────────────────────

    /// Set the sequence to search.
    ///
    /// Any [`SequenceAccessor`] is accepted: slices, arrays, `Vec`s,
    /// references to them, [`FromFn`](crate::FromFn), or your own type.
    pub fn sequence(mut self, s: impl SequenceAccessor<Item = T> + 'a) -> Self {
        self.sequence = Some(Box::new(s));
        self
    }

    /// Declare the sequence's ordering. Defaults to [`Shape::Ascending`].
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    // ── Query ─────────────────────────────────────────────────────────────

    /// Search for an element equal to `target`.
    pub fn target(mut self, target: T) -> Self {
        self.query = Some(Query::Target(target));
        self
    }

    /// Search for the peak of a [`Shape::Mountain`] sequence.
    pub fn peak(mut self) -> Self {
        self.query = Some(Query::Peak);
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Which match to report among duplicates. Sorted shapes only.
    pub fn occurrence(mut self, occurrence: Occurrence) -> Self {
        self.occurrence = occurrence;
        self
    }

    /// Restrict a sorted search to an inclusive sub-range.
    ///
    /// Defaults to the whole sequence. Mountain searches always cover the
    /// whole sequence and reject an explicit range.
    pub fn within(mut self, range: SearchRange) -> Self {
        self.range = Some(range);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search.
    ///
    /// The sequence is wrapped in a [`Metered`] accessor so the returned
    /// [`ProbeStats`] report the exact number of `get` calls.
    ///
    /// # Errors
    ///
    /// Configuration problems are reported before the first probe: no
    /// sequence, no query, a peak query on a sorted shape, a range or
    /// occurrence on a mountain, or a range outside the sequence. A mountain
    /// shorter than 3 elements yields [`SearchError::MountainTooShort`].
    pub fn run(self) -> Result<Results, SearchError>
    where
        T: PartialOrd,
    {
        let sequence = self.sequence.ok_or_else(|| {
            SearchError::InvalidConfig("no sequence provided".into())
        })?;
        let query = self.query.ok_or_else(|| {
            SearchError::InvalidConfig("no target or peak query provided".into())
        })?;

        let seq = Metered::new(&*sequence);
        let len = seq.len();
        let range = self.range.unwrap_or_else(|| SearchRange::full(len));

        match self.shape {
            Shape::Mountain => {
                if self.range.is_some() {
                    return Err(SearchError::InvalidConfig(
                        "mountain searches cover the whole sequence; remove the range".into(),
                    ));
                }
                if self.occurrence != Occurrence::Any {
                    return Err(SearchError::InvalidConfig(
                        "occurrence selection requires a sorted shape".into(),
                    ));
                }
            }
            Shape::Ascending | Shape::Descending => {
                if matches!(query, Query::Peak) {
                    return Err(SearchError::InvalidConfig(
                        "peak queries require a mountain shape".into(),
                    ));
                }
                range.check(len)?;
            }
        }

        let span = debug_span!("search", shape = ?self.shape, len);
        let _guard = span.enter();
        let start = Instant::now();

        let index = match (self.shape, query) {
            (Shape::Mountain, Query::Peak) => Some(engine::find_peak(&seq)?),
            (Shape::Mountain, Query::Target(t)) => engine::find_in_mountain(&seq, &t)?,
            (shape, Query::Target(t)) => {
                let order = match shape {
                    Shape::Descending => Order::Descending,
                    _ => Order::Ascending,
                };
                engine::search_sorted(&seq, &t, range, order, self.occurrence)?
            }
            // Rejected above.
            (_, Query::Peak) => None,
        };

        let duration = start.elapsed();
        let probes = seq.probes();
        debug!(probes, ?index, "search complete");

        Ok(Results {
            index,
            stats: ProbeStats::compute(probes, len, duration),
        })
    }
}
