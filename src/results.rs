use std::time::Duration;

/// The output of a completed builder search.
///
/// `index` is `None` when the target is absent. Absence is an ordinary
/// outcome, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    /// Where the target (or the peak) was found.
    pub index: Option<usize>,

    /// Probe accounting for the search.
    pub stats: ProbeStats,
}

impl Results {
    /// Whether the search located a match.
    pub fn found(&self) -> bool {
        self.index.is_some()
    }
}

/// Cost statistics for a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeStats {
    /// Number of `get` calls made against the sequence.
    pub probes: usize,

    /// Length of the searched sequence.
    pub len: usize,

    /// Wall-clock time from the first probe to completion.
    pub duration: Duration,

    /// Halvings needed to reduce `len` to one element, i.e. `floor(log2(len)) + 1`
    /// (0 for an empty sequence). Convenience field for comparing `probes`
    /// against the logarithmic bound.
    pub depth: u32,
}

impl ProbeStats {
    pub(crate) fn compute(probes: usize, len: usize, duration: Duration) -> Self {
        Self {
            probes,
            len,
            duration,
            depth: usize::BITS - len.leading_zeros(),
        }
    }
}
