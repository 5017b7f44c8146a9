use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    // Input shape
    #[error("mountain sequence needs at least 3 elements, got {0}")]
    MountainTooShort(usize),

    #[error("both input sequences are empty")]
    EmptyInput,

    #[error("range [{low}, {high}] out of bounds for length {len}")]
    RangeOutOfBounds {
        low:  usize,
        high: usize,
        len:  usize,
    },

    // Config
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SearchError {
    /// The length of the offending input, if the error carries one.
    pub fn input_len(&self) -> Option<usize> {
        match self {
            Self::MountainTooShort(len) | Self::RangeOutOfBounds { len, .. } => Some(*len),
            Self::EmptyInput => Some(0),
            _ => None,
        }
    }
}
