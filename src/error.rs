//! errors returned by the metrics

use std::fmt;

/// Failure of a metric computation. Each variant is terminal for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricError {
    /// The union of the two inputs is empty: both sets are empty,
    /// or both bitfields have no bit set. The index would be 0/0.
    EmptyUnion,
    /// The two bitfields do not have the same length.
    LengthMismatch { left: usize, right: usize },
    /// The Tanimoto index is 0 so its logarithm is undefined.
    ZeroSimilarity,
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricError::EmptyUnion => write!(f, "empty union, index is 0/0"),
            MetricError::LengthMismatch { left, right } => {
                write!(f, "bitfield lengths differ : {} and {}", left, right)
            }
            MetricError::ZeroSimilarity => write!(f, "null similarity, log2(0) is undefined"),
        }
    }
}

impl std::error::Error for MetricError {}

// end of mod tests
