//! Error types for the trafficsense library.

use thiserror::Error;

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, TrafficError>;

/// Errors surfaced by the analytics operations.
///
/// Degenerate numerical situations (disjoint distribution supports,
/// zero-variance summaries, empty windows) are not errors: they resolve to
/// documented fallback values at the site that detects them. Only misuse of
/// the API reaches callers through this enum.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrafficError {
    /// There is nothing to analyze.
    #[error("empty input data")]
    EmptyData,

    /// Fewer rows than the operation needs.
    #[error("insufficient data: need at least {needed} rows, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A parameter outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Row, column or label counts that do not line up.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A malformed or non-increasing timestamp.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// A row or column index past the end of a table.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_misuse() {
        assert_eq!(TrafficError::EmptyData.to_string(), "empty input data");
        assert_eq!(
            TrafficError::InsufficientData { needed: 672, got: 10 }.to_string(),
            "insufficient data: need at least 672 rows, got 10"
        );
        assert_eq!(
            TrafficError::InvalidParameter("k must satisfy 1 <= k < 4, got 9".to_string())
                .to_string(),
            "invalid parameter: k must satisfy 1 <= k < 4, got 9"
        );
        assert_eq!(
            TrafficError::IndexOutOfBounds { index: 7, size: 3 }.to_string(),
            "index out of bounds: 7 (size: 3)"
        );
    }

    #[test]
    fn errors_compare_and_clone() {
        let err = TrafficError::DimensionMismatch {
            expected: 672,
            got: 600,
        };
        assert_eq!(err.clone(), err);
        assert_ne!(err, TrafficError::EmptyData);
    }
}
