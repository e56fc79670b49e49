//! Error types for matriz operations.

use std::fmt;

/// Main error type for matriz operations.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "2x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Operand shapes don't conform for the operation.
    DimensionMismatch {
        /// Shape the operation expected
        expected: String,
        /// Shape it was given
        actual: String,
    },

    /// Flat data length doesn't match the requested shape.
    DataLength {
        /// rows * cols
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::DataLength { expected, actual } => {
                write!(
                    f,
                    "Data length mismatch: expected {expected} elements, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create a dimension mismatch error from two shapes
    #[must_use]
    pub fn dimension_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::DimensionMismatch {
            expected: "2x3".to_string(),
            actual: "2x2".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("2x3"));
        assert!(err.to_string().contains("2x2"));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = MatrizError::dimension_mismatch((4, 1), (3, 5));
        let msg = err.to_string();
        assert!(msg.contains("4x1"));
        assert!(msg.contains("3x5"));
    }

    #[test]
    fn test_data_length_display() {
        let err = MatrizError::DataLength {
            expected: 6,
            actual: 4,
        };
        assert!(err.to_string().contains("6 elements"));
        assert!(err.to_string().contains("got 4"));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrizError::DataLength {
            expected: 1,
            actual: 0,
        };
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("DataLength"));
    }
}
