// ============================================================================
// Tuple Errors
// Error types for checked tuple access and export operations
// ============================================================================

use std::fmt;

/// Errors reported by the checked tuple APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TupleError {
    /// Index was outside the tuple's `0..size` range
    IndexOutOfBounds { index: usize, size: usize },
    /// Destination buffer has fewer slots than the tuple has elements
    BufferTooSmall { required: usize, capacity: usize },
}

impl fmt::Display for TupleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TupleError::IndexOutOfBounds { index, size } => {
                write!(f, "index out of bounds: index {} for tuple of size {}", index, size)
            },
            TupleError::BufferTooSmall { required, capacity } => {
                write!(
                    f,
                    "buffer too small: {} slots required, {} available",
                    required, capacity
                )
            },
        }
    }
}

impl std::error::Error for TupleError {}

/// Result type alias for tuple operations
pub type TupleResult<T> = Result<T, TupleError>;
