//! Error types for array operations and capacity policy construction.

use std::error::Error;
use std::fmt;

/// Errors returned by fallible [`DynamicArray`](crate::DynamicArray) operations.
///
/// Every operation that returns one of these has left the array untouched:
/// index checks run before any shift or reallocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index fell outside the valid range for the operation.
    ///
    /// For `pop_at` the index is reported as supplied (possibly negative);
    /// unsigned indices above `isize::MAX` are reported as `isize::MAX`.
    IndexOutOfRange {
        /// The offending index.
        index: isize,
        /// Array length at the time of the call.
        len: usize,
    },
    /// `index_of` found no element equal to the search value.
    ValueNotFound,
    /// A type-erased operand was not an array of the same element type.
    TypeMismatch {
        /// Type name of the array the operand was expected to be.
        expected: &'static str,
    },
}

impl ArrayError {
    /// Build an [`ArrayError::IndexOutOfRange`] from an unsigned index.
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len: 0 } => {
                write!(f, "index {index} out of range: array is empty")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
            Self::ValueNotFound => write!(f, "value not found in array"),
            Self::TypeMismatch { expected } => {
                write!(f, "type mismatch: can only combine {expected} with {expected}")
            }
        }
    }
}

impl Error for ArrayError {}

/// Errors from [`CapacityPolicy::new`](crate::CapacityPolicy::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// Growth must at least double the capacity for amortized O(1) append.
    GrowFactorTooSmall {
        /// The rejected factor.
        grow_factor: usize,
    },
    /// A shrink target of `grow_factor * len` must not itself satisfy the
    /// shrink condition, otherwise every removal reallocates.
    ShrinkWouldThrash {
        /// The configured growth factor.
        grow_factor: usize,
        /// The rejected shrink threshold.
        shrink_threshold: usize,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrowFactorTooSmall { grow_factor } => {
                write!(f, "grow factor {grow_factor} is too small (minimum 2)")
            }
            Self::ShrinkWouldThrash {
                grow_factor,
                shrink_threshold,
            } => {
                write!(
                    f,
                    "shrink threshold {shrink_threshold} must exceed grow factor {grow_factor}"
                )
            }
        }
    }
}

impl Error for PolicyError {}
