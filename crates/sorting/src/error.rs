use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Precondition violations reported by the checked entry points.
///
/// The unchecked entry points panic with the `Display` of the same value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortError {
    /// The element count is negative or does not fit in `usize`.
    InvalidCount,

    /// The element count is larger than the slice it refers to.
    CountExceedsLength {
        /// Requested number of elements.
        count: usize,
        /// Length of the slice.
        len: usize,
    },

    /// An index is negative or does not fit in `usize`.
    InvalidIndex,

    /// An index points past the end of the slice.
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the slice.
        len: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidCount => write!(f, "Invalid element count: not representable as usize"),
            Self::CountExceedsLength { count, len } => {
                write!(f, "Element count {count} exceeds slice length {len}")
            }
            Self::InvalidIndex => write!(f, "Invalid index: not representable as usize"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} out of bounds for slice length {len}")
            }
        }
    }
}

impl Error for SortError {}
