//! Errors reported before a reorder touches the arrangement.
//!
//! Every check runs up front, so an `Err` always leaves the arrangement
//! exactly as the caller passed it in.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The target order is not a permutation of the arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTargetError {
    /// The target and the arrangement differ in length.
    LengthMismatch {
        /// Number of elements in the arrangement.
        arrangement: usize,
        /// Number of elements in the target.
        target: usize,
    },

    /// The target repeats an identity.
    Duplicate {
        /// Index in the target of the first repeated identity.
        index: usize,
    },

    /// An arrangement element does not occur in the target.
    Missing {
        /// Index in the arrangement of the element the target omits.
        index: usize,
    },
}

/// The arrangement itself cannot be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArrangementError {
    /// The free element does not occur in the arrangement.
    MissingFree,

    /// The arrangement repeats an identity.
    Duplicate {
        /// Index in the arrangement of the first repeated identity.
        index: usize,
    },
}

/// Error type for free-slot reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapSortError {
    /// See [`InvalidTargetError`].
    InvalidTarget(InvalidTargetError),

    /// See [`InvalidArrangementError`].
    InvalidArrangement(InvalidArrangementError),
}

impl Display for InvalidTargetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                arrangement,
                target,
            } => write!(
                f,
                "Length mismatch: arrangement has {arrangement} elements, target has {target}"
            ),
            Self::Duplicate { index } => {
                write!(f, "Target repeats an element at index {index}")
            }
            Self::Missing { index } => {
                write!(f, "Target omits the arrangement element at index {index}")
            }
        }
    }
}

impl Display for InvalidArrangementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFree => write!(f, "Arrangement does not contain the free element"),
            Self::Duplicate { index } => {
                write!(f, "Arrangement repeats an element at index {index}")
            }
        }
    }
}

impl Display for SwapSortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(err) => write!(f, "Invalid target: {err}"),
            Self::InvalidArrangement(err) => write!(f, "Invalid arrangement: {err}"),
        }
    }
}

impl Error for InvalidTargetError {}

impl Error for InvalidArrangementError {}

impl Error for SwapSortError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTarget(err) => Some(err),
            Self::InvalidArrangement(err) => Some(err),
        }
    }
}

impl From<InvalidTargetError> for SwapSortError {
    fn from(err: InvalidTargetError) -> Self {
        Self::InvalidTarget(err)
    }
}

impl From<InvalidArrangementError> for SwapSortError {
    fn from(err: InvalidArrangementError) -> Self {
        Self::InvalidArrangement(err)
    }
}
