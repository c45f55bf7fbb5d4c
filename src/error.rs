//! Error type for the checked sort entry points.

use std::error::Error;
use std::fmt;

/// Precondition failures that are detected before any element is moved.
///
/// When one of these is returned the input slice is exactly as the caller left it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The scratch slice handed to merge sort is shorter than the slice being sorted.
    AuxTooSmall {
        /// Length of the slice being sorted.
        required: usize,
        /// Length of the scratch slice that was passed in.
        provided: usize,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::AuxTooSmall { required, provided } => {
                write!(
                    f,
                    "auxiliary buffer too small: need {} elements, got {}",
                    required, provided
                )
            }
        }
    }
}

impl Error for SortError {}
