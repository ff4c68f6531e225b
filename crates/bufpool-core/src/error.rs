//! Allocation error types.

use thiserror::Error;

/// Errors returned by the buffer allocation facility.
///
/// Sizes are `usize`, so requests can only fail by exceeding the
/// facility's maximum buffer length; negative sizes are unrepresentable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AllocError {
    /// Requested length exceeds [`MAX_LENGTH`](crate::alloc::MAX_LENGTH).
    #[error("requested buffer length {requested} exceeds maximum {max}")]
    SizeTooLarge { requested: usize, max: usize },
}
