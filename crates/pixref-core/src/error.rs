//! Error types for pixref operations.
//!
//! Every kernel validates its arguments before touching any output, so an
//! [`Error`] always means "nothing was computed". Value differences found by
//! the validator are not errors; they are reported as data.
//!
//! # Categories
//!
//! - [`Error::InvalidArgument`] - a parameter is outside its documented range
//! - [`Error::OutOfBounds`] - strict (non-clamped) access outside an array
//! - [`Error::SizeMismatch`] - two buffers that must agree in length do not
//!
//! # Usage
//!
//! ```rust
//! use pixref_core::{Error, Result};
//!
//! fn check_radius(radius: usize) -> Result<()> {
//!     if !(1..=25).contains(&radius) {
//!         return Err(Error::invalid_argument(format!(
//!             "blur radius must be in 1..=25, got {radius}"
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_radius(0).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by kernels, arrays, and the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter is outside the range the operation accepts.
    ///
    /// Examples: blur radius outside 1..=25, convolve coefficient count other
    /// than 9 or 25, vector size outside 1..=4, a color matrix that is not
    /// 16 entries long.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A strict access touched a cell outside the array.
    ///
    /// Clamped reads never produce this; they are redirected to the nearest
    /// edge cell instead.
    #[error("cell ({x}, {y}) out of bounds for array {size_x}x{size_y}")]
    OutOfBounds {
        /// X coordinate that was accessed
        x: i64,
        /// Y coordinate that was accessed
        y: i64,
        /// Array width in cells
        size_x: usize,
        /// Array height in cells
        size_y: usize,
    },

    /// Two buffers that must have the same length do not.
    #[error("size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch {
        /// Length required by the operation
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: i64, y: i64, size_x: usize, size_y: usize) -> Self {
        Self::OutOfBounds {
            x,
            y,
            size_x,
            size_y,
        }
    }

    /// Creates an [`Error::SizeMismatch`] error.
    #[inline]
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Returns `true` if this is an argument validation error.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this is a size mismatch.
    #[inline]
    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, Self::SizeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(-1, 7, 3, 4);
        let msg = err.to_string();
        assert!(msg.contains("-1"));
        assert!(msg.contains("3x4"));
        assert!(err.is_bounds_error());
        assert!(!err.is_size_mismatch());
    }

    #[test]
    fn test_size_mismatch() {
        let err = Error::size_mismatch(48, 47);
        assert_eq!(err.to_string(), "size mismatch: expected 48 elements, got 47");
        assert!(err.is_size_mismatch());
    }

    #[test]
    fn test_invalid_argument() {
        let err = Error::invalid_argument("radius 0");
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("radius 0"));
    }
}
