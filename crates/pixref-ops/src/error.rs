//! Error type for the reference kernels.

use thiserror::Error;

/// Error type for kernel calls.
///
/// Buffer, restriction and array failures come from `pixref-core` and are
/// carried unchanged in [`OpsError::Core`]. Parameters only a kernel knows
/// about (blur radius, coefficient count, YUV format) fail with
/// [`OpsError::InvalidParameter`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Buffer, restriction or array access rejected.
    #[error(transparent)]
    Core(#[from] pixref_core::Error),

    /// Kernel parameter outside its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for kernel calls.
pub type OpsResult<T> = Result<T, OpsError>;

impl OpsError {
    /// Creates an [`OpsError::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Returns `true` for any rejected argument, kernel or core.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Core(e) => e.is_invalid_argument(),
            Self::InvalidParameter(_) => true,
        }
    }

    /// Returns `true` if a strict array access went out of bounds.
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_bounds_error())
    }

    /// Returns `true` if two buffer lengths disagreed.
    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_size_mismatch())
    }
}
