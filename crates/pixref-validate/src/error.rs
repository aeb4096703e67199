//! Error type for validation and input generation.
//!
//! Comparison results are never errors. A candidate that differs from the
//! reference produces a failing report; only calls that cannot be compared
//! at all return [`ValidateError`].

use pixref_ops::OpsError;
use thiserror::Error;

/// Errors raised by [`validate`](crate::validate) and the generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// Argument rejected by `pixref-core`.
    #[error(transparent)]
    Core(#[from] pixref_core::Error),

    /// Argument rejected by a kernel helper.
    #[error(transparent)]
    Ops(#[from] OpsError),

    /// Too few or too many candidates.
    #[error("{task}: expected 1 to {max} candidates, got {count}")]
    CandidateCount {
        /// Task label
        task: String,
        /// Candidates supplied
        count: usize,
        /// Largest accepted count
        max: usize,
    },

    /// A candidate's length differs from the reference.
    #[error("{task}: candidate `{candidate}` has {actual} elements, reference has {expected}")]
    LengthMismatch {
        /// Task label
        task: String,
        /// Candidate name
        candidate: String,
        /// Reference length
        expected: usize,
        /// Candidate length
        actual: usize,
    },

    /// Generator parameter outside its accepted range.
    #[error("invalid generator parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for validation and input generation.
pub type ValidateResult<T> = Result<T, ValidateError>;

impl ValidateError {
    /// Creates a [`ValidateError::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Returns `true` for any rejected argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Core(e) => e.is_invalid_argument(),
            Self::Ops(e) => e.is_invalid_argument(),
            Self::CandidateCount { .. } | Self::InvalidParameter(_) => true,
            Self::LengthMismatch { .. } => false,
        }
    }

    /// Returns `true` if buffer lengths disagreed.
    pub fn is_size_mismatch(&self) -> bool {
        match self {
            Self::Core(e) => e.is_size_mismatch(),
            Self::Ops(e) => e.is_size_mismatch(),
            Self::LengthMismatch { .. } => true,
            Self::CandidateCount { .. } | Self::InvalidParameter(_) => false,
        }
    }
}
