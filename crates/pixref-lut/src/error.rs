//! Error type for lookup-table kernels.

use thiserror::Error;

/// Errors that can occur during LUT operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LutError {
    /// Buffer, restriction or cube failure from `pixref-core`.
    #[error(transparent)]
    Core(#[from] pixref_core::Error),

    /// Flat table of the wrong length.
    #[error("invalid LUT size: expected {expected} entries, got {actual}")]
    InvalidSize {
        /// Entries required
        expected: usize,
        /// Entries supplied
        actual: usize,
    },
}

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

impl LutError {
    /// Returns `true` for any rejected argument, including a bad table size.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Core(e) => e.is_invalid_argument(),
            Self::InvalidSize { .. } => true,
        }
    }
}
