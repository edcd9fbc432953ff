//======================================================================
// threefish/src/error.rs
// Errors from the slice-based cipher entry points.
//======================================================================

//! Error types for the Threefish crate.

use core::fmt;

/// Errors produced by the slice-based Threefish entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key, tweak or block slice does not have the length the cipher needs.
    SizeMismatch {
        /// Bytes the operation requires.
        expected: usize,
        /// Bytes that were available.
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SizeMismatch { expected, actual } => {
                write!(f, "expected {} bytes, got {}", expected, actual)
            }
        }
    }
}

impl core::error::Error for Error {}
