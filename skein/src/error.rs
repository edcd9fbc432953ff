//======================================================================
// skein/src/error.rs
// Configuration and output errors.
//======================================================================

//! Error types for the Skein crate.

use core::fmt;

/// Errors produced while configuring or finalizing a Skein context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A requested size lies outside its permitted range.
    OutOfRange {
        /// The rejected value.
        value: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },
    /// Unbounded output was requested from a context that produces a
    /// fixed-size digest.
    UnboundedOutput,
    /// An output buffer is shorter than the digest it must receive.
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
            Error::OutOfRange { value, min, max } => {
                write!(f, "value {} is outside the range [{}, {}]", value, min, max)
            }
            Error::UnboundedOutput => {
                f.write_str("unbounded output needs an XOF type, not a fixed-size context")
            }
            Error::SizeMismatch { expected, actual } => {
                write!(f, "expected at least {} bytes, got {}", expected, actual)
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::format;

    #[test]
    fn display_out_of_range() {
        let err = Error::OutOfRange { value: 0, min: 1, max: 536870912 };
        assert_eq!(format!("{}", err), "value 0 is outside the range [1, 536870912]");
    }

    #[test]
    fn display_unbounded_output() {
        assert_eq!(
            format!("{}", Error::UnboundedOutput),
            "unbounded output needs an XOF type, not a fixed-size context"
        );
    }

    #[test]
    fn display_size_mismatch() {
        let err = Error::SizeMismatch { expected: 64, actual: 10 };
        assert_eq!(format!("{}", err), "expected at least 64 bytes, got 10");
    }
}
