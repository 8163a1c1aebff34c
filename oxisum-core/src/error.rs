//! Error types for OxiSum operations.
//!
//! The checksum engines themselves are pure and infallible once built; errors
//! occur at construction time (invalid parameter sets), when validating
//! caller-supplied buffer ranges, and when consuming readers in the facade.

use std::io;
use thiserror::Error;

/// The main error type for OxiSum operations.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// I/O error from an underlying reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A parameter set requested reflected input but unreflected output (or
    /// vice versa). Mixed reflection is not supported.
    #[error("{name}: reflect_input must match reflect_output, uneven reflection is not supported")]
    UnevenReflection {
        /// Display name of the offending parameter set.
        name: String,
    },

    /// An offset/count pair fell outside the supplied buffer.
    #[error("Range out of bounds: offset {offset} + count {count} exceeds buffer length {len}")]
    OutOfRange {
        /// Requested start offset.
        offset: usize,
        /// Requested byte count.
        count: usize,
        /// Actual buffer length.
        len: usize,
    },

    /// An algorithm identifier was not recognized.
    #[error("Unsupported algorithm: {name}")]
    UnsupportedAlgorithm {
        /// The unrecognized identifier.
        name: String,
    },
}

/// Result type alias for OxiSum operations.
pub type Result<T> = std::result::Result<T, ChecksumError>;

impl ChecksumError {
    /// Create an uneven reflection error.
    pub fn uneven_reflection(name: impl Into<String>) -> Self {
        Self::UnevenReflection { name: name.into() }
    }

    /// Create an out of range error.
    pub fn out_of_range(offset: usize, count: usize, len: usize) -> Self {
        Self::OutOfRange { offset, count, len }
    }

    /// Create an unsupported algorithm error.
    pub fn unsupported_algorithm(name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChecksumError::uneven_reflection("CRC-32/BAD");
        assert!(err.to_string().contains("CRC-32/BAD"));
        assert!(err.to_string().contains("reflect_input"));

        let err = ChecksumError::out_of_range(8, 16, 9);
        assert!(err.to_string().contains("offset 8"));
        assert!(err.to_string().contains("length 9"));

        let err = ChecksumError::unsupported_algorithm("MD5");
        assert!(err.to_string().contains("MD5"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        let err: ChecksumError = io_err.into();
        assert!(matches!(err, ChecksumError::Io(_)));
    }
}
