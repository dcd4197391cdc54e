//! Error types for fretboard operations.
//!
//! This module provides the main error type [`FretboardError`]. Every error is
//! raised synchronously where the problem is detected; no partial diagram is
//! ever produced.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for fretboard operations.
///
/// # Diagnostic Variants
///
/// [`FretboardError::MalformedChord`] keeps the offending notation and, when
/// the problem can be pinned to a token, its byte span. This is enough for
/// rich error reporting in front-ends.
#[derive(Debug, Error)]
pub enum FretboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Malformed chord `{notation}`: {message}")]
    MalformedChord {
        message: String,
        notation: String,
        span: Option<Range<usize>>,
    },

    #[error("Invalid style override: {0}")]
    InvalidStyleOverride(String),

    #[error("String {index} is out of range for an instrument with {count} strings")]
    StringOutOfRange { index: usize, count: usize },
}

impl FretboardError {
    /// Create a new `MalformedChord` error for the given notation.
    pub fn malformed_chord(
        message: impl Into<String>,
        notation: impl Into<String>,
        span: Option<Range<usize>>,
    ) -> Self {
        Self::MalformedChord {
            message: message.into(),
            notation: notation.into(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_chord_display() {
        let err = FretboardError::malformed_chord("unexpected token `q`", "x3q", Some(2..3));
        assert_eq!(err.to_string(), "Malformed chord `x3q`: unexpected token `q`");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: FretboardError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, FretboardError::Io(_)));
    }

    #[test]
    fn test_string_out_of_range_display() {
        let err = FretboardError::StringOutOfRange { index: 6, count: 6 };
        assert_eq!(
            err.to_string(),
            "String 6 is out of range for an instrument with 6 strings"
        );
    }
}
