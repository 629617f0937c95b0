//! Error types for boolean expression parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Error returned by [`BoolExpr::parse`](super::BoolExpr::parse)
///
/// Carries the parser's own message, the offending input and, when the
/// parser reported one, the byte offset of the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// The input is not a well-formed boolean expression
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The input string that failed to parse
        input: Arc<str>,
        /// Byte offset of the failure in the input, when known
        offset: Option<usize>,
    },
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::InvalidSyntax {
                message,
                input,
                offset,
            } => {
                write!(f, "Cannot parse {:?} as a boolean expression: {}", input, message)?;
                if let Some(offset) = offset {
                    write!(f, " (byte {})", offset)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_offset() {
        let err = ExpressionParseError::InvalidSyntax {
            message: Arc::from("unexpected token"),
            input: Arc::from("a * b ++"),
            offset: Some(6),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"a * b ++\""));
        assert!(msg.contains("unexpected token"));
        assert!(msg.contains("byte 6"));
    }

    #[test]
    fn test_display_without_offset() {
        let err = ExpressionParseError::InvalidSyntax {
            message: Arc::from("unexpected end"),
            input: Arc::from("a * b +"),
            offset: None,
        };
        let msg = err.to_string();
        assert!(!msg.contains("byte"));
        assert!(msg.contains("unexpected end"));
    }

    #[test]
    fn test_conversion_to_io_error() {
        let err = ExpressionParseError::InvalidSyntax {
            message: Arc::from("test"),
            input: Arc::from("bad input"),
            offset: Some(5),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
