//! Error types for cube and cover construction

use std::fmt;
use std::io;

/// Errors raised when parsing a cube from its textual bit-string form
///
/// Cube strings are fixed-width words over the alphabet `{0, 1, -}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeParseError {
    /// The bit-string contains a character outside `{0, 1, -}`
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Byte position of the character in the input
        position: usize,
        /// The full input string that failed to parse
        input: String,
    },
}

impl fmt::Display for CubeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeParseError::InvalidCharacter {
                character,
                position,
                input,
            } => write!(
                f,
                "Invalid cube character '{}' at position {} in {:?}. Expected '0', '1' or '-'.",
                character, position, input
            ),
        }
    }
}

impl std::error::Error for CubeParseError {}

impl From<CubeParseError> for io::Error {
    fn from(err: CubeParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised by cover-level operations
///
/// These occur when cubes or covers of incompatible shapes are combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// Attempted to insert a cube whose width differs from the cover's
    WidthMismatch {
        /// Width of the cover (number of variables)
        expected: usize,
        /// Width of the rejected cube
        actual: usize,
    },
    /// Attempted to combine two covers over different variable lists
    VariableMismatch {
        /// Variables of the left-hand cover
        left: Vec<String>,
        /// Variables of the right-hand cover
        right: Vec<String>,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::WidthMismatch { expected, actual } => write!(
                f,
                "Cube width {} does not match cover width {}",
                actual, expected
            ),
            CoverError::VariableMismatch { left, right } => write!(
                f,
                "Covers range over different variables: [{}] vs [{}]",
                left.join(","),
                right.join(","),
            ),
        }
    }
}

impl std::error::Error for CoverError {}

impl From<CoverError> for io::Error {
    fn from(err: CoverError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors raised when parsing a cover from its textual form
///
/// The textual form is a comma-joined variable list followed by the cube
/// strings, e.g. `a,b,c,10-,-01`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverParseError {
    /// No split of the tokens into variables and matching-width cubes fits
    MalformedCover {
        /// The full input string that failed to parse
        input: String,
    },
}

impl fmt::Display for CoverParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverParseError::MalformedCover { input } => write!(
                f,
                "Malformed cover string {:?}. Expected a comma-joined variable list \
                 followed by cube strings as wide as the variable list.",
                input
            ),
        }
    }
}

impl std::error::Error for CoverParseError {}

impl From<CoverParseError> for io::Error {
    fn from(err: CoverParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_cube_parse_error_display() {
        let err = CubeParseError::InvalidCharacter {
            character: 'x',
            position: 2,
            input: "10x".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'x'"));
        assert!(msg.contains("position 2"));
        assert!(msg.contains("\"10x\""));
    }

    #[test]
    fn test_width_mismatch_display() {
        let err = CoverError::WidthMismatch {
            expected: 3,
            actual: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("width 4"));
        assert!(msg.contains("width 3"));
    }

    #[test]
    fn test_cube_parse_error_to_io_error() {
        let err = CubeParseError::InvalidCharacter {
            character: '2',
            position: 0,
            input: "2".to_string(),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_cover_error_to_io_error() {
        let err = CoverError::WidthMismatch {
            expected: 2,
            actual: 5,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_cover_parse_error_display() {
        let err = CoverParseError::MalformedCover {
            input: "a,,b".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"a,,b\""));
        assert!(msg.contains("variable list"));
    }

    #[test]
    fn test_cover_parse_error_to_io_error() {
        let err = CoverParseError::MalformedCover {
            input: String::new(),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
