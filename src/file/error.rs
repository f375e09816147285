//! Error types for the argument file format

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to argument file parsing
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentFileError {
    /// A line starting with `.` that is not a known directive
    UnknownDirective {
        /// Line number
        line: usize,
        /// The directive as written
        directive: Arc<str>,
    },
    /// A directive that may appear only once appeared again
    DuplicateDirective {
        /// Line number of the repetition
        line: usize,
        /// The repeated directive
        directive: &'static str,
    },
    /// A required directive is absent
    MissingDirective {
        /// The missing directive
        directive: &'static str,
    },
    /// `.mode` with something other than `symbols` or `english`
    InvalidMode {
        /// Line number
        line: usize,
        /// The value given
        value: Arc<str>,
    },
    /// A non-empty, non-comment line that is not a directive
    UnexpectedLine {
        /// Line number
        line: usize,
        /// The line content
        text: Arc<str>,
    },
}

impl fmt::Display for ArgumentFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentFileError::UnknownDirective { line, directive } => {
                write!(f, "Unknown directive '{}' on line {}", directive, line)
            }
            ArgumentFileError::DuplicateDirective { line, directive } => {
                write!(f, "Directive {} repeated on line {}", directive, line)
            }
            ArgumentFileError::MissingDirective { directive } => {
                write!(f, "Argument file missing {} directive", directive)
            }
            ArgumentFileError::InvalidMode { line, value } => write!(
                f,
                "Invalid .mode value '{}' on line {} (expected 'symbols' or 'english')",
                value, line
            ),
            ArgumentFileError::UnexpectedLine { line, text } => {
                write!(f, "Unexpected content on line {}: {:?}", line, text)
            }
        }
    }
}

impl std::error::Error for ArgumentFileError {}

impl From<ArgumentFileError> for io::Error {
    fn from(err: ArgumentFileError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_line_numbers() {
        let err = ArgumentFileError::UnknownDirective {
            line: 4,
            directive: Arc::from(".i"),
        };
        assert_eq!(err.to_string(), "Unknown directive '.i' on line 4");

        let err = ArgumentFileError::InvalidMode {
            line: 2,
            value: Arc::from("latin"),
        };
        assert!(err.to_string().contains("'latin' on line 2"));
    }

    #[test]
    fn test_to_io_error() {
        let err = ArgumentFileError::MissingDirective {
            directive: ".vars",
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
