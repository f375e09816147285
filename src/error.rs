//! Error types for the argument validator
//!
//! This module provides the crate-level error type. Each stage has its own error
//! type ([`ExpressionError`], [`VariableError`], [`TableError`],
//! [`ArgumentFileError`]) which converts into [`ValidatorError`] with `?`.

use crate::expression::ExpressionError;
use crate::file::ArgumentFileError;
use crate::table::TableError;
use crate::variables::VariableError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for the argument validator
///
/// Every variant is recoverable: the caller decides whether to re-prompt, abort
/// or report. The engine itself performs no retries.
#[derive(Debug)]
pub enum ValidatorError {
    /// A premise or the conclusion could not be converted to postfix
    Expression {
        /// Display name of the formula (`P1`, `Conclusion`, ...)
        formula: Arc<str>,
        /// Why conversion failed
        source: ExpressionError,
    },

    /// The declared variables were rejected
    Variables(VariableError),

    /// A formula could not be evaluated on some row of the truth table
    ///
    /// Usually a formula that names an undeclared variable, or one with missing
    /// operands.
    Table(TableError),

    /// A configured limit would be exceeded
    ///
    /// Limits are checked before any table is built; nothing is truncated.
    CapacityExceeded {
        /// What was being counted
        capacity: Capacity,
        /// The configured maximum
        limit: usize,
        /// The count that was requested
        requested: usize,
    },

    /// An argument was evaluated before its conclusion was set
    MissingConclusion,

    /// Invalid input provided to a function
    ///
    /// Used for general input validation failures, such as a variable or premise
    /// count typed into an interactive session that is out of range.
    InvalidInput {
        /// Description of what was invalid
        message: String,
    },

    /// An argument file could not be interpreted
    File(ArgumentFileError),

    /// IO error wrapper
    Io(io::Error),
}

/// The limit a [`ValidatorError::CapacityExceeded`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// Number of declared variables
    Variables,
    /// Number of premises
    Premises,
    /// Number of tokens in a single formula
    Tokens,
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Variables => write!(f, "variables"),
            Capacity::Premises => write!(f, "premises"),
            Capacity::Tokens => write!(f, "tokens per formula"),
        }
    }
}

impl fmt::Display for ValidatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorError::Expression { formula, source } => {
                write!(f, "Malformed {}: {}", formula, source)
            }
            ValidatorError::Variables(err) => write!(f, "{}", err),
            ValidatorError::Table(err) => write!(
                f,
                "Error: malformed expression or unknown variable. {}",
                err
            ),
            ValidatorError::CapacityExceeded {
                capacity,
                limit,
                requested,
            } => write!(
                f,
                "Too many {}: {} requested, at most {} supported",
                capacity, requested, limit
            ),
            ValidatorError::MissingConclusion => {
                write!(f, "The argument has no conclusion")
            }
            ValidatorError::InvalidInput { message } => write!(f, "{}", message),
            ValidatorError::File(err) => write!(f, "{}", err),
            ValidatorError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ValidatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidatorError::Expression { source, .. } => Some(source),
            ValidatorError::Variables(err) => Some(err),
            ValidatorError::Table(err) => Some(err),
            ValidatorError::File(err) => Some(err),
            ValidatorError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ValidatorError {
    fn from(err: io::Error) -> Self {
        ValidatorError::Io(err)
    }
}

impl From<VariableError> for ValidatorError {
    fn from(err: VariableError) -> Self {
        ValidatorError::Variables(err)
    }
}

impl From<TableError> for ValidatorError {
    fn from(err: TableError) -> Self {
        ValidatorError::Table(err)
    }
}

impl From<ArgumentFileError> for ValidatorError {
    fn from(err: ArgumentFileError) -> Self {
        ValidatorError::File(err)
    }
}

// Conversion from ValidatorError to io::Error for callers working in io::Result
impl From<ValidatorError> for io::Error {
    fn from(err: ValidatorError) -> Self {
        match err {
            ValidatorError::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_capacity_display() {
        let err = ValidatorError::CapacityExceeded {
            capacity: Capacity::Variables,
            limit: 8,
            requested: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("Too many variables"));
        assert!(msg.contains("9 requested"));
        assert!(msg.contains("at most 8"));
    }

    #[test]
    fn test_expression_display_names_formula() {
        let err = ValidatorError::Expression {
            formula: Arc::from("P2"),
            source: ExpressionError::UnbalancedParentheses,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Malformed P2"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_table_error_message() {
        let err: ValidatorError = TableError {
            row: 3,
            formula: Arc::from("Conclusion"),
            source: ExpressionError::UnknownVariable {
                name: Arc::from("z"),
            },
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("malformed expression or unknown variable"));
        assert!(msg.contains("'z'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ValidatorError = io_err.into();
        assert!(err.to_string().contains("file not found"));

        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);

        let back: io::Error = ValidatorError::MissingConclusion.into();
        assert_eq!(back.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_error_trait_source() {
        assert!(ValidatorError::MissingConclusion.source().is_none());
        let err = ValidatorError::Variables(VariableError::Empty);
        assert!(err.source().is_some());
    }
}
