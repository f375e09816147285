//! Error types for formula conversion and evaluation

use super::Token;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while converting or evaluating a formula
///
/// Lexing never fails, so every variant comes from either the infix to postfix
/// converter or the postfix evaluator. All of them mean that no value was
/// produced; the engine never substitutes a default boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// A `)` without a matching `(`, or a `(` that was never closed
    UnbalancedParentheses,
    /// An operator found fewer operands on the evaluation stack than it consumes
    Arity {
        /// The operator that was applied
        operator: Token,
        /// Number of operands the operator consumes
        expected: usize,
        /// Number of values that were available
        found: usize,
    },
    /// An identifier that is not among the declared variables
    UnknownVariable {
        /// The (lowercased) identifier
        name: Arc<str>,
    },
    /// Evaluation finished with a stack depth other than one
    MalformedResult {
        /// Number of values left on the stack
        depth: usize,
    },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::UnbalancedParentheses => {
                write!(f, "Malformed expression: unbalanced parentheses")
            }
            ExpressionError::Arity {
                operator,
                expected,
                found,
            } => write!(
                f,
                "Malformed expression: operator '{}' needs {} operand(s) but {} available",
                operator, expected, found
            ),
            ExpressionError::UnknownVariable { name } => {
                write!(f, "Unknown variable '{}'", name)
            }
            ExpressionError::MalformedResult { depth } => write!(
                f,
                "Malformed expression: evaluation left {} value(s) instead of one",
                depth
            ),
        }
    }
}

impl std::error::Error for ExpressionError {}

impl From<ExpressionError> for io::Error {
    fn from(err: ExpressionError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
