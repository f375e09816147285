//! Named formulas stored in postfix form

use super::error::ExpressionError;
use super::lexer::tokenize;
use super::postfix::to_postfix;
use super::token::is_separator_char;
use super::Token;
use std::sync::Arc;

/// A named formula, converted once to postfix order
///
/// The postfix sequence is produced by [`to_postfix`] and never changes
/// afterwards; a `Formula` can only be created from infix input that converted
/// successfully. The source text is kept for display and for writing argument
/// files back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    name: Arc<str>,
    source: Arc<str>,
    postfix: Vec<Token>,
}

impl Formula {
    /// Tokenize and convert a symbol-notation formula
    ///
    /// # Examples
    ///
    /// ```
    /// use argument_validator::expression::Formula;
    ///
    /// let formula = Formula::parse("P1", "(k | m) > !a").unwrap();
    /// assert_eq!(formula.name(), "P1");
    /// assert_eq!(formula.to_postfix_string(), "k m | a ! >");
    /// ```
    pub fn parse(name: &str, source: &str) -> Result<Self, ExpressionError> {
        Self::from_tokens(name, source, &tokenize(source))
    }

    /// Convert already tokenized infix input
    ///
    /// `source` is only recorded, with every run of separator characters (line
    /// breaks included) collapsed to one space; `tokens` is what gets converted.
    pub fn from_tokens(name: &str, source: &str, tokens: &[Token]) -> Result<Self, ExpressionError> {
        let postfix = to_postfix(tokens)?;
        let source = source
            .split(is_separator_char)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(Formula {
            name: Arc::from(name),
            source: Arc::from(source),
            postfix,
        })
    }

    /// Display name, e.g. `P1` or `Conclusion`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle on the display name
    pub fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// The text the formula was created from, on a single line
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Postfix token sequence
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Postfix tokens joined by spaces
    pub fn to_postfix_string(&self) -> String {
        self.postfix
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
