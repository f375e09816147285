//! Display formatting for tokens and formulas

use super::{Formula, Token};
use std::fmt;

/// Tokens display as the symbol they are written with, variables as their name
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "{}", name),
            other => match other.symbol() {
                Some(symbol) => write!(f, "{}", symbol),
                None => Ok(()),
            },
        }
    }
}

/// Formulas display as `name: source`
///
/// # Examples
///
/// ```
/// use argument_validator::expression::Formula;
///
/// let formula = Formula::parse("P2", "a | m").unwrap();
/// assert_eq!(formula.to_string(), "P2: a | m");
/// ```
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(Token::variable("Rain").to_string(), "rain");
        assert_eq!(Token::Implies.to_string(), ">");
        assert_eq!(Token::LeftParen.to_string(), "(");
    }
}
