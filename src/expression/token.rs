//! Token type shared by the lexer, the converter and the evaluator

use std::sync::Arc;

/// A single lexical unit of a propositional formula
///
/// Variable names are stored lowercased, so two `Variable` tokens are equal when
/// their names match case-insensitively in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An identifier naming a declared variable
    Variable(Arc<str>),
    /// Negation, `!`
    Not,
    /// Conjunction, `&`
    And,
    /// Inclusive disjunction, `|`
    Or,
    /// Material implication, `>`
    Implies,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// Operator associativity, used to break precedence ties during conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` groups as `(a op b) op c`
    Left,
    /// `a op b op c` groups as `a op (b op c)`
    Right,
}

impl Token {
    /// Create a variable token, folding the name to lowercase
    pub fn variable(name: &str) -> Self {
        Token::Variable(Arc::from(name.to_ascii_lowercase().as_str()))
    }

    /// Map one of the single-character operator symbols to its token
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '!' => Some(Token::Not),
            '&' => Some(Token::And),
            '|' => Some(Token::Or),
            '>' => Some(Token::Implies),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        }
    }

    /// The symbol this token is written with, `None` for variables
    pub fn symbol(&self) -> Option<char> {
        match self {
            Token::Variable(_) => None,
            Token::Not => Some('!'),
            Token::And => Some('&'),
            Token::Or => Some('|'),
            Token::Implies => Some('>'),
            Token::LeftParen => Some('('),
            Token::RightParen => Some(')'),
        }
    }

    /// Binding strength of an operator; higher binds tighter
    ///
    /// Returns `None` for variables and parentheses.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::Not => Some(3),
            Token::And => Some(2),
            Token::Or => Some(1),
            Token::Implies => Some(0),
            _ => None,
        }
    }

    /// Associativity of an operator, `None` for variables and parentheses
    pub fn associativity(&self) -> Option<Associativity> {
        match self {
            Token::Not | Token::Implies => Some(Associativity::Right),
            Token::And | Token::Or => Some(Associativity::Left),
            _ => None,
        }
    }
}

/// Characters that always form a token on their own
pub(crate) fn is_symbol_char(c: char) -> bool {
    matches!(c, '(' | ')' | '!' | '&' | '|' | '>')
}

/// Characters that end an identifier run and are otherwise discarded
pub(crate) fn is_separator_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_is_lowercased() {
        assert_eq!(Token::variable("PQ"), Token::variable("pq"));
        assert_eq!(Token::variable("Rain"), Token::Variable(Arc::from("rain")));
    }

    #[test]
    fn test_precedence_order() {
        let not = Token::Not.precedence().unwrap();
        let and = Token::And.precedence().unwrap();
        let or = Token::Or.precedence().unwrap();
        let implies = Token::Implies.precedence().unwrap();
        assert!(not > and && and > or && or > implies);
        assert_eq!(Token::LeftParen.precedence(), None);
        assert_eq!(Token::variable("p").precedence(), None);
    }

    #[test]
    fn test_symbols_round_trip() {
        for c in ['!', '&', '|', '>', '(', ')'] {
            assert_eq!(Token::from_symbol(c).and_then(|t| t.symbol()), Some(c));
        }
        assert_eq!(Token::from_symbol('x'), None);
    }
}
