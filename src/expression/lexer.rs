//! Tokenizing of symbol-notation formulas

use super::token::{is_separator_char, is_symbol_char, Token};
use crate::logging::targets;

/// Split a formula written with `! & | >` and parentheses into tokens
///
/// Lexing cannot fail: any character that is neither whitespace nor one of the
/// six symbol characters becomes part of an identifier, and whether that
/// identifier names a declared variable is only checked during evaluation.
/// ASCII letters are lowercased as they are consumed.
///
/// # Examples
///
/// ```
/// use argument_validator::expression::{tokenize, Token};
///
/// let tokens = tokenize("!P&q");
/// assert_eq!(
///     tokens,
///     vec![Token::Not, Token::variable("p"), Token::And, Token::variable("q")]
/// );
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    fn flush(current: &mut String, tokens: &mut Vec<Token>) {
        if !current.is_empty() {
            tokens.push(Token::variable(current));
            current.clear();
        }
    }

    for c in expression.chars() {
        if is_separator_char(c) {
            flush(&mut current, &mut tokens);
        } else if is_symbol_char(c) {
            flush(&mut current, &mut tokens);
            if let Some(token) = Token::from_symbol(c) {
                tokens.push(token);
            }
        } else {
            current.push(c.to_ascii_lowercase());
        }
    }
    flush(&mut current, &mut tokens);

    log::trace!(target: targets::LEXER, "Tokenized {expression:?} into {} tokens", tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Token {
        Token::variable(name)
    }

    #[test]
    fn test_whitespace_separates_identifiers() {
        assert_eq!(tokenize("p q\tr\n s\r"), vec![var("p"), var("q"), var("r"), var("s")]);
    }

    #[test]
    fn test_symbols_flush_identifiers() {
        assert_eq!(
            tokenize("(rain|snow)>cold"),
            vec![
                Token::LeftParen,
                var("rain"),
                Token::Or,
                var("snow"),
                Token::RightParen,
                Token::Implies,
                var("cold"),
            ]
        );
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(tokenize("AbC & abc"), vec![var("abc"), Token::And, var("abc")]);
    }

    #[test]
    fn test_unrecognized_characters_join_identifiers() {
        assert_eq!(tokenize("p1 = q_2"), vec![var("p1"), var("="), var("q_2")]);
        assert_eq!(tokenize("x~y"), vec![var("x~y")]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t ").is_empty());
    }

    #[test]
    fn test_adjacent_symbols() {
        assert_eq!(
            tokenize("!!(p)"),
            vec![Token::Not, Token::Not, Token::LeftParen, var("p"), Token::RightParen]
        );
    }
}
