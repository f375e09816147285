//! Infix to postfix conversion (shunting-yard)

use super::error::ExpressionError;
use super::token::{Associativity, Token};
use crate::logging::targets;

/// Convert infix tokens to postfix (reverse Polish) order
///
/// Precedence from tightest to loosest is NOT, AND, OR, IMPLIES. NOT and IMPLIES
/// are right-associative, so an incoming operator of either kind does not pop an
/// operator of equal precedence; AND and OR are left-associative and do.
///
/// Fails with [`ExpressionError::UnbalancedParentheses`] on a `)` that has no
/// matching `(` or on a `(` that is still open at the end of the input. No
/// partial output is returned.
///
/// Operand counts are not checked here; a formula such as `p & & q` converts but
/// is rejected when it is evaluated.
///
/// # Examples
///
/// ```
/// use argument_validator::expression::{to_postfix, tokenize, Token};
///
/// let postfix = to_postfix(&tokenize("p > q > r")).unwrap();
/// assert_eq!(
///     postfix,
///     vec![
///         Token::variable("p"),
///         Token::variable("q"),
///         Token::variable("r"),
///         Token::Implies,
///         Token::Implies,
///     ]
/// );
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ExpressionError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Variable(_) => output.push(token.clone()),
            Token::LeftParen => stack.push(Token::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(operator) => output.push(operator),
                    None => {
                        log::debug!(target: targets::POSTFIX, "Unmatched ')' in {tokens:?}");
                        return Err(ExpressionError::UnbalancedParentheses);
                    }
                }
            },
            Token::Not | Token::And | Token::Or | Token::Implies => {
                while let Some(top) = stack.last() {
                    if should_pop(top, token) {
                        output.extend(stack.pop());
                    } else {
                        break;
                    }
                }
                stack.push(token.clone());
            }
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::LeftParen | Token::RightParen) {
            log::debug!(target: targets::POSTFIX, "Unclosed '(' in {tokens:?}");
            return Err(ExpressionError::UnbalancedParentheses);
        }
        output.push(top);
    }

    log::trace!(target: targets::POSTFIX, "Postfix: {output:?}");
    Ok(output)
}

/// Whether the operator on top of the stack is emitted before `incoming` is pushed
///
/// A parenthesis on the stack has no precedence and always stops popping.
fn should_pop(top: &Token, incoming: &Token) -> bool {
    let (Some(top_precedence), Some(precedence)) = (top.precedence(), incoming.precedence())
    else {
        return false;
    };
    top_precedence > precedence
        || (top_precedence == precedence
            && incoming.associativity() == Some(Associativity::Left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::tokenize;

    fn postfix(source: &str) -> Result<String, ExpressionError> {
        to_postfix(&tokenize(source)).map(|tokens| {
            tokens
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    #[test]
    fn test_not_binds_tighter_than_and() {
        assert_eq!(postfix("! p & q").unwrap(), "p ! q &");
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(postfix("p | q & r").unwrap(), "p q r & |");
        assert_eq!(postfix("p & q | r").unwrap(), "p q & r |");
    }

    #[test]
    fn test_or_binds_tighter_than_implies() {
        assert_eq!(postfix("p > q | r").unwrap(), "p q r | >");
        assert_eq!(postfix("p | q > r").unwrap(), "p q | r >");
    }

    #[test]
    fn test_left_associative_operators() {
        assert_eq!(postfix("p & q & r").unwrap(), "p q & r &");
        assert_eq!(postfix("p | q | r").unwrap(), "p q | r |");
    }

    #[test]
    fn test_right_associative_operators() {
        assert_eq!(postfix("p > q > r").unwrap(), "p q r > >");
        assert_eq!(postfix("! ! p").unwrap(), "p ! !");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix("( p | q ) > ! r").unwrap(), "p q | r ! >");
        assert_eq!(postfix("! ( p & q )").unwrap(), "p q & !");
        assert_eq!(postfix("(p > q) > r").unwrap(), "p q > r >");
    }

    #[test]
    fn test_unclosed_left_paren() {
        assert_eq!(postfix("( p & q"), Err(ExpressionError::UnbalancedParentheses));
        assert_eq!(postfix("(("), Err(ExpressionError::UnbalancedParentheses));
    }

    #[test]
    fn test_unmatched_right_paren() {
        assert_eq!(postfix("p & q )"), Err(ExpressionError::UnbalancedParentheses));
        assert_eq!(postfix(") p ("), Err(ExpressionError::UnbalancedParentheses));
    }

    #[test]
    fn test_operand_errors_pass_conversion() {
        assert_eq!(postfix("p & & q").unwrap(), "p & q &");
        assert_eq!(postfix("").unwrap(), "");
    }
}
