//! Postfix evaluation of formulas

use super::error::ExpressionError;
use super::{Formula, Token};
use crate::table::Assignment;
use crate::variables::VariableSet;

impl Formula {
    /// Evaluate the formula under an assignment of the declared variables
    ///
    /// See [`evaluate`] for the failure conditions.
    pub fn evaluate(
        &self,
        variables: &VariableSet,
        assignment: &Assignment,
    ) -> Result<bool, ExpressionError> {
        evaluate(self, variables, assignment)
    }
}

/// Evaluate a postfix formula with a local boolean stack
///
/// Each identifier is looked up in `variables` and replaced by its value in
/// `assignment`. Binary operators take the earlier operand as their left side,
/// so `p q >` is `p → q`. Evaluation fails when
///
/// - an identifier is not declared ([`ExpressionError::UnknownVariable`]),
/// - an operator finds too few values ([`ExpressionError::Arity`]),
/// - the stack does not end with exactly one value
///   ([`ExpressionError::MalformedResult`]).
///
/// # Examples
///
/// ```
/// use argument_validator::expression::{evaluate, Formula};
/// use argument_validator::{Assignment, VariableSet};
///
/// let variables = VariableSet::new(["p", "q", "r"]).unwrap();
/// let formula = Formula::parse("F", "p > q > r").unwrap();
///
/// // p = T, q = F, r = F
/// let assignment = Assignment::from_mask(0b100, variables.len());
/// assert_eq!(evaluate(&formula, &variables, &assignment), Ok(true));
/// ```
pub fn evaluate(
    formula: &Formula,
    variables: &VariableSet,
    assignment: &Assignment,
) -> Result<bool, ExpressionError> {
    let mut stack: Vec<bool> = Vec::with_capacity(formula.postfix().len());

    for token in formula.postfix() {
        match token {
            Token::Variable(name) => {
                let value = variables
                    .position(name)
                    .and_then(|index| assignment.get(index))
                    .ok_or_else(|| ExpressionError::UnknownVariable {
                        name: name.clone(),
                    })?;
                stack.push(value);
            }
            Token::Not => {
                let operand = pop_operands::<1>(&mut stack, token)?;
                stack.push(!operand[0]);
            }
            Token::And | Token::Or | Token::Implies => {
                let [left, right] = pop_operands::<2>(&mut stack, token)?;
                stack.push(match token {
                    Token::And => left && right,
                    Token::Or => left || right,
                    _ => !left || right,
                });
            }
            // Conversion consumes every parenthesis
            Token::LeftParen | Token::RightParen => {
                return Err(ExpressionError::UnbalancedParentheses);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(ExpressionError::MalformedResult { depth: stack.len() }),
    }
}

/// Pop `N` operands, returned in the order they were pushed
fn pop_operands<const N: usize>(
    stack: &mut Vec<bool>,
    operator: &Token,
) -> Result<[bool; N], ExpressionError> {
    if stack.len() < N {
        return Err(ExpressionError::Arity {
            operator: operator.clone(),
            expected: N,
            found: stack.len(),
        });
    }
    let mut operands = [false; N];
    operands.copy_from_slice(&stack[stack.len() - N..]);
    stack.truncate(stack.len() - N);
    Ok(operands)
}
