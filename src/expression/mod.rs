//! Propositional formulas: tokenizing, postfix conversion and evaluation
//!
//! Formulas are written in infix notation with four operators and parentheses:
//!
//! | Operator | Symbol | Precedence | Associativity |
//! |----------|--------|------------|---------------|
//! | NOT      | `!`    | 3          | right         |
//! | AND      | `&`    | 2          | left          |
//! | OR       | `\|`   | 1          | left          |
//! | IMPLIES  | `>`    | 0          | right         |
//!
//! Any other run of non-whitespace characters is an identifier. Identifiers are
//! case-insensitive and are only checked against the declared variables when the
//! formula is evaluated.
//!
//! The pipeline runs once per formula when it is defined:
//!
//! 1. [`normalize_keywords`] (English notation only) rewrites `and`, `or`, `not`,
//!    `implies`, ... to symbols
//! 2. [`tokenize`] splits the text into [`Token`]s
//! 3. [`to_postfix`] reorders the tokens with the shunting-yard algorithm
//!
//! and the resulting [`Formula`] is then [`evaluate`]d once per truth table row.
//!
//! ```
//! use argument_validator::expression::Formula;
//! use argument_validator::{Assignment, VariableSet};
//!
//! let variables = VariableSet::new(["p", "q"]).unwrap();
//! let formula = Formula::parse("F", "! p & q").unwrap();
//!
//! // p = T, q = F: (¬p) ∧ q is false
//! let assignment = Assignment::from_mask(0b10, 2);
//! assert_eq!(formula.evaluate(&variables, &assignment), Ok(false));
//! ```

mod display;
pub mod error;
mod eval;
mod formula;
mod lexer;
mod normalize;
mod postfix;
mod token;

pub use error::ExpressionError;
pub use eval::evaluate;
pub use formula::Formula;
pub use lexer::tokenize;
pub use normalize::{keyword_symbol, normalize_keywords, KEYWORDS};
pub use postfix::to_postfix;
pub use token::{Associativity, Token};

pub(crate) use token::{is_separator_char, is_symbol_char};
