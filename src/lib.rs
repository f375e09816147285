//! # Argument Validator
//!
//! Truth-table checking of propositional arguments: given named boolean
//! variables, zero or more premises and a conclusion, decide whether the
//! argument is **valid** (the conclusion holds whenever every premise holds) and
//! whether premises and conclusion are jointly **satisfiable**, and produce the
//! truth table that supports the verdict.
//!
//! ## Overview
//!
//! Formulas are written with `!` (NOT), `&` (AND), `|` (OR), `>` (IMPLIES) and
//! parentheses, or with the English keywords `not`, `and`, `or`, `implies`/`then`
//! when [`ValidatorConfig::natural_language`] is set.
//!
//! ```
//! use argument_validator::{Argument, ValidatorConfig};
//!
//! # fn main() -> Result<(), argument_validator::ValidatorError> {
//! let mut argument = Argument::new(["k", "m", "a"], ValidatorConfig::default())?;
//! argument.add_premise("(k | m) > !a")?;
//! argument.add_premise("a | m")?;
//! argument.set_conclusion("a | !k")?;
//!
//! let evaluation = argument.evaluate()?;
//! assert_eq!(evaluation.table.num_rows(), 8);
//! assert!(evaluation.verdict.satisfiable);
//! assert!(!evaluation.verdict.valid);
//! assert_eq!(evaluation.verdict.counterexample, Some(6)); // k = T, m = T, a = F
//!
//! println!("{}", evaluation.table);
//! println!("{}", evaluation.report());
//! # Ok(())
//! # }
//! ```
//!
//! ## Layers
//!
//! - [`expression`] - tokenizing, infix to postfix conversion and evaluation of a
//!   single formula
//! - [`table`] - enumerating all `2^N` assignments into a [`TruthTable`]
//! - [`analysis`] - deriving the [`Verdict`] from a table
//! - [`Argument`] - declaring variables and formulas with capacity checks, then
//!   running the layers above
//! - [`file`] - reading and writing arguments in a line-oriented file format
//! - [`interactive`] - a prompt-driven session over any reader and writer
//!
//! ## Thread Safety
//!
//! There is no global or shared mutable state. Every conversion and evaluation
//! uses stacks local to the call, so arguments can be evaluated on as many
//! threads as needed without synchronization.

// Public modules
pub mod analysis;
pub mod argument;
pub mod error;
pub mod expression;
pub mod file;
pub mod interactive;
pub mod logging;
pub mod table;
pub mod variables;

// Re-export high-level public API
pub use analysis::{analyze, Verdict, VerdictReport};
pub use argument::{Argument, Evaluation};
pub use error::{Capacity, ValidatorError};
pub use expression::{ExpressionError, Formula, Token};
pub use table::{Assignment, TableError, TruthTable};
pub use variables::{VariableError, VariableSet, DEFAULT_MAX_VARIABLES, MAX_SUPPORTED_VARIABLES};

/// Number of premises supported unless configured otherwise
pub const DEFAULT_MAX_PREMISES: usize = 8;

/// Number of tokens a single formula may have unless configured otherwise
pub const DEFAULT_MAX_TOKENS: usize = 64;

/// Configuration for declaring and evaluating arguments
///
/// The limits are enforced by [`Argument`] before any table is built; the truth
/// table grows as `2^N` in the number of variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Maximum number of declared variables
    pub max_variables: usize,
    /// Maximum number of premises
    pub max_premises: usize,
    /// Maximum number of tokens in one formula
    pub max_tokens: usize,
    /// Rewrite English keywords (`and`, `or`, `not`, `implies`, ...) to symbols
    /// before tokenizing
    pub natural_language: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            max_variables: DEFAULT_MAX_VARIABLES,
            max_premises: DEFAULT_MAX_PREMISES,
            max_tokens: DEFAULT_MAX_TOKENS,
            natural_language: false,
        }
    }
}

impl ValidatorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether English keywords are accepted
    pub fn with_natural_language(mut self, natural_language: bool) -> Self {
        self.natural_language = natural_language;
        self
    }

    /// Set the maximum number of variables
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    /// Set the maximum number of premises
    pub fn with_max_premises(mut self, max_premises: usize) -> Self {
        self.max_premises = max_premises;
        self
    }

    /// Set the maximum number of tokens per formula
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// The variable limit actually enforced: `max_variables`, capped at
    /// [`MAX_SUPPORTED_VARIABLES`]
    pub fn variable_limit(&self) -> usize {
        self.max_variables.min(MAX_SUPPORTED_VARIABLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = ValidatorConfig::new();
        assert_eq!(config.max_variables, 8);
        assert_eq!(config.max_premises, 8);
        assert_eq!(config.max_tokens, 64);
        assert!(!config.natural_language);
    }

    #[test]
    fn test_builder_helpers() {
        let config = ValidatorConfig::new()
            .with_natural_language(true)
            .with_max_variables(3)
            .with_max_premises(2)
            .with_max_tokens(10);
        assert!(config.natural_language);
        assert_eq!(
            (config.max_variables, config.max_premises, config.max_tokens),
            (3, 2, 10)
        );
    }

    #[test]
    fn test_variable_limit_is_capped() {
        assert_eq!(ValidatorConfig::new().variable_limit(), 8);
        let config = ValidatorConfig::new().with_max_variables(64);
        assert_eq!(config.variable_limit(), MAX_SUPPORTED_VARIABLES);
    }
}
