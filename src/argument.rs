//! Arguments: declared variables, premises and a conclusion
//!
//! [`Argument`] is the layer that callers interact with. It checks the configured
//! limits before anything is converted or enumerated, runs each formula through
//! normalization, tokenizing and postfix conversion once when it is defined, and
//! hands the stored formulas to the table builder and analyzer on
//! [`Argument::evaluate`].

use crate::analysis::{analyze, Verdict, VerdictReport};
use crate::error::{Capacity, ValidatorError};
use crate::expression::{keyword_symbol, normalize_keywords, tokenize, Formula};
use crate::logging::targets;
use crate::table::{self, TruthTable};
use crate::variables::{VariableError, VariableSet};
use crate::ValidatorConfig;
use std::sync::Arc;

/// Display name given to the conclusion
pub const CONCLUSION_NAME: &str = "Conclusion";

/// A propositional argument
///
/// Formulas are kept in table column order: premises `P1..Pn` in the order they
/// were added, followed by the conclusion. Adding a premise after the conclusion
/// has been set still places it before the conclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    config: ValidatorConfig,
    variables: VariableSet,
    formulas: Vec<Formula>,
    has_conclusion: bool,
}

/// Truth table and verdict of an argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// One row per assignment, premises then conclusion after the variables
    pub table: TruthTable,
    /// Validity and satisfiability derived from `table`
    pub verdict: Verdict,
}

impl Evaluation {
    /// Text rendering of the verdict
    pub fn report(&self) -> VerdictReport<'_> {
        self.verdict.report(&self.table)
    }

    /// Variable values of the first counterexample, if the argument is invalid
    pub fn counterexample(&self) -> Option<Vec<(Arc<str>, bool)>> {
        let row = self.verdict.counterexample?;
        let values = self.table.variable_values(row)?;
        Some(
            self.table
                .variable_names()
                .iter()
                .cloned()
                .zip(values.iter().copied())
                .collect(),
        )
    }
}

impl Argument {
    /// Declare the variables of a new argument
    ///
    /// Fails with [`ValidatorError::CapacityExceeded`] when more than
    /// [`ValidatorConfig::variable_limit`] names are given, and with
    /// [`ValidatorError::Variables`] for an empty list, duplicate names, names that
    /// are not single identifiers, or (in English notation) names that are
    /// operator keywords.
    pub fn new<I, S>(names: I, config: ValidatorConfig) -> Result<Self, ValidatorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names.into_iter().map(|s| s.as_ref().to_string()).collect();
        let limit = config.variable_limit();
        if names.len() > limit {
            return Err(ValidatorError::CapacityExceeded {
                capacity: Capacity::Variables,
                limit,
                requested: names.len(),
            });
        }
        let variables = VariableSet::new(&names)?;

        if config.natural_language {
            if let Some(name) = variables
                .iter()
                .find(|name| keyword_symbol(name).is_some() || name.contains('~'))
            {
                return Err(VariableError::ReservedWord {
                    name: Arc::clone(name),
                }
                .into());
            }
        }

        log::debug!(target: targets::ARGUMENT, "Declared variables {:?}", variables.as_slice());
        Ok(Argument {
            config,
            variables,
            formulas: Vec::new(),
            has_conclusion: false,
        })
    }

    /// The configuration the argument was created with
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Declared variables
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Premises and then the conclusion, if set
    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    /// Number of premises added so far
    pub fn premise_count(&self) -> usize {
        self.formulas.len() - usize::from(self.has_conclusion)
    }

    /// Premises in declaration order
    pub fn premises(&self) -> &[Formula] {
        &self.formulas[..self.premise_count()]
    }

    /// The conclusion, if set
    pub fn conclusion(&self) -> Option<&Formula> {
        if self.has_conclusion {
            self.formulas.last()
        } else {
            None
        }
    }

    /// Add the next premise, named `P1`, `P2`, ...
    ///
    /// Fails when `config.max_premises` premises already exist, when the formula
    /// has more than `config.max_tokens` tokens, or when its parentheses do not
    /// balance. Unknown identifiers and missing operands are only detected by
    /// [`Argument::evaluate`].
    pub fn add_premise(&mut self, source: &str) -> Result<&Formula, ValidatorError> {
        let index = self.premise_count();
        if index >= self.config.max_premises {
            return Err(ValidatorError::CapacityExceeded {
                capacity: Capacity::Premises,
                limit: self.config.max_premises,
                requested: index + 1,
            });
        }
        let formula = self.define(&format!("P{}", index + 1), source)?;
        self.formulas.insert(index, formula);
        Ok(&self.formulas[index])
    }

    /// Set (or replace) the conclusion
    pub fn set_conclusion(&mut self, source: &str) -> Result<&Formula, ValidatorError> {
        let formula = self.define(CONCLUSION_NAME, source)?;
        if self.has_conclusion {
            self.formulas.pop();
        }
        self.formulas.push(formula);
        self.has_conclusion = true;
        Ok(&self.formulas[self.formulas.len() - 1])
    }

    /// Normalize, tokenize and convert a formula
    fn define(&self, name: &str, source: &str) -> Result<Formula, ValidatorError> {
        let tokens = if self.config.natural_language {
            tokenize(&normalize_keywords(source))
        } else {
            tokenize(source)
        };
        if tokens.len() > self.config.max_tokens {
            return Err(ValidatorError::CapacityExceeded {
                capacity: Capacity::Tokens,
                limit: self.config.max_tokens,
                requested: tokens.len(),
            });
        }
        let formula = Formula::from_tokens(name, source, &tokens).map_err(|source| {
            ValidatorError::Expression {
                formula: Arc::from(name),
                source,
            }
        })?;
        log::debug!(
            target: targets::ARGUMENT,
            "Defined {} as {}",
            name,
            formula.to_postfix_string()
        );
        Ok(formula)
    }

    /// Build the truth table and derive the verdict
    ///
    /// The table is rebuilt on every call. Fails with
    /// [`ValidatorError::MissingConclusion`] when no conclusion was set and with
    /// [`ValidatorError::Table`] when some formula cannot be evaluated, in which
    /// case no table is produced.
    pub fn evaluate(&self) -> Result<Evaluation, ValidatorError> {
        if !self.has_conclusion {
            return Err(ValidatorError::MissingConclusion);
        }
        let table = table::build(&self.variables, &self.formulas)?;
        let verdict = analyze(&table, self.premise_count())?;
        Ok(Evaluation { table, verdict })
    }
}
