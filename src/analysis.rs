//! Validity and satisfiability of an argument from its truth table

use crate::error::ValidatorError;
use crate::logging::targets;
use crate::table::{bool_symbol, Assignment, TruthTable};
use std::fmt;

/// Outcome of scanning a truth table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Some row makes every premise and the conclusion true
    pub satisfiable: bool,
    /// No row makes every premise true and the conclusion false
    pub valid: bool,
    /// First (lowest) row with all premises true and the conclusion false
    pub counterexample: Option<usize>,
}

impl Verdict {
    /// Assignment of the counterexample row, if the argument is invalid
    pub fn counterexample_assignment(&self, table: &TruthTable) -> Option<Assignment> {
        self.counterexample.and_then(|row| table.assignment(row))
    }

    /// Pair with the table it was derived from for display
    pub fn report<'a>(&'a self, table: &'a TruthTable) -> VerdictReport<'a> {
        VerdictReport {
            verdict: self,
            table,
        }
    }
}

/// Derive the verdict for a table whose first `premise_count` formula columns are
/// premises and whose last formula column is the conclusion
///
/// With no premises the argument is valid exactly when the conclusion is a
/// tautology and satisfiable when the conclusion is true on some row. Every row
/// is scanned even after a counterexample is found.
///
/// Fails with [`ValidatorError::InvalidInput`] when the table has no formula
/// columns or `premise_count` leaves no column for the conclusion.
///
/// # Examples
///
/// ```
/// use argument_validator::expression::Formula;
/// use argument_validator::{analyze, table, VariableSet};
///
/// let variables = VariableSet::new(["p", "q"]).unwrap();
/// let formulas = vec![
///     Formula::parse("P1", "p > q").unwrap(),
///     Formula::parse("P2", "p").unwrap(),
///     Formula::parse("Conclusion", "q").unwrap(),
/// ];
/// let table = table::build(&variables, &formulas).unwrap();
/// let verdict = analyze(&table, 2).unwrap();
/// assert!(verdict.valid);
/// assert!(verdict.satisfiable);
/// assert_eq!(verdict.counterexample, None);
/// ```
pub fn analyze(table: &TruthTable, premise_count: usize) -> Result<Verdict, ValidatorError> {
    let n = table.num_variables();
    let f = table.num_formulas();
    if f == 0 || premise_count >= f {
        return Err(ValidatorError::InvalidInput {
            message: format!(
                "Cannot analyze {} premise(s) with {} formula column(s): the last column must be the conclusion",
                premise_count, f
            ),
        });
    }
    let conclusion_column = n + f - 1;

    let mut verdict = Verdict {
        satisfiable: false,
        valid: true,
        counterexample: None,
    };

    for (row, cells) in table.rows() {
        let all_premises = cells[n..n + premise_count].iter().all(|&value| value);
        let conclusion = cells[conclusion_column];
        if all_premises && !conclusion {
            verdict.valid = false;
            if verdict.counterexample.is_none() {
                log::debug!(target: targets::ANALYSIS, "Counterexample at row {row}");
                verdict.counterexample = Some(row);
            }
        }
        if all_premises && conclusion {
            verdict.satisfiable = true;
        }
    }

    log::info!(
        target: targets::ANALYSIS,
        "Satisfiable: {}, valid: {}",
        verdict.satisfiable,
        verdict.valid
    );
    Ok(verdict)
}

/// Text rendering of a verdict, with the counterexample's variable values
pub struct VerdictReport<'a> {
    verdict: &'a Verdict,
    table: &'a TruthTable,
}

impl fmt::Display for VerdictReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = if self.verdict.satisfiable { "Yes" } else { "No" };
        writeln!(f, "Satisfiable: {}", yes_no)?;
        if self.verdict.valid {
            return writeln!(f, "Valid: Yes (no counterexample)");
        }
        writeln!(f, "Valid: Falsifiable (counterexample found)")?;
        if let Some(values) = self
            .verdict
            .counterexample
            .and_then(|row| self.table.variable_values(row))
        {
            writeln!(f, "Counterexample:")?;
            for (name, value) in self.table.variable_names().iter().zip(values) {
                writeln!(f, "  {} = {}", name, bool_symbol(*value))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Formula;
    use crate::table::build;
    use crate::VariableSet;

    fn table_for(variables: &[&str], sources: &[&str]) -> TruthTable {
        let variables = VariableSet::new(variables.iter().copied()).unwrap();
        let formulas: Vec<Formula> = sources
            .iter()
            .enumerate()
            .map(|(i, source)| Formula::parse(&format!("F{}", i + 1), source).unwrap())
            .collect();
        build(&variables, &formulas).unwrap()
    }

    #[test]
    fn test_modus_ponens_is_valid() {
        let table = table_for(&["p", "q"], &["p > q", "p", "q"]);
        let verdict = analyze(&table, 2).unwrap();
        assert_eq!(
            verdict,
            Verdict {
                satisfiable: true,
                valid: true,
                counterexample: None
            }
        );
    }

    #[test]
    fn test_affirming_the_consequent_is_invalid() {
        // rows: p q -> row 1 is p=F, q=T where p>q and q hold but p fails
        let table = table_for(&["p", "q"], &["p > q", "q", "p"]);
        let verdict = analyze(&table, 2).unwrap();
        assert!(!verdict.valid);
        assert!(verdict.satisfiable);
        assert_eq!(verdict.counterexample, Some(1));
        assert_eq!(
            verdict.counterexample_assignment(&table).unwrap().values(),
            &[false, true]
        );
    }

    #[test]
    fn test_inconsistent_premises() {
        let table = table_for(&["p"], &["p", "!p", "p"]);
        let verdict = analyze(&table, 2).unwrap();
        assert!(verdict.valid);
        assert!(!verdict.satisfiable);
    }

    #[test]
    fn test_no_premises_is_tautology_check() {
        let tautology = table_for(&["p"], &["p | !p"]);
        let verdict = analyze(&tautology, 0).unwrap();
        assert!(verdict.valid && verdict.satisfiable);

        let contingent = table_for(&["p", "q"], &["p & q"]);
        let verdict = analyze(&contingent, 0).unwrap();
        assert!(!verdict.valid);
        assert!(verdict.satisfiable);
        assert_eq!(verdict.counterexample, Some(0));

        let contradiction = table_for(&["p"], &["p & !p"]);
        let verdict = analyze(&contradiction, 0).unwrap();
        assert!(!verdict.valid && !verdict.satisfiable);
    }

    #[test]
    fn test_conclusion_must_have_a_column() {
        let table = table_for(&["p"], &["p"]);
        assert!(matches!(
            analyze(&table, 1),
            Err(ValidatorError::InvalidInput { .. })
        ));
        let empty = table_for(&["p"], &[]);
        assert!(analyze(&empty, 0).is_err());
    }

    #[test]
    fn test_report_text() {
        let table = table_for(&["p", "q"], &["p > q", "q", "p"]);
        let verdict = analyze(&table, 2).unwrap();
        let text = verdict.report(&table).to_string();
        assert_eq!(
            text,
            "Satisfiable: Yes\n\
             Valid: Falsifiable (counterexample found)\n\
             Counterexample:\n  p = F\n  q = T\n"
        );

        let table = table_for(&["p"], &["p", "p"]);
        let verdict = analyze(&table, 1).unwrap();
        assert_eq!(
            verdict.report(&table).to_string(),
            "Satisfiable: Yes\nValid: Yes (no counterexample)\n"
        );
    }
}
