//! Truth table construction
//!
//! A [`TruthTable`] holds one row per assignment of the declared variables and
//! one column per variable followed by one column per formula. Rows are ordered
//! by their assignment mask, so the first declared variable changes slowest:
//!
//! ```text
//! p  q  | p > q
//! F  F  | T
//! F  T  | T
//! T  F  | F
//! T  T  | T
//! ```
//!
//! ```
//! use argument_validator::expression::Formula;
//! use argument_validator::{table, VariableSet};
//!
//! let variables = VariableSet::new(["p", "q"]).unwrap();
//! let formulas = vec![Formula::parse("Conclusion", "p > q").unwrap()];
//! let table = table::build(&variables, &formulas).unwrap();
//!
//! assert_eq!(table.num_rows(), 4);
//! let column: Vec<bool> = table.column(2).collect();
//! assert_eq!(column, vec![true, true, false, true]);
//! ```

mod display;
mod iterators;

pub use display::{bool_symbol, COLUMN_WIDTH};
pub use iterators::{Column, Rows};

use crate::expression::{ExpressionError, Formula};
use crate::logging::targets;
use crate::variables::VariableSet;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Values of the declared variables for one truth table row
///
/// Variable `i` of `N` takes bit `N − 1 − i` of the mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    mask: usize,
    values: Vec<bool>,
}

impl Assignment {
    /// Derive the assignment for row `mask` of an `n`-variable table
    ///
    /// # Examples
    ///
    /// ```
    /// use argument_validator::Assignment;
    ///
    /// let assignment = Assignment::from_mask(0b110, 3);
    /// assert_eq!(assignment.values(), &[true, true, false]);
    /// ```
    pub fn from_mask(mask: usize, n: usize) -> Self {
        let values = (0..n).map(|i| (mask >> (n - 1 - i)) & 1 == 1).collect();
        Assignment { mask, values }
    }

    /// The row index this assignment was derived from
    pub fn mask(&self) -> usize {
        self.mask
    }

    /// Value of variable `index`, `None` past the last variable
    pub fn get(&self, index: usize) -> Option<bool> {
        self.values.get(index).copied()
    }

    /// Values in variable order
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for a zero-variable assignment
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Rows × (variables + formulas) booleans with column headers
///
/// Built once by [`build`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variable_names: Vec<Arc<str>>,
    formula_names: Vec<Arc<str>>,
    /// Row-major cells, `num_columns()` per row
    cells: Vec<bool>,
}

impl TruthTable {
    /// Number of rows, `2^N`
    pub fn num_rows(&self) -> usize {
        if self.num_columns() == 0 {
            0
        } else {
            self.cells.len() / self.num_columns()
        }
    }

    /// `N + F`
    pub fn num_columns(&self) -> usize {
        self.variable_names.len() + self.formula_names.len()
    }

    /// Number of variable columns, `N`
    pub fn num_variables(&self) -> usize {
        self.variable_names.len()
    }

    /// Number of formula columns, `F`
    pub fn num_formulas(&self) -> usize {
        self.formula_names.len()
    }

    /// Variable names in column order
    pub fn variable_names(&self) -> &[Arc<str>] {
        &self.variable_names
    }

    /// Formula display names in column order
    pub fn formula_names(&self) -> &[Arc<str>] {
        &self.formula_names
    }

    /// All column headers: variable names, then formula names
    pub fn headers(&self) -> impl Iterator<Item = &Arc<str>> {
        self.variable_names.iter().chain(self.formula_names.iter())
    }

    /// One row of cells, `None` past the last row
    pub fn row(&self, index: usize) -> Option<&[bool]> {
        let width = self.num_columns();
        let start = index.checked_mul(width)?;
        self.cells.get(start..start + width)
    }

    /// A single cell
    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        if column >= self.num_columns() {
            return None;
        }
        self.row(row).map(|cells| cells[column])
    }

    /// Variable values of a row (the assignment)
    pub fn variable_values(&self, row: usize) -> Option<&[bool]> {
        self.row(row).map(|cells| &cells[..self.num_variables()])
    }

    /// Formula values of a row
    pub fn formula_values(&self, row: usize) -> Option<&[bool]> {
        self.row(row).map(|cells| &cells[self.num_variables()..])
    }

    /// The assignment a row was built from
    pub fn assignment(&self, row: usize) -> Option<Assignment> {
        (row < self.num_rows()).then(|| Assignment::from_mask(row, self.num_variables()))
    }

    /// Iterate over rows in mask order
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            table: self,
            current_idx: 0,
        }
    }

    /// Iterate over one column top to bottom
    pub fn column(&self, column: usize) -> Column<'_> {
        Column {
            table: self,
            column,
            current_idx: 0,
        }
    }
}

/// A formula could not be evaluated while building a table
///
/// The whole build is abandoned; no partial table is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableError {
    /// Row (assignment mask) being evaluated
    pub row: usize,
    /// Display name of the failing formula
    pub formula: Arc<str>,
    /// Why evaluation failed
    pub source: ExpressionError,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot evaluate {} on row {}: {}",
            self.formula, self.row, self.source
        )
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Evaluate every formula on every assignment of `variables`
///
/// Rows are produced for masks `0..2^N` in ascending order. Each row holds the
/// `N` variable values followed by the value of each formula, in the order the
/// formulas are given. The first evaluation failure aborts the build.
pub fn build(variables: &VariableSet, formulas: &[Formula]) -> Result<TruthTable, TableError> {
    let n = variables.len();
    let row_count = variables.row_count();
    let width = n + formulas.len();
    let mut cells = Vec::with_capacity(row_count * width);

    log::debug!(
        target: targets::TABLE,
        "Building {row_count} rows for {n} variables and {} formulas",
        formulas.len()
    );

    for mask in 0..row_count {
        let assignment = Assignment::from_mask(mask, n);
        cells.extend_from_slice(assignment.values());
        for formula in formulas {
            let value = formula
                .evaluate(variables, &assignment)
                .map_err(|source| TableError {
                    row: mask,
                    formula: formula.name_arc(),
                    source,
                })?;
            cells.push(value);
        }
        log::trace!(target: targets::TABLE, "Row {mask}: {:?}", &cells[mask * width..]);
    }

    Ok(TruthTable {
        variable_names: variables.as_slice().to_vec(),
        formula_names: formulas.iter().map(Formula::name_arc).collect(),
        cells,
    })
}
