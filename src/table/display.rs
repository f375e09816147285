//! Text rendering of truth tables

use super::TruthTable;
use std::fmt;

/// Width every column is padded to
pub const COLUMN_WIDTH: usize = 10;

/// Render a cell value as `T` or `F`
pub fn bool_symbol(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

/// Left-aligned columns of width [`COLUMN_WIDTH`], one header line then one line
/// per row with `T`/`F` cells
///
/// # Examples
///
/// ```
/// use argument_validator::expression::Formula;
/// use argument_validator::{table, VariableSet};
///
/// let variables = VariableSet::new(["p"]).unwrap();
/// let table = table::build(&variables, &[Formula::parse("Conclusion", "!p").unwrap()]).unwrap();
/// let text = table.to_string();
/// let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
/// assert_eq!(lines, vec!["p         Conclusion", "F         T", "T         F"]);
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for header in self.headers() {
            write!(f, "{:<width$}", header.as_ref(), width = COLUMN_WIDTH)?;
        }
        writeln!(f)?;
        for (_, cells) in self.rows() {
            for value in cells {
                write!(f, "{:<width$}", bool_symbol(*value), width = COLUMN_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
