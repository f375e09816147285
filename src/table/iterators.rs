//! Iterator types for truth tables
//!
//! This module provides iterators over the rows and single columns of a
//! [`TruthTable`].

use super::TruthTable;

/// Iterator over the rows of a table, yielding `(row index, cells)`
pub struct Rows<'a> {
    pub(super) table: &'a TruthTable,
    pub(super) current_idx: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = (usize, &'a [bool]);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current_idx;
        let row = self.table.row(idx)?;
        self.current_idx += 1;
        Some((idx, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.num_rows().saturating_sub(self.current_idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// Iterator over one column of a table, top to bottom
///
/// Yields nothing when the column index is out of range.
pub struct Column<'a> {
    pub(super) table: &'a TruthTable,
    pub(super) column: usize,
    pub(super) current_idx: usize,
}

impl Iterator for Column<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.table.get(self.current_idx, self.column)?;
        self.current_idx += 1;
        Some(value)
    }
}
