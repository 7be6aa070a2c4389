//! Canvas: one character row per output line, painted by the connector pass.

use core::ops::Range;
use tracing::warn;

/// A ragged 2D character grid. Each row starts as spaces at its planned
/// width; writes past that width grow the row instead of failing.
#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    pub(crate) fn new(widths: impl IntoIterator<Item = usize>) -> Self {
        Self {
            rows: widths.into_iter().map(|width| vec![' '; width]).collect(),
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, ch: char) {
        let Some(cells) = self.rows.get_mut(row) else {
            warn!(row, col, "write outside the canvas dropped");
            return;
        };
        if col >= cells.len() {
            warn!(row, col, width = cells.len(), "canvas row grown past its planned width");
            cells.resize(col + 1, ' ');
        }
        cells[col] = ch;
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> char {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(' ')
    }

    /// The cell directly left of `col`. Column 0 has no left neighbour.
    pub(crate) fn left_of(&self, row: usize, col: usize) -> Option<char> {
        col.checked_sub(1).map(|left| self.get(row, left))
    }

    pub(crate) fn fill(&mut self, row: usize, cols: Range<usize>, ch: char) {
        for col in cols {
            self.set(row, col, ch);
        }
    }

    /// Append one row's cells to `output`.
    pub(crate) fn write_row(&self, row: usize, output: &mut String) {
        if let Some(cells) = self.rows.get(row) {
            output.extend(cells.iter());
        }
    }
}
