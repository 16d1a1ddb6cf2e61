//! Statistical summaries over the analysis-ready table
//!
//! The cross-tabulation and pairwise-significance routines here are the
//! numeric transforms behind every two-way plot in the dashboard. They are
//! side-effect-free functions over an immutable table, independent of any
//! rendering.

pub mod crosstab;
pub mod pairwise;

use serde::Serialize;

pub use crosstab::{CrossTab, crosstab};
pub use pairwise::{Pairwise, pairwise_significance};

/// A rectangular matrix with labeled rows and columns
///
/// Cells are stored row-major. The label vectors define both the dimensions
/// and the ordering; all matrices produced for one summary share identical
/// label sets so cells line up across them.
#[derive(Debug, Clone, Serialize)]
pub struct Matrix<T> {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix with every cell set to `value`
    #[must_use]
    pub fn filled(row_labels: Vec<String>, col_labels: Vec<String>, value: T) -> Self {
        let cells = vec![value; row_labels.len() * col_labels.len()];
        Self {
            row_labels,
            col_labels,
            cells,
        }
    }

    /// Row labels, in order
    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column labels, in order
    #[must_use]
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Number of rows
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of columns
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Cell at (row, column)
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &T {
        assert!(row < self.n_rows() && col < self.n_cols(), "index out of bounds");
        &self.cells[row * self.col_labels.len() + col]
    }

    /// Set the cell at (row, column)
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.n_rows() && col < self.n_cols(), "index out of bounds");
        self.cells[row * self.col_labels.len() + col] = value;
    }

    /// One row as a slice
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let width = self.col_labels.len();
        &self.cells[row * width..(row + 1) * width]
    }
}
