//! Two-way cross-tabulation.
//!
//! Produces the raw co-occurrence counts between two categorical features
//! together with row-normalized and column-normalized proportion matrices.
//! The three matrices share identical row and column label sets and
//! ordering. A row or column with a zero total cannot be normalized; its
//! proportion cells are reported as undefined, never as zero, because "not
//! evaluable" and "no relationship" are different answers.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{MepsError, Result};
use crate::models::Respondent;
use crate::stats::Matrix;
use crate::table::{CohortTable, Feature};

/// Result of a two-way cross-tabulation
#[derive(Debug, Clone, Serialize)]
pub struct CrossTab {
    /// Raw co-occurrence counts
    pub counts: Matrix<u64>,
    /// Row-normalized proportions; each nonzero row sums to 1
    pub row_norm: Matrix<Option<f64>>,
    /// Column-normalized proportions; each nonzero column sums to 1
    pub col_norm: Matrix<Option<f64>>,
}

/// Cross-tabulate two categorical features
///
/// Levels are the features' unique values over the input table in canonical
/// order. The optional predicate excludes rows (returns `true` to exclude)
/// before tabulation but after the level sets are fixed, so a level emptied
/// by the predicate keeps its row or column with undefined proportions.
/// Rows with a missing value on either feature are skipped.
///
/// # Errors
/// Returns `InvalidDataType` when either feature is continuous
pub fn crosstab(
    table: &CohortTable,
    row_feat: Feature,
    col_feat: Feature,
    exclude: Option<&dyn Fn(&Respondent) -> bool>,
) -> Result<CrossTab> {
    let row_levels = table.unique_levels(row_feat)?;
    let col_levels = table.unique_levels(col_feat)?;

    let row_index: FxHashMap<&str, usize> = row_levels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();
    let col_index: FxHashMap<&str, usize> = col_levels
        .iter()
        .enumerate()
        .map(|(i, label)| (label.as_str(), i))
        .collect();

    let mut counts = Matrix::filled(row_levels.clone(), col_levels.clone(), 0u64);
    for row in table.rows() {
        if exclude.is_some_and(|predicate| predicate(row)) {
            continue;
        }
        let (Some(row_label), Some(col_label)) = (row_feat.label(row), col_feat.label(row)) else {
            continue;
        };
        let (Some(&i), Some(&j)) = (
            row_index.get(row_label.as_str()),
            col_index.get(col_label.as_str()),
        ) else {
            continue;
        };
        counts.set(i, j, counts.get(i, j) + 1);
    }

    let row_norm = normalize_rows(&counts);
    let col_norm = normalize_cols(&counts);

    Ok(CrossTab {
        counts,
        row_norm,
        col_norm,
    })
}

fn normalize_rows(counts: &Matrix<u64>) -> Matrix<Option<f64>> {
    let mut norm = Matrix::filled(
        counts.row_labels().to_vec(),
        counts.col_labels().to_vec(),
        None,
    );
    for i in 0..counts.n_rows() {
        let total: u64 = counts.row(i).iter().sum();
        if total == 0 {
            let degenerate = MepsError::DegenerateNormalization {
                axis: "row",
                label: counts.row_labels()[i].clone(),
            };
            log::warn!("{degenerate}");
            continue;
        }
        for j in 0..counts.n_cols() {
            norm.set(i, j, Some(*counts.get(i, j) as f64 / total as f64));
        }
    }
    norm
}

fn normalize_cols(counts: &Matrix<u64>) -> Matrix<Option<f64>> {
    let mut norm = Matrix::filled(
        counts.row_labels().to_vec(),
        counts.col_labels().to_vec(),
        None,
    );
    for j in 0..counts.n_cols() {
        let total: u64 = (0..counts.n_rows()).map(|i| *counts.get(i, j)).sum();
        if total == 0 {
            let degenerate = MepsError::DegenerateNormalization {
                axis: "column",
                label: counts.col_labels()[j].clone(),
            };
            log::warn!("{degenerate}");
            continue;
        }
        for i in 0..counts.n_rows() {
            norm.set(i, j, Some(*counts.get(i, j) as f64 / total as f64));
        }
    }
    norm
}
