//! Pairwise significance testing.
//!
//! Compares the distribution of a continuous feature between every pair of
//! levels of a categorical feature with a two-sided Mann-Whitney U test, and
//! reports the paired median differences as effect sizes. Effect cells whose
//! p-value is undefined or above the threshold are masked: an effect must
//! not be read off an underpowered or null comparison.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::config::{Correction, PairwiseConfig};
use crate::error::{MepsError, Result};
use crate::stats::Matrix;
use crate::table::{CohortTable, Feature};

/// Result of the pairwise comparisons
///
/// Both matrices are indexed by the group levels in canonical order. The
/// p-value matrix is symmetric and its diagonal undefined; the effect matrix
/// holds `median(column group) - median(row group)`, so transposition
/// negates it where both cells are defined.
#[derive(Debug, Clone, Serialize)]
pub struct Pairwise {
    /// Two-sided Mann-Whitney p-values; `None` on the diagonal and for
    /// underpowered comparisons
    pub p_values: Matrix<Option<f64>>,
    /// Median differences, masked wherever significance was not established
    pub effects: Matrix<Option<f64>>,
}

/// Compute the pairwise significance and effect-size matrices
///
/// Groups are the levels of `group_feat` over the input table; the compared
/// values come from `cont_feat`. Comparisons where either group has fewer
/// than `config.min_group_size` usable observations are reported as
/// undefined rather than as underpowered p-values.
///
/// # Errors
/// Returns `InvalidDataType` when `group_feat` is continuous or `cont_feat`
/// is categorical
pub fn pairwise_significance(
    table: &CohortTable,
    group_feat: Feature,
    cont_feat: Feature,
    config: &PairwiseConfig,
) -> Result<Pairwise> {
    if !cont_feat.is_continuous() {
        return Err(MepsError::InvalidDataType {
            column: cont_feat.name().to_string(),
            expected: "continuous".to_string(),
        });
    }
    let levels = table.unique_levels(group_feat)?;

    // Usable observations per group: level present and value present.
    let mut groups: Vec<Vec<f64>> = vec![Vec::new(); levels.len()];
    for row in table.rows() {
        let (Some(label), Some(value)) = (group_feat.label(row), cont_feat.continuous_value(row))
        else {
            continue;
        };
        if let Some(idx) = levels.iter().position(|level| *level == label) {
            groups[idx].push(value);
        }
    }
    let medians: Vec<f64> = groups.iter().map(|group| median(group)).collect();

    let mut p_values = Matrix::filled(levels.clone(), levels.clone(), None);
    for i in 0..levels.len() {
        for j in (i + 1)..levels.len() {
            let Some(p) = compare(&levels, &groups, i, j, config.min_group_size) else {
                continue;
            };
            // One test per unordered pair, mirrored; the statistic is
            // order-invariant.
            p_values.set(i, j, Some(p));
            p_values.set(j, i, Some(p));
        }
    }

    apply_correction(&mut p_values, config.correction);

    let mut effects = Matrix::filled(levels.clone(), levels, None);
    for i in 0..effects.n_rows() {
        for j in 0..effects.n_cols() {
            if i == j {
                continue;
            }
            let significant = p_values
                .get(i, j)
                .is_some_and(|p| p <= config.alpha);
            if significant {
                effects.set(i, j, Some(medians[j] - medians[i]));
            }
        }
    }

    Ok(Pairwise { p_values, effects })
}

/// Run one comparison, or report why it is undefined
fn compare(
    levels: &[String],
    groups: &[Vec<f64>],
    i: usize,
    j: usize,
    floor: usize,
) -> Option<f64> {
    for idx in [i, j] {
        if groups[idx].len() < floor {
            let underpowered = MepsError::InsufficientGroupSize {
                group: levels[idx].clone(),
                size: groups[idx].len(),
                floor,
            };
            log::debug!("skipping comparison: {underpowered}");
            return None;
        }
    }
    Some(mann_whitney_u(&groups[i], &groups[j]))
}

/// Two-sided Mann-Whitney U test p-value
///
/// Asymptotic normal approximation with tie correction and continuity
/// correction, computed from `max(U1, U2)` so the result does not depend on
/// the order of the two samples. Degenerate inputs (no rank variance) give
/// p = 1.
#[must_use]
pub fn mann_whitney_u(a: &[f64], b: &[f64]) -> f64 {
    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    if a.is_empty() || b.is_empty() {
        return 1.0;
    }

    let (rank_sum_a, tie_term) = rank_sum(a, b);
    let u1 = rank_sum_a - n1 * (n1 + 1.0) / 2.0;
    let u2 = n1 * n2 - u1;
    let u = u1.max(u2);

    let n = n1 + n2;
    let variance = (n1 * n2 / 12.0) * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if variance <= 0.0 || !variance.is_finite() {
        return 1.0; // All observations tied
    }

    let z = (u - n1 * n2 / 2.0 - 0.5) / variance.sqrt();
    match Normal::new(0.0, 1.0) {
        Ok(normal) => (2.0 * (1.0 - normal.cdf(z))).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

/// Sum of the average ranks of `a` within the pooled sample, plus the tie
/// correction term `sum(t^3 - t)` over tie groups
fn rank_sum(a: &[f64], b: &[f64]) -> (f64, f64) {
    let mut pooled: Vec<(f64, bool)> = a
        .iter()
        .map(|&v| (v, true))
        .chain(b.iter().map(|&v| (v, false)))
        .collect();
    pooled.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut rank_sum_a = 0.0;
    let mut tie_term = 0.0;
    let mut start = 0;
    while start < pooled.len() {
        let mut end = start;
        while end < pooled.len() && pooled[end].0 == pooled[start].0 {
            end += 1;
        }
        // Average 1-based rank across the tie run
        let rank = (start + end + 1) as f64 / 2.0;
        let ties = (end - start) as f64;
        tie_term += ties * ties * ties - ties;
        for item in &pooled[start..end] {
            if item.1 {
                rank_sum_a += rank;
            }
        }
        start = end;
    }
    (rank_sum_a, tie_term)
}

/// Compute the median of a group
fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Apply the configured multiple-comparison correction in place
///
/// Corrections run over the computed unordered pairs; undefined cells do not
/// count toward the number of comparisons.
fn apply_correction(p_values: &mut Matrix<Option<f64>>, correction: Correction) {
    if correction == Correction::None {
        return;
    }

    let mut pairs: Vec<(usize, usize, f64)> = Vec::new();
    for i in 0..p_values.n_rows() {
        for j in (i + 1)..p_values.n_cols() {
            if let Some(p) = p_values.get(i, j) {
                pairs.push((i, j, *p));
            }
        }
    }
    let m = pairs.len();
    if m == 0 {
        return;
    }

    match correction {
        Correction::None => {}
        Correction::Bonferroni => {
            for (i, j, p) in pairs {
                let adjusted = (p * m as f64).min(1.0);
                p_values.set(i, j, Some(adjusted));
                p_values.set(j, i, Some(adjusted));
            }
        }
        Correction::Holm => {
            pairs.sort_by(|x, y| x.2.total_cmp(&y.2));
            let mut running_max = 0.0f64;
            for (k, (i, j, p)) in pairs.into_iter().enumerate() {
                let adjusted = ((m - k) as f64 * p).min(1.0).max(running_max);
                running_max = adjusted;
                p_values.set(i, j, Some(adjusted));
                p_values.set(j, i, Some(adjusted));
            }
        }
    }
}
