//! The analysis-ready cohort table.
//!
//! `CohortTable` is built once from the recoded rows and never mutated in
//! place; every filter or subset operation produces a new table, so
//! independent viewers can never interfere through shared state. Feature
//! access for the statistics modules goes through the `Feature` enum, which
//! also owns each feature's canonical level ordering.

pub mod cache;

use std::path::Path;

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::algorithm::{bin_age, cancer_type::classify_respondent};
use crate::config::{AgeBinConfig, RecodeConfig};
use crate::error::{MepsError, Result};
use crate::models::{AgeGroup, CancerType, Diagnosis, RecodedRespondent, Respondent};
use crate::reader::read_survey_table;
use crate::recode::recode_batches;

/// A column of the analysis-ready table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feature {
    /// Continuous age in years
    Age,
    /// Ordered age-group category
    AgeGroup,
    /// Sex category
    Sex,
    /// Race category (normalized labels)
    Race,
    /// Binary cancer diagnosis
    CancerDiagnosis,
    /// Aggregated cancer-type category
    CancerType,
}

impl Feature {
    /// Human-readable feature name for error messages and display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::AgeGroup => "Age group",
            Self::Sex => "Sex",
            Self::Race => "Race",
            Self::CancerDiagnosis => "Cancer diagnosis",
            Self::CancerType => "Cancer type",
        }
    }

    /// Whether the feature is continuous rather than categorical
    #[must_use]
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Age)
    }

    /// Categorical label for one row; `None` where the value is missing or
    /// the feature is continuous
    #[must_use]
    pub fn label(self, row: &Respondent) -> Option<String> {
        match self {
            Self::Age => None,
            Self::AgeGroup => row.age_group.map(|group| group.label().to_string()),
            Self::Sex => Some(row.sex.clone()),
            Self::Race => Some(row.race.clone()),
            Self::CancerDiagnosis => Some(row.diagnosis.label().to_string()),
            Self::CancerType => Some(row.cancer_type.label()),
        }
    }

    /// Continuous value for one row; `None` for categorical features
    #[must_use]
    pub fn continuous_value(self, row: &Respondent) -> Option<f64> {
        match self {
            Self::Age => Some(f64::from(row.age)),
            _ => None,
        }
    }

    /// Whether this feature has a fixed display ordering for its levels
    fn fixed_order(self) -> Option<Vec<String>> {
        match self {
            Self::CancerDiagnosis => Some(
                Diagnosis::all()
                    .iter()
                    .map(|d| d.label().to_string())
                    .collect(),
            ),
            Self::CancerType => Some(
                CancerType::display_order()
                    .iter()
                    .map(|t| t.label())
                    .collect(),
            ),
            Self::AgeGroup => Some(
                AgeGroup::all()
                    .iter()
                    .map(|g| g.label().to_string())
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Count and share of one categorical level
#[derive(Debug, Clone, Serialize)]
pub struct LevelCount {
    /// Level label
    pub label: String,
    /// Number of rows with this level
    pub count: usize,
    /// Share of rows with a non-missing value for the feature
    pub proportion: f64,
}

/// Size of a filtered cohort relative to the full one
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CohortSummary {
    /// Number of persons in the (filtered) cohort
    pub persons: usize,
    /// Share of the full cohort, in [0, 1]
    pub share_of_total: f64,
}

/// The immutable analysis-ready table
#[derive(Debug, Clone, Default)]
pub struct CohortTable {
    rows: Vec<Respondent>,
}

impl CohortTable {
    /// Build the analysis-ready table from recoded rows
    ///
    /// Runs the cancer-type aggregation and the age binning per row; the raw
    /// site indicators do not survive into the result.
    #[must_use]
    pub fn build(recoded: Vec<RecodedRespondent>, bins: &AgeBinConfig) -> Self {
        let rows = recoded
            .into_iter()
            .map(|row| Respondent {
                diagnosis: row.diagnosis,
                cancer_type: classify_respondent(&row),
                age: row.age,
                age_group: bin_age(row.age, bins),
                sex: row.sex,
                race: row.race,
            })
            .collect();
        Self { rows }
    }

    /// The analysis-ready rows
    #[must_use]
    pub fn rows(&self) -> &[Respondent] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Unique levels of a categorical feature in canonical order
    ///
    /// Features with a fixed display ordering (diagnosis, cancer type, age
    /// group) keep that ordering restricted to the observed levels; the
    /// free-form categories are sorted lexicographically.
    ///
    /// # Errors
    /// Returns `InvalidDataType` for a continuous feature
    pub fn unique_levels(&self, feature: Feature) -> Result<Vec<String>> {
        if feature.is_continuous() {
            return Err(MepsError::InvalidDataType {
                column: feature.name().to_string(),
                expected: "categorical".to_string(),
            });
        }

        let observed: FxHashSet<String> =
            self.rows.iter().filter_map(|row| feature.label(row)).collect();

        let levels = match feature.fixed_order() {
            Some(order) => order
                .into_iter()
                .filter(|label| observed.contains(label))
                .collect(),
            None => observed.into_iter().sorted().collect(),
        };
        Ok(levels)
    }

    /// Counts and proportions per level, in canonical order
    ///
    /// Proportions are relative to the rows with a non-missing value, so
    /// they sum to 1 whenever any value is present.
    ///
    /// # Errors
    /// Returns `InvalidDataType` for a continuous feature
    pub fn value_counts(&self, feature: Feature) -> Result<Vec<LevelCount>> {
        let levels = self.unique_levels(feature)?;

        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        let mut total = 0usize;
        for row in &self.rows {
            if let Some(label) = feature.label(row) {
                *counts.entry(label).or_insert(0) += 1;
                total += 1;
            }
        }

        Ok(levels
            .iter()
            .map(|label| {
                let count = counts.get(label).copied().unwrap_or(0);
                LevelCount {
                    label: label.clone(),
                    count,
                    proportion: if total == 0 {
                        0.0
                    } else {
                        count as f64 / total as f64
                    },
                }
            })
            .collect())
    }

    /// Keep only rows whose feature value is among the selected levels
    ///
    /// An empty selection applies no filter, matching the dashboard's
    /// multiselect semantics. The input table is left untouched.
    ///
    /// # Errors
    /// Returns `UnknownFeatureLevel` when a selected level is not a level of
    /// the feature, and `InvalidDataType` for a continuous feature
    pub fn filter(&self, feature: Feature, selected: &[&str]) -> Result<Self> {
        if selected.is_empty() {
            return Ok(self.clone());
        }

        let known = self.unique_levels(feature)?;
        for level in selected {
            if !known.iter().any(|l| l == level) {
                return Err(MepsError::UnknownFeatureLevel {
                    feature: feature.name().to_string(),
                    level: (*level).to_string(),
                });
            }
        }

        let rows = self
            .rows
            .iter()
            .filter(|row| {
                feature
                    .label(row)
                    .is_some_and(|label| selected.iter().any(|l| *l == label))
            })
            .cloned()
            .collect();
        Ok(Self { rows })
    }

    /// Remove rows whose feature value equals the given level
    ///
    /// Used for the "exclude the No answer" toggle before tabulating cancer
    /// types. The input table is left untouched.
    #[must_use]
    pub fn exclude(&self, feature: Feature, level: &str) -> Self {
        let rows = self
            .rows
            .iter()
            .filter(|row| feature.label(row).as_deref() != Some(level))
            .cloned()
            .collect();
        Self { rows }
    }

    /// Size of this cohort relative to the full one
    #[must_use]
    pub fn summary(&self, full: &Self) -> CohortSummary {
        CohortSummary {
            persons: self.len(),
            share_of_total: if full.is_empty() {
                0.0
            } else {
                self.len() as f64 / full.len() as f64
            },
        }
    }
}

/// Load, recode and derive the analysis-ready table in one pass
///
/// # Errors
/// Propagates the reader and recoder error kinds unchanged; no partial
/// table is returned on any failure.
pub fn load_cohort(
    path: &Path,
    recode: &RecodeConfig,
    bins: &AgeBinConfig,
) -> Result<CohortTable> {
    let batches = read_survey_table(path, &recode.columns)?;
    let recoded = recode_batches(&batches, recode)?;
    Ok(CohortTable::build(recoded, bins))
}
