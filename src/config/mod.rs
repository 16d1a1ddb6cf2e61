//! Configuration for the survey preparation pipeline.
//!
//! The constant tables the dashboard depends on (sentinel codes, race text
//! cleanup rules, age bin edges, significance settings) live here as explicit
//! immutable configuration structures instead of ambient globals, so the
//! classification logic carries no hidden coupling to presentation choices.

use crate::models::CancerSite;

/// Names of the raw survey columns consumed by the pipeline
#[derive(Debug, Clone)]
pub struct SurveyColumns {
    /// Primary cancer diagnosis column
    pub diagnosis: String,
    /// Age column (integer years)
    pub age: String,
    /// Sex column
    pub sex: String,
    /// Race column (free-text labels)
    pub race: String,
}

impl Default for SurveyColumns {
    fn default() -> Self {
        Self {
            diagnosis: "CANCERDX".to_string(),
            age: "AGELAST".to_string(),
            sex: "SEX".to_string(),
            race: "RACEV1X".to_string(),
        }
    }
}

impl SurveyColumns {
    /// All columns to project when reading the source file, including the
    /// twelve per-site indicator columns
    #[must_use]
    pub fn projection(&self) -> Vec<String> {
        let mut columns = vec![
            self.diagnosis.clone(),
            self.age.clone(),
            self.sex.clone(),
            self.race.clone(),
        ];
        columns.extend(
            CancerSite::all()
                .iter()
                .map(|site| site.survey_code().to_string()),
        );
        columns
    }
}

/// Configuration for the categorical recoding pass
#[derive(Debug, Clone)]
pub struct RecodeConfig {
    /// Raw survey columns to read
    pub columns: SurveyColumns,
    /// Diagnosis codes whose rows are dropped entirely (no usable signal)
    pub diagnosis_drop_codes: Vec<String>,
    /// Raw code meaning an affirmative answer
    pub yes_code: String,
    /// Raw code meaning a negative answer
    pub no_code: String,
    /// Raw code meaning the question did not apply
    pub inapplicable_code: String,
    /// Raw codes collapsed to missing on the site indicator columns
    pub unknown_codes: Vec<String>,
    /// Exact trailing suffixes stripped from race labels, in order
    pub race_suffixes: Vec<String>,
    /// Renames applied to race labels after suffix stripping
    pub race_renames: Vec<(String, String)>,
}

impl Default for RecodeConfig {
    fn default() -> Self {
        Self {
            columns: SurveyColumns::default(),
            diagnosis_drop_codes: vec![
                "-1 INAPPLICABLE".to_string(),
                "-15 CANNOT BE COMPUTED".to_string(),
                "-8 DK".to_string(),
                "-7 REFUSED".to_string(),
            ],
            yes_code: "1 YES".to_string(),
            no_code: "2 NO".to_string(),
            inapplicable_code: "-1 INAPPLICABLE".to_string(),
            unknown_codes: vec!["-8 DK".to_string(), "-7 REFUSED".to_string()],
            race_suffixes: vec![
                " - NO OTHER RACE REPORTED".to_string(),
                "-NO OTH".to_string(),
                "-NO OTHER RACE".to_string(),
            ],
            race_renames: vec![
                (
                    "3 AMER INDIAN/ALASKA NATIVE".to_string(),
                    "3 INDIAN/\nALASKA".to_string(),
                ),
                (
                    "4 ASIAN/NATV HAWAIIAN/PACFC ISL".to_string(),
                    "4 ASIAN/\nHAWAIIAN".to_string(),
                ),
                (
                    "6 MULTIPLE RACES REPORTED".to_string(),
                    "6 MULTIPLE".to_string(),
                ),
            ],
        }
    }
}

/// Age bin edges for the ordered age-group feature
///
/// The edges define the bins `(edges[0], edges[1]]`, `(edges[1], edges[2]]`
/// and `(edges[2], edges[3]]`, with the very first bin closed on the low end.
/// Ages outside the full range yield no age group rather than an error.
#[derive(Debug, Clone)]
pub struct AgeBinConfig {
    /// Four ascending bin edges
    pub edges: [i32; 4],
}

impl Default for AgeBinConfig {
    fn default() -> Self {
        Self {
            edges: [17, 39, 64, 86],
        }
    }
}

/// Multiple-comparison correction applied across the off-diagonal pairs of a
/// pairwise significance matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Correction {
    /// Report uncorrected p-values (the dashboard default)
    #[default]
    None,
    /// Bonferroni correction: multiply each p-value by the number of pairs
    Bonferroni,
    /// Holm step-down correction
    Holm,
}

/// Settings for the pairwise significance matrices
#[derive(Debug, Clone)]
pub struct PairwiseConfig {
    /// Significance threshold for masking effect sizes
    pub alpha: f64,
    /// Minimum usable observations per group; smaller comparisons are
    /// reported as undefined instead of underpowered p-values
    pub min_group_size: usize,
    /// Multiple-comparison correction across the unordered pairs
    pub correction: Correction,
}

impl Default for PairwiseConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            min_group_size: 10,
            correction: Correction::None,
        }
    }
}
