use meps_analysis::{
    AgeBinConfig, CancerSite, CohortTable, Diagnosis, Feature, MepsError, crosstab,
};

use crate::utils::{recoded_row, synthetic_recoded};

fn sexed_cohort() -> CohortTable {
    let mut rows = vec![
        recoded_row(Diagnosis::Yes, 60, &[CancerSite::Lung]),
        recoded_row(Diagnosis::Yes, 65, &[CancerSite::Breast]),
        recoded_row(Diagnosis::No, 30, &[]),
        recoded_row(Diagnosis::No, 40, &[]),
        recoded_row(Diagnosis::No, 50, &[]),
    ];
    rows[1].sex = "2 FEMALE".to_string();
    rows[2].sex = "2 FEMALE".to_string();
    CohortTable::build(rows, &AgeBinConfig::default())
}

#[test]
fn test_counts_match_fixture() {
    let cohort = sexed_cohort();
    let result = crosstab(&cohort, Feature::CancerDiagnosis, Feature::Sex, None)
        .expect("categorical features");

    assert_eq!(result.counts.row_labels(), &["1. Yes", "2. No"]);
    assert_eq!(result.counts.col_labels(), &["1 MALE", "2 FEMALE"]);
    assert_eq!(*result.counts.get(0, 0), 1); // Yes, male
    assert_eq!(*result.counts.get(0, 1), 1); // Yes, female
    assert_eq!(*result.counts.get(1, 0), 2); // No, male
    assert_eq!(*result.counts.get(1, 1), 1); // No, female
}

#[test]
fn test_three_matrices_share_indexing() {
    let cohort = sexed_cohort();
    let result = crosstab(&cohort, Feature::CancerType, Feature::Sex, None)
        .expect("categorical features");

    assert_eq!(result.counts.row_labels(), result.row_norm.row_labels());
    assert_eq!(result.counts.row_labels(), result.col_norm.row_labels());
    assert_eq!(result.counts.col_labels(), result.row_norm.col_labels());
    assert_eq!(result.counts.col_labels(), result.col_norm.col_labels());
}

#[test]
fn test_nonzero_rows_sum_to_one() {
    let cohort = CohortTable::build(synthetic_recoded(400, 23), &AgeBinConfig::default());
    let result = crosstab(&cohort, Feature::CancerType, Feature::AgeGroup, None)
        .expect("categorical features");

    for i in 0..result.counts.n_rows() {
        let total: u64 = result.counts.row(i).iter().sum();
        if total == 0 {
            continue;
        }
        let row_sum: f64 = result
            .row_norm
            .row(i)
            .iter()
            .map(|cell| cell.expect("nonzero row has defined cells"))
            .sum();
        assert!((row_sum - 1.0).abs() < 1e-9, "row {i} sums to {row_sum}");
    }
}

#[test]
fn test_nonzero_columns_sum_to_one() {
    let cohort = CohortTable::build(synthetic_recoded(400, 29), &AgeBinConfig::default());
    let result = crosstab(&cohort, Feature::Race, Feature::Sex, None)
        .expect("categorical features");

    for j in 0..result.counts.n_cols() {
        let total: u64 = (0..result.counts.n_rows())
            .map(|i| *result.counts.get(i, j))
            .sum();
        if total == 0 {
            continue;
        }
        let col_sum: f64 = (0..result.counts.n_rows())
            .map(|i| result.col_norm.get(i, j).expect("nonzero column"))
            .sum();
        assert!((col_sum - 1.0).abs() < 1e-9, "column {j} sums to {col_sum}");
    }
}

#[test]
fn test_normalized_cells_lie_in_unit_interval() {
    let cohort = CohortTable::build(synthetic_recoded(300, 31), &AgeBinConfig::default());
    let result = crosstab(&cohort, Feature::CancerType, Feature::Race, None)
        .expect("categorical features");

    for i in 0..result.counts.n_rows() {
        for j in 0..result.counts.n_cols() {
            for matrix in [&result.row_norm, &result.col_norm] {
                if let Some(p) = matrix.get(i, j) {
                    assert!((0.0..=1.0).contains(p));
                }
            }
        }
    }
}

/// A level emptied by the exclusion predicate keeps its row, and that row's
/// proportions are undefined rather than zero: "not evaluable" and "no
/// relationship" are different answers
#[test]
fn test_excluded_level_is_undefined_not_zero() {
    let cohort = sexed_cohort();
    let exclude_no = |row: &meps_analysis::Respondent| row.diagnosis == Diagnosis::No;
    let result = crosstab(
        &cohort,
        Feature::CancerDiagnosis,
        Feature::Sex,
        Some(&exclude_no),
    )
    .expect("categorical features");

    let no_row = result
        .counts
        .row_labels()
        .iter()
        .position(|label| label == "2. No")
        .expect("level set comes from the unfiltered table");
    assert!(result.counts.row(no_row).iter().all(|&c| c == 0));
    assert!(result.row_norm.row(no_row).iter().all(Option::is_none));
}

#[test]
fn test_continuous_feature_is_rejected() {
    let cohort = sexed_cohort();
    let result = crosstab(&cohort, Feature::Age, Feature::Sex, None);
    assert!(matches!(result, Err(MepsError::InvalidDataType { .. })));
}
