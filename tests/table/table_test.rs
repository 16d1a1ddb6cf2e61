use meps_analysis::{
    AgeBinConfig, CancerSite, CohortTable, Diagnosis, Feature, MepsError,
};

use crate::utils::{recoded_row, synthetic_recoded};

fn mixed_cohort() -> CohortTable {
    let rows = vec![
        recoded_row(Diagnosis::No, 25, &[]),
        recoded_row(Diagnosis::No, 45, &[]),
        recoded_row(Diagnosis::Yes, 60, &[CancerSite::Lung]),
        recoded_row(Diagnosis::Yes, 70, &[CancerSite::Breast]),
        recoded_row(Diagnosis::Yes, 80, &[CancerSite::Lung, CancerSite::Colon]),
    ];
    CohortTable::build(rows, &AgeBinConfig::default())
}

#[test]
fn test_value_counts_in_canonical_order() {
    let cohort = mixed_cohort();
    let counts = cohort
        .value_counts(Feature::CancerType)
        .expect("categorical feature");

    let labels: Vec<&str> = counts.iter().map(|c| c.label.as_str()).collect();
    // Observed levels keep the fixed display order
    assert_eq!(labels, vec!["2. No", "0. Multiple", "1. Breast", "1. Lung"]);
    assert_eq!(counts[0].count, 2);
}

#[test]
fn test_value_counts_proportions_sum_to_one() {
    let cohort = CohortTable::build(synthetic_recoded(300, 3), &AgeBinConfig::default());
    for feature in [Feature::Sex, Feature::Race, Feature::CancerType, Feature::AgeGroup] {
        let counts = cohort.value_counts(feature).expect("categorical feature");
        let total: f64 = counts.iter().map(|c| c.proportion).sum();
        assert!(
            (total - 1.0).abs() < 1e-9,
            "{} proportions sum to {total}",
            feature.name()
        );
    }
}

#[test]
fn test_continuous_feature_has_no_levels() {
    let cohort = mixed_cohort();
    let result = cohort.unique_levels(Feature::Age);
    assert!(matches!(result, Err(MepsError::InvalidDataType { .. })));
}

#[test]
fn test_empty_selection_applies_no_filter() {
    let cohort = mixed_cohort();
    let filtered = cohort.filter(Feature::CancerType, &[]).expect("no filter");
    assert_eq!(filtered.len(), cohort.len());
}

#[test]
fn test_filter_keeps_only_selected_levels() {
    let cohort = mixed_cohort();
    let before = cohort.len();

    let filtered = cohort
        .filter(Feature::CancerType, &["1. Lung", "0. Multiple"])
        .expect("known levels");
    assert_eq!(filtered.len(), 2);

    // The base table is never mutated by a subset operation
    assert_eq!(cohort.len(), before);
}

#[test]
fn test_filter_rejects_unknown_level() {
    let cohort = mixed_cohort();
    let result = cohort.filter(Feature::CancerType, &["1. Pancreatic"]);
    match result {
        Err(MepsError::UnknownFeatureLevel { level, .. }) => {
            assert_eq!(level, "1. Pancreatic");
        }
        other => panic!("expected UnknownFeatureLevel, got {other:?}"),
    }
}

#[test]
fn test_exclude_removes_level() {
    let cohort = mixed_cohort();
    let without_no = cohort.exclude(Feature::CancerType, "2. No");

    assert_eq!(without_no.len(), 3);
    assert!(
        without_no
            .rows()
            .iter()
            .all(|row| row.cancer_type.label() != "2. No")
    );
    assert_eq!(cohort.len(), 5);
}

#[test]
fn test_summary_reports_share_of_total() {
    let cohort = mixed_cohort();
    let filtered = cohort.exclude(Feature::CancerType, "2. No");

    let summary = filtered.summary(&cohort);
    assert_eq!(summary.persons, 3);
    assert!((summary.share_of_total - 0.6).abs() < 1e-9);
}

#[test]
fn test_filters_compose() {
    let cohort = CohortTable::build(synthetic_recoded(400, 17), &AgeBinConfig::default());
    let males = cohort.filter(Feature::Sex, &["1 MALE"]).expect("known level");
    let young_males = males
        .filter(Feature::AgeGroup, &["1. Young adults (18-39)"])
        .expect("known level");

    assert!(young_males.len() <= males.len());
    assert!(
        young_males
            .rows()
            .iter()
            .all(|row| row.sex == "1 MALE" && row.age <= 39)
    );
}
