use std::io::Write;

use meps_analysis::{MepsError, SurveyColumns, read_survey_table};

use crate::utils::{SurveyRow, write_empty_survey_file, write_survey_file};

/// A missing file must be reported as `SourceNotFound`, not as a generic
/// parse failure, so callers can branch on the kind
#[test]
fn test_missing_file_is_source_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.parquet");

    let result = read_survey_table(&path, &SurveyColumns::default());
    assert!(matches!(result, Err(MepsError::SourceNotFound { .. })));
}

#[test]
fn test_empty_file_is_source_empty() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty.parquet");
    write_empty_survey_file(&path);

    let result = read_survey_table(&path, &SurveyColumns::default());
    assert!(matches!(result, Err(MepsError::SourceEmpty { .. })));
}

#[test]
fn test_garbage_file_is_parse_failure() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("garbage.parquet");
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(b"this is not a parquet file").expect("write");
    drop(file);

    let result = read_survey_table(&path, &SurveyColumns::default());
    assert!(matches!(result, Err(MepsError::SourceParseFailure { .. })));
}

/// The reader's contract is "a table with at least the named columns"
#[test]
fn test_missing_required_column() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("survey.parquet");
    write_survey_file(&path, &[SurveyRow::default()]);

    let columns = SurveyColumns {
        race: "RACEV9X".to_string(),
        ..SurveyColumns::default()
    };
    let result = read_survey_table(&path, &columns);
    match result {
        Err(MepsError::ColumnNotFound { column }) => assert_eq!(column, "RACEV9X"),
        other => panic!("expected ColumnNotFound, got {other:?}"),
    }
}

#[test]
fn test_reads_all_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("survey.parquet");
    let rows: Vec<_> = (0..25).map(|i| SurveyRow::default().with_age(30 + i)).collect();
    write_survey_file(&path, &rows);

    let batches = read_survey_table(&path, &SurveyColumns::default()).expect("readable file");
    let total: usize = batches.iter().map(|b| b.num_rows()).sum();
    assert_eq!(total, 25);

    // The projection keeps exactly the survey columns
    assert_eq!(batches[0].num_columns(), 16);
}
