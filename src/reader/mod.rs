//! Module for reading the raw survey table.
//!
//! The source is a single Parquet file holding the MEPS cancer-module
//! extract. Only the columns named by the pipeline configuration are
//! projected. Loading failures are fatal and distinguishable: a missing
//! file, an empty table and a decode failure are separate error kinds so
//! callers can branch on which occurred. No partial table is ever returned.

use std::fs::File;
use std::path::Path;

use arrow::record_batch::RecordBatch;
use parquet::arrow::{ProjectionMask, arrow_reader::ParquetRecordBatchReaderBuilder};

use crate::config::SurveyColumns;
use crate::error::{MepsError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Read the raw survey table into Arrow record batches
///
/// Projects exactly the columns named in `columns` (the diagnosis, age, sex
/// and race columns plus the twelve site indicators).
///
/// # Errors
/// * `SourceNotFound` - the file does not exist
/// * `SourceEmpty` - the file parsed but holds no data rows
/// * `SourceParseFailure` - the file could not be decoded as Parquet
/// * `ColumnNotFound` - a required survey column is absent from the file
pub fn read_survey_table(path: &Path, columns: &SurveyColumns) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log_operation_start("Reading survey table", path);

    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MepsError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MepsError::SourceParseFailure {
                reason: format!("failed to open {}: {e}", path.display()),
            }
        }
    })?;

    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).map_err(|e| MepsError::SourceParseFailure {
            reason: format!("failed to read parquet metadata: {e}"),
        })?;

    // Every projected column must exist in the file; the reader's contract
    // is "a table with at least the named columns".
    let file_schema = builder.schema().clone();
    let mut projection = Vec::new();
    for name in columns.projection() {
        let idx = file_schema
            .index_of(&name)
            .map_err(|_| MepsError::ColumnNotFound { column: name })?;
        projection.push(idx);
    }

    let mask = ProjectionMask::leaves(builder.parquet_schema(), projection);
    let reader = builder
        .with_projection(mask)
        .build()
        .map_err(|e| MepsError::SourceParseFailure {
            reason: format!("failed to build parquet reader: {e}"),
        })?;

    let batches = reader
        .map(|batch_result| {
            batch_result.map_err(|e| MepsError::SourceParseFailure {
                reason: format!("failed to read record batch: {e}"),
            })
        })
        .collect::<Result<Vec<RecordBatch>>>()?;

    let total_rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    if total_rows == 0 {
        return Err(MepsError::SourceEmpty {
            path: path.to_path_buf(),
        });
    }

    log_operation_complete("read", path, total_rows, Some(start.elapsed()));
    Ok(batches)
}
