//! Utilities for working with Arrow arrays.
//!
//! The survey schema is fixed, so these helpers extract typed columns
//! directly and report clear errors instead of attempting type adaptation.

use arrow::array::{Array, Int32Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::{MepsError, Result};

/// Find a column's index in a record batch
///
/// # Errors
/// Returns `ColumnNotFound` if the batch has no column with that name
pub fn column_index(batch: &RecordBatch, column_name: &str) -> Result<usize> {
    batch
        .schema()
        .index_of(column_name)
        .map_err(|_| MepsError::ColumnNotFound {
            column: column_name.to_string(),
        })
}

/// Get a column as a string array
///
/// # Errors
/// Returns `ColumnNotFound` if the column is missing and `InvalidDataType`
/// if it is not a Utf8 column
pub fn string_column<'a>(batch: &'a RecordBatch, column_name: &str) -> Result<&'a StringArray> {
    let idx = column_index(batch, column_name)?;
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| MepsError::InvalidDataType {
            column: column_name.to_string(),
            expected: "String".to_string(),
        })
}

/// Get a column as a 32-bit integer array
///
/// # Errors
/// Returns `ColumnNotFound` if the column is missing and `InvalidDataType`
/// if it is not an Int32 column
pub fn int_column<'a>(batch: &'a RecordBatch, column_name: &str) -> Result<&'a Int32Array> {
    let idx = column_index(batch, column_name)?;
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<Int32Array>()
        .ok_or_else(|| MepsError::InvalidDataType {
            column: column_name.to_string(),
            expected: "Int32".to_string(),
        })
}
