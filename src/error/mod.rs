//! Error handling for the survey data pipeline.

use std::path::PathBuf;

/// Specialized error type for survey loading and analysis
///
/// The three `Source*` variants are fatal to the current request: no partial
/// cohort table is ever returned. `InsufficientGroupSize` and
/// `DegenerateNormalization` are non-fatal; the statistics modules catch them
/// per cell and mark the cell undefined, leaving the rest of the matrix valid.
#[derive(Debug, thiserror::Error)]
pub enum MepsError {
    /// The source survey file does not exist
    #[error("source file not found: {}", path.display())]
    SourceNotFound {
        /// Path that was attempted
        path: PathBuf,
    },

    /// The source survey file parsed but contained no data rows
    #[error("source file is empty: {}", path.display())]
    SourceEmpty {
        /// Path that was read
        path: PathBuf,
    },

    /// The source survey file could not be decoded
    #[error("failed to parse source data: {reason}")]
    SourceParseFailure {
        /// Human-readable parse failure description
        reason: String,
    },

    /// A required survey column is missing from the table
    #[error("column not found: {column}")]
    ColumnNotFound {
        /// Name of the missing column
        column: String,
    },

    /// A survey column has an unexpected Arrow data type
    #[error("column {column} has invalid data type, expected {expected}")]
    InvalidDataType {
        /// Name of the offending column
        column: String,
        /// Human-readable name of the expected type
        expected: String,
    },

    /// A pairwise comparison had fewer usable observations than the floor
    #[error("group {group} has {size} usable observations, below the floor of {floor}")]
    InsufficientGroupSize {
        /// Label of the underpowered group
        group: String,
        /// Usable observation count
        size: usize,
        /// Configured minimum group size
        floor: usize,
    },

    /// A crosstab row or column had a zero total and cannot be normalized
    #[error("cannot normalize {axis} '{label}': zero total")]
    DegenerateNormalization {
        /// Which axis is degenerate ("row" or "column")
        axis: &'static str,
        /// Label of the degenerate row or column
        label: String,
    },

    /// A filter referenced a level that the feature does not produce
    #[error("unknown level '{level}' for feature {feature}")]
    UnknownFeatureLevel {
        /// Feature name
        feature: String,
        /// The unmatched level label
        level: String,
    },
}

/// Result type for survey pipeline operations
pub type Result<T> = std::result::Result<T, MepsError>;
