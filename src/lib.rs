//! A Rust library for preparing and analyzing the MEPS cancer-module survey
//! extract: categorical recoding, cancer-type aggregation, age binning,
//! cross-tabulation and pairwise significance testing.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reader;
pub mod recode;
pub mod stats;
pub mod table;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{AgeBinConfig, Correction, PairwiseConfig, RecodeConfig, SurveyColumns};
pub use error::{MepsError, Result};
pub use models::{AgeGroup, CancerSite, CancerType, Diagnosis, RecodedRespondent, Respondent};

// Arrow types
pub use arrow::record_batch::RecordBatch;

// Pipeline stages
pub use reader::read_survey_table;
pub use recode::recode_batches;
pub use table::cache::CohortCache;
pub use table::{CohortSummary, CohortTable, Feature, LevelCount, load_cohort};

// Statistical summaries
pub use stats::{CrossTab, Matrix, Pairwise, crosstab, pairwise_significance};
