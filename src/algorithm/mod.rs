//! Derivation algorithms for the analysis-ready table
//!
//! The aggregation of the twelve site indicators into one cancer-type
//! category and the binning of the continuous age column into an ordered
//! age group live here, separate from I/O and recoding.

pub mod age_group;
pub mod cancer_type;

pub use age_group::bin_age;
pub use cancer_type::classify;
