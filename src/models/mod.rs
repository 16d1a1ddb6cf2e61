//! Data models for the survey pipeline
//!
//! This module contains the categorical types and row models shared by the
//! recoding, aggregation and statistics passes.

pub mod cancer;
pub mod respondent;

pub use cancer::{CancerSite, CancerType, Diagnosis};
pub use respondent::{AgeGroup, RecodedRespondent, Respondent};
