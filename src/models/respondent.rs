//! Respondent models
//!
//! Two row types flow through the pipeline: `RecodedRespondent` is the
//! output of the recoding pass and still carries the twelve per-site
//! indicators; `Respondent` is the analysis-ready record after aggregation
//! and age binning, where the indicators have been projected away.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CancerSite, CancerType, Diagnosis};

/// Ordered age-group category derived from the continuous age column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Ages 18-39
    YoungAdults,
    /// Ages 40-64
    MiddleAged,
    /// Ages 65-85
    OlderAdults,
}

impl AgeGroup {
    /// Display label with the ordering prefix
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::YoungAdults => "1. Young adults (18-39)",
            Self::MiddleAged => "2. Middle-aged (40-64)",
            Self::OlderAdults => "3. Older adults (65-85)",
        }
    }

    /// All age groups in ascending order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::YoungAdults, Self::MiddleAged, Self::OlderAdults]
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One survey row after recoding, before aggregation
///
/// Site indicators use the three-valued collapse: `Some(true)` for an
/// affirmative answer, `Some(false)` for a negative or inapplicable answer,
/// `None` where the answer was unknown or refused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecodedRespondent {
    /// Recoded primary diagnosis
    pub diagnosis: Diagnosis,
    /// Per-site indicators, indexed by `CancerSite::index`
    pub sites: [Option<bool>; 12],
    /// Age in years
    pub age: i32,
    /// Sex label as reported by the survey
    pub sex: String,
    /// Race label after text normalization
    pub race: String,
}

impl RecodedRespondent {
    /// Indicator value for a specific site
    #[must_use]
    pub fn site(&self, site: CancerSite) -> Option<bool> {
        self.sites[site.index()]
    }

    /// Number of affirmative site indicators among the non-missing ones
    #[must_use]
    pub fn affirmative_site_count(&self) -> usize {
        self.sites.iter().filter(|s| **s == Some(true)).count()
    }
}

/// One analysis-ready record
///
/// Produced once per source row by the aggregation and binning passes; the
/// raw indicator columns are gone. Instances are never mutated after the
/// cohort table is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Respondent {
    /// Recoded primary diagnosis
    pub diagnosis: Diagnosis,
    /// Single mutually-exclusive cancer-type category
    pub cancer_type: CancerType,
    /// Age in years
    pub age: i32,
    /// Ordered age group; `None` only for ages outside the binning domain
    pub age_group: Option<AgeGroup>,
    /// Sex label as reported by the survey
    pub sex: String,
    /// Race label after text normalization
    pub race: String,
}
