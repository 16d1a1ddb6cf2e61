//! Age binning
//!
//! Derives the ordered three-level age group from the continuous age column
//! using fixed bin edges. The bins are half-open `(lower, upper]` with the
//! very first bin closed on the low end.

use crate::config::AgeBinConfig;
use crate::models::AgeGroup;

/// Bin an age into its ordered age group
///
/// Ages outside the configured range are not expected in the source domain;
/// they yield `None` rather than an error.
#[must_use]
pub fn bin_age(age: i32, config: &AgeBinConfig) -> Option<AgeGroup> {
    let [lowest, first, second, last] = config.edges;
    if age >= lowest && age <= first {
        Some(AgeGroup::YoungAdults)
    } else if age > first && age <= second {
        Some(AgeGroup::MiddleAged)
    } else if age > second && age <= last {
        Some(AgeGroup::OlderAdults)
    } else {
        None
    }
}
