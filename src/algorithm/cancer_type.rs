//! Cancer-type aggregation
//!
//! Collapses the twelve overlapping per-site indicators into the single
//! mutually-exclusive `CancerType` category. The aggregation is total: every
//! row gets exactly one value, and the raw indicators are projected away
//! afterwards.

use crate::models::{CancerSite, CancerType, Diagnosis, RecodedRespondent};

/// Classify one respondent's cancer type
///
/// The precedence is load-bearing and must not be reordered:
///
/// 1. a negative diagnosis is `No`, unconditionally - indicator values are
///    ignored for such rows even if inconsistently set;
/// 2. two or more affirmative indicators is `Multiple`, regardless of which
///    sites;
/// 3. exactly one affirmative indicator names the site;
/// 4. an affirmative diagnosis with nothing resolvable is `DK / Refused`.
#[must_use]
pub fn classify(diagnosis: Diagnosis, sites: &[Option<bool>; 12]) -> CancerType {
    if diagnosis == Diagnosis::No {
        return CancerType::No;
    }

    let affirmative = sites.iter().filter(|s| **s == Some(true)).count();
    match affirmative {
        0 => CancerType::DkRefused,
        1 => {
            let site = CancerSite::all()
                .into_iter()
                .find(|site| sites[site.index()] == Some(true))
                .expect("affirmative count of one guarantees a match");
            CancerType::Site(site)
        }
        _ => CancerType::Multiple,
    }
}

/// Classify a recoded row
#[must_use]
pub fn classify_respondent(row: &RecodedRespondent) -> CancerType {
    classify(row.diagnosis, &row.sites)
}
