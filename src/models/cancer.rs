//! Cancer diagnosis and cancer-type categories
//!
//! This module defines the categorical types produced by the recoding and
//! aggregation passes: the binary diagnosis answer, the twelve cancer sites
//! tracked by the survey, and the single mutually-exclusive cancer-type
//! category derived from them. Display order and colors are part of the
//! public contract; downstream consumers rely on stable category identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Recoded primary cancer diagnosis answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    /// Respondent reported a cancer diagnosis
    Yes,
    /// Respondent reported no cancer diagnosis
    No,
}

impl Diagnosis {
    /// Display label with the sort-priority prefix
    ///
    /// The numeric prefix makes labels sort in display priority order, not
    /// alphabetically by meaning.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "1. Yes",
            Self::No => "2. No",
        }
    }

    /// Fixed display color for this answer
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Yes => "lightcoral",
            Self::No => "lightgreen",
        }
    }

    /// All diagnosis answers in display order
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Yes, Self::No]
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the twelve cancer sites tracked by the survey's indicator columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CancerSite {
    /// Bladder cancer
    Bladder,
    /// Breast cancer
    Breast,
    /// Cervical cancer
    Cervical,
    /// Colon cancer
    Colon,
    /// Lung cancer
    Lung,
    /// Lymphoma
    Lymphoma,
    /// Melanoma skin cancer
    SkinMelanoma,
    /// Any other cancer site
    OtherSite,
    /// Prostate cancer
    Prostate,
    /// Non-melanoma skin cancer
    SkinNonMelanoma,
    /// Skin cancer of unknown type
    SkinUnknown,
    /// Uterine cancer
    Uterine,
}

impl CancerSite {
    /// All sites in survey column order
    #[must_use]
    pub const fn all() -> [Self; 12] {
        [
            Self::Bladder,
            Self::Breast,
            Self::Cervical,
            Self::Colon,
            Self::Lung,
            Self::Lymphoma,
            Self::SkinMelanoma,
            Self::OtherSite,
            Self::Prostate,
            Self::SkinNonMelanoma,
            Self::SkinUnknown,
            Self::Uterine,
        ]
    }

    /// Raw survey column code for this site's indicator
    #[must_use]
    pub const fn survey_code(self) -> &'static str {
        match self {
            Self::Bladder => "CABLADDR",
            Self::Breast => "CABREAST",
            Self::Cervical => "CACERVIX",
            Self::Colon => "CACOLON",
            Self::Lung => "CALUNG",
            Self::Lymphoma => "CALYMPH",
            Self::SkinMelanoma => "CAMELANO",
            Self::OtherSite => "CAOTHER",
            Self::Prostate => "CAPROSTA",
            Self::SkinNonMelanoma => "CASKINNM",
            Self::SkinUnknown => "CASKINDK",
            Self::Uterine => "CAUTERUS",
        }
    }

    /// Display name for this site
    ///
    /// Skin sites embed a line break so the two-line form fits plot legends.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bladder => "Bladder",
            Self::Breast => "Breast",
            Self::Cervical => "Cervical",
            Self::Colon => "Colon",
            Self::Lung => "Lung",
            Self::Lymphoma => "Lymphoma",
            Self::SkinMelanoma => "Skin\nMelanoma",
            Self::OtherSite => "Other",
            Self::Prostate => "Prostate",
            Self::SkinNonMelanoma => "Skin\nNon-melanoma",
            Self::SkinUnknown => "Skin\nUnknown type",
            Self::Uterine => "Uterine",
        }
    }

    /// Position of this site in the indicator array
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Bladder => 0,
            Self::Breast => 1,
            Self::Cervical => 2,
            Self::Colon => 3,
            Self::Lung => 4,
            Self::Lymphoma => 5,
            Self::SkinMelanoma => 6,
            Self::OtherSite => 7,
            Self::Prostate => 8,
            Self::SkinNonMelanoma => 9,
            Self::SkinUnknown => 10,
            Self::Uterine => 11,
        }
    }

    /// Whether the site occurs independently of respondent sex
    ///
    /// Breast, cervical, uterine and prostate cancers are excluded from
    /// sex-pooled comparisons.
    #[must_use]
    pub const fn sex_independent(self) -> bool {
        !matches!(
            self,
            Self::Breast | Self::Cervical | Self::Uterine | Self::Prostate
        )
    }
}

impl fmt::Display for CancerSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The single mutually-exclusive cancer-type category per respondent
///
/// Every respondent is assigned exactly one value by the aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CancerType {
    /// No cancer diagnosis
    No,
    /// Two or more site indicators were affirmative
    Multiple,
    /// Diagnosis was affirmative but no site could be resolved
    ///
    /// Preserves the source behavior of relabeling a plain "Yes" answer as
    /// "DK / Refused" once no site indicator resolves; the overloaded label
    /// is a suspected bug in the source dashboard (see DESIGN.md) and is kept
    /// verbatim.
    DkRefused,
    /// Exactly one site indicator was affirmative
    Site(CancerSite),
}

impl CancerType {
    /// Display label with the sort-priority prefix
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::No => "2. No".to_string(),
            Self::Multiple => "0. Multiple".to_string(),
            Self::DkRefused => "1. DK / Refused".to_string(),
            Self::Site(site) => format!("1. {}", site.display_name()),
        }
    }

    /// All cancer-type values in fixed display order
    ///
    /// Physiologically related sites are adjacent so shared hues group in
    /// legends. The ordering is stable public contract.
    #[must_use]
    pub fn display_order() -> Vec<Self> {
        vec![
            Self::No,
            Self::Multiple,
            Self::DkRefused,
            Self::Site(CancerSite::OtherSite),
            Self::Site(CancerSite::Breast),
            Self::Site(CancerSite::Cervical),
            Self::Site(CancerSite::Uterine),
            Self::Site(CancerSite::Prostate),
            Self::Site(CancerSite::Bladder),
            Self::Site(CancerSite::Colon),
            Self::Site(CancerSite::Lung),
            Self::Site(CancerSite::SkinMelanoma),
            Self::Site(CancerSite::SkinNonMelanoma),
            Self::Site(CancerSite::SkinUnknown),
            Self::Site(CancerSite::Lymphoma),
        ]
    }

    /// Fixed display color for this category
    ///
    /// Physiologically related sites share a hue: reproductive cancers are
    /// purple, digestive and urinary green, skin orange, lymphatic violet.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::No => "#E0E6EA",
            Self::Multiple => "#616161",
            Self::DkRefused => "#9E9E9E",
            Self::Site(site) => match site {
                CancerSite::Breast
                | CancerSite::Cervical
                | CancerSite::Uterine
                | CancerSite::Prostate => "#C97BA7",
                CancerSite::Bladder | CancerSite::Colon => "#4CAF50",
                CancerSite::Lung => "#42A5F5",
                CancerSite::SkinMelanoma
                | CancerSite::SkinNonMelanoma
                | CancerSite::SkinUnknown => "#FFA726",
                CancerSite::Lymphoma => "#7E57C2",
                CancerSite::OtherSite => "#9E9E9E",
            },
        }
    }
}

impl fmt::Display for CancerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
