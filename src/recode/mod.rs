//! Categorical recoding of the raw survey table.
//!
//! This pass turns raw survey codes into typed rows: it drops rows whose
//! primary diagnosis carries one of the sentinel codes, relabels the binary
//! diagnosis answer, collapses each site indicator to the three-valued form
//! and normalizes the free-text race labels. The diagnosis column and the
//! site indicators deliberately use different recodings: the diagnosis is a
//! two-valued recode with hard row exclusion, the indicators a three-valued
//! collapse where unknown and refused answers become missing.

use arrow::array::Array;
use arrow::record_batch::RecordBatch;

use crate::config::RecodeConfig;
use crate::error::{MepsError, Result};
use crate::models::{CancerSite, Diagnosis, RecodedRespondent};
use crate::utils::arrow::{int_column, string_column};

/// Normalize a free-text race label
///
/// Strips the configured exact trailing suffixes first, then applies the
/// rename table for the long category labels. The order matters: renaming
/// matches on the stripped form. The whole normalization is idempotent, so
/// running it on already-normalized text is a no-op.
#[must_use]
pub fn normalize_race(raw: &str, config: &RecodeConfig) -> String {
    let mut value = raw;
    for suffix in &config.race_suffixes {
        if let Some(stripped) = value.strip_suffix(suffix.as_str()) {
            value = stripped;
        }
    }
    for (from, to) in &config.race_renames {
        if value == from {
            return to.clone();
        }
    }
    value.to_string()
}

/// Recode one site indicator value
///
/// `Some(true)` for an affirmative answer, `Some(false)` for a negative or
/// inapplicable one, `None` where the answer was unknown, refused or absent.
fn recode_site(raw: Option<&str>, config: &RecodeConfig) -> Result<Option<bool>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw == config.yes_code {
        Ok(Some(true))
    } else if raw == config.no_code || raw == config.inapplicable_code {
        Ok(Some(false))
    } else if config.unknown_codes.iter().any(|code| code == raw) {
        Ok(None)
    } else {
        Err(MepsError::SourceParseFailure {
            reason: format!("unknown site indicator code '{raw}'"),
        })
    }
}

/// Recode the raw survey batches into typed rows
///
/// Rows whose diagnosis code is one of the configured sentinels are excluded
/// entirely, not imputed; they carry no usable signal for the diagnosis
/// question. A null diagnosis carries no more signal than the coded
/// sentinels and is excluded the same way.
///
/// # Errors
/// Returns `ColumnNotFound` or `InvalidDataType` when the batches do not
/// match the survey schema, and `SourceParseFailure` on any unrecognized
/// code. No partial row-set is returned on error.
pub fn recode_batches(
    batches: &[RecordBatch],
    config: &RecodeConfig,
) -> Result<Vec<RecodedRespondent>> {
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for batch in batches {
        let diagnosis = string_column(batch, &config.columns.diagnosis)?;
        let age = int_column(batch, &config.columns.age)?;
        let sex = string_column(batch, &config.columns.sex)?;
        let race = string_column(batch, &config.columns.race)?;
        let sites = CancerSite::all()
            .iter()
            .map(|site| string_column(batch, site.survey_code()))
            .collect::<Result<Vec<_>>>()?;

        for row in 0..batch.num_rows() {
            if diagnosis.is_null(row) {
                dropped += 1;
                continue;
            }
            let diagnosis_code = diagnosis.value(row);
            if config
                .diagnosis_drop_codes
                .iter()
                .any(|code| code == diagnosis_code)
            {
                dropped += 1;
                continue;
            }

            let diagnosis = if diagnosis_code == config.yes_code {
                Diagnosis::Yes
            } else if diagnosis_code == config.no_code {
                Diagnosis::No
            } else {
                return Err(MepsError::SourceParseFailure {
                    reason: format!("unknown diagnosis code '{diagnosis_code}'"),
                });
            };

            let mut indicators = [None; 12];
            for (array, slot) in sites.iter().zip(indicators.iter_mut()) {
                let raw = (!array.is_null(row)).then(|| array.value(row));
                *slot = recode_site(raw, config)?;
            }

            if age.is_null(row) || sex.is_null(row) || race.is_null(row) {
                return Err(MepsError::SourceParseFailure {
                    reason: "null value in demographic column".to_string(),
                });
            }

            rows.push(RecodedRespondent {
                diagnosis,
                sites: indicators,
                age: age.value(row),
                sex: sex.value(row).to_string(),
                race: normalize_race(race.value(row), config),
            });
        }
    }

    log::info!(
        "Recoded {} survey rows ({} dropped by diagnosis sentinel)",
        rows.len(),
        dropped
    );
    Ok(rows)
}
