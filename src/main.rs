use std::path::Path;
use std::time::Instant;

use log::{info, warn};
use meps_analysis::{
    AgeBinConfig, Feature, PairwiseConfig, RecodeConfig, Result, crosstab, load_cohort,
    pairwise_significance,
};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/h216.parquet".to_string());
    let path = Path::new(&path);
    if !path.exists() {
        warn!("Survey data file not found: {}", path.display());
        return Ok(());
    }

    info!("Loading survey data from: {}", path.display());
    let start = Instant::now();
    let cohort = load_cohort(path, &RecodeConfig::default(), &AgeBinConfig::default())?;
    info!(
        "Prepared cohort of {} respondents in {:?}",
        cohort.len(),
        start.elapsed()
    );

    // Diagnosis distribution and its relation to sex
    let diagnosis = cohort.value_counts(Feature::CancerDiagnosis)?;
    info!(
        "Diagnosis distribution: {}",
        serde_json::to_string(&diagnosis).expect("counts serialize")
    );

    let by_sex = crosstab(&cohort, Feature::CancerDiagnosis, Feature::Sex, None)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&by_sex).expect("crosstab serializes")
    );

    // Age comparison between cancer types, excluding the No answer
    let with_cancer = cohort.exclude(Feature::CancerType, "2. No");
    let pairwise = pairwise_significance(
        &with_cancer,
        Feature::CancerType,
        Feature::Age,
        &PairwiseConfig::default(),
    )?;
    println!(
        "{}",
        serde_json::to_string_pretty(&pairwise).expect("pairwise serializes")
    );

    Ok(())
}
