use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use clap::Args;
use fuel_core::catalog;
use fuel_core::serde::to_canonical_json_bytes;
use fuel_corr::Correlation;
use fuel_prop::propagate_catalog;
use fuel_report::{build_report, render_fgr_table, render_regime_summary, write_results_csv_file};
use tracing::info;

use super::PropagationArgs;

#[derive(Args, Debug)]
pub struct SensitivityArgs {
    /// Output directory for the CSV dump and JSON report.
    #[arg(long, default_value = "data")]
    pub out: PathBuf,
    /// Correlations to evaluate, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = vec!["storms".to_string(), "rogozkin".to_string()])]
    pub correlations: Vec<String>,
    #[command(flatten)]
    pub propagation: PropagationArgs,
}

fn tool_versions() -> BTreeMap<String, String> {
    [("minifuel".to_string(), env!("CARGO_PKG_VERSION").to_string())]
        .into_iter()
        .collect()
}

pub fn run(args: &SensitivityArgs) -> Result<(), Box<dyn Error>> {
    let correlations = args
        .correlations
        .iter()
        .map(|name| Correlation::from_name(name))
        .collect::<Result<Vec<_>, _>>()?;
    let budget = args.propagation.budget()?;
    let opts = args.propagation.batch_opts(&correlations);
    let batch = propagate_catalog(&catalog(), &budget, &opts)?;

    if correlations.contains(&Correlation::Storms) || correlations.contains(&Correlation::Rogozkin)
    {
        print!("{}", render_fgr_table(&batch)?);
    }

    fs::create_dir_all(&args.out)?;
    let csv_path = args.out.join("sensitivity_results_computed.csv");
    write_results_csv_file(&csv_path, &batch)?;

    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let report = build_report(batch, created_at, tool_versions())?;
    println!();
    print!("{}", render_regime_summary(&report.regimes)?);

    let json_path = args.out.join("sensitivity_report.json");
    fs::write(&json_path, to_canonical_json_bytes(&report)?)?;

    info!(
        csv = %csv_path.display(),
        report = %json_path.display(),
        hash = %report.report_hash,
        "sensitivity artefacts written"
    );
    Ok(())
}
