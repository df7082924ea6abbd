use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use fuel_core::errors::{ErrorInfo, FuelError};
use fuel_corr::{Correlation, Response};
use fuel_prop::{BatchReport, Regime, SpecimenReport};

fn wrap_csv(code: &str, err: csv::Error) -> FuelError {
    FuelError::Io(ErrorInfo::new(code, err.to_string()))
}

fn value_prefix(correlation: Correlation) -> &'static str {
    match correlation.response() {
        Response::FissionGasRelease => "FGR",
        Response::Swelling => "Swelling",
    }
}

fn has_fgr_pair(report: &BatchReport) -> bool {
    Correlation::FGR
        .iter()
        .all(|c| report.opts.correlations.contains(c))
}

fn fmt4(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.4}")).unwrap_or_default()
}

/// Column names of the results table for the correlations in `report`.
pub fn result_columns(report: &BatchReport) -> Vec<String> {
    let mut columns: Vec<String> = ["Sample_ID", "Target", "T_K", "BU_FIMA", "TD_pct"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    for &correlation in &report.opts.correlations {
        let label = correlation.label();
        columns.push(format!("{}_{label}", value_prefix(correlation)));
        columns.push(format!("sigma_{label}"));
        for var in correlation.inputs() {
            columns.push(format!("{label}_var_{}_pct", var.symbol()));
        }
    }
    if has_fgr_pair(report) {
        columns.push("Abs_Discrepancy".to_string());
    }
    columns.push("Regime".to_string());
    columns
}

fn result_row(report: &BatchReport, entry: &SpecimenReport) -> Vec<String> {
    let specimen = &entry.specimen;
    let mut row = vec![
        specimen.id.clone(),
        specimen.target.to_string(),
        format!("{:.0}", specimen.temperature_k),
        format!("{:.4}", specimen.burnup_fima),
        format!("{:.4}", specimen.density_td),
    ];
    for &correlation in &report.opts.correlations {
        let propagation = entry.propagation(correlation);
        row.push(fmt4(propagation.map(|p| p.value)));
        row.push(fmt4(propagation.map(|p| p.sigma)));
        for &var in correlation.inputs() {
            row.push(fmt4(propagation.and_then(|p| p.contribution(var))));
        }
    }
    if has_fgr_pair(report) {
        row.push(fmt4(entry.discrepancy));
    }
    row.push(Regime::classify(specimen.temperature_k).label().to_string());
    row
}

/// Writes one CSV row per specimen with values, sigmas and variance
/// contributions at four decimals; `T_K` is a whole number of kelvin.
/// Failed evaluations leave empty cells.
pub fn write_results_csv<W: Write>(writer: W, report: &BatchReport) -> Result<(), FuelError> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer
        .write_record(result_columns(report))
        .map_err(|err| wrap_csv("csv-write-header", err))?;
    for entry in &report.specimens {
        writer
            .write_record(result_row(report, entry))
            .map_err(|err| wrap_csv("csv-write-row", err))?;
    }
    writer
        .flush()
        .map_err(|err| wrap_csv("csv-flush", err.into()))?;
    Ok(())
}

/// Renders the results CSV into a string.
pub fn results_csv_string(report: &BatchReport) -> Result<String, FuelError> {
    let mut buffer = Vec::new();
    write_results_csv(&mut buffer, report)?;
    String::from_utf8(buffer).map_err(|err| FuelError::Serde(ErrorInfo::new("csv-utf8", err.to_string())))
}

/// Writes the results CSV to `path`, creating parent directories.
pub fn write_results_csv_file(path: &Path, report: &BatchReport) -> Result<(), FuelError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            FuelError::Io(
                ErrorInfo::new("csv-mkdir", err.to_string())
                    .with_context("path", parent.display().to_string()),
            )
        })?;
    }
    let file = File::create(path).map_err(|err| {
        FuelError::Io(
            ErrorInfo::new("csv-open", "failed to create CSV file")
                .with_context("path", path.display().to_string())
                .with_hint(err.to_string()),
        )
    })?;
    write_results_csv(BufWriter::new(file), report)
}
