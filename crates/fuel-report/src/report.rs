use std::collections::BTreeMap;

use fuel_core::errors::FuelError;
use fuel_core::provenance::{RunProvenance, SchemaVersion};
use fuel_core::{catalog_hash, stable_hash_string, Specimen};
use fuel_prop::{summarize_regimes, BatchReport, RegimeSummary};
use serde::{Deserialize, Serialize};

/// Serialized record of one propagation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Hashes and tool versions tying the report to its inputs.
    pub provenance: RunProvenance,
    /// Per-specimen outcomes.
    pub batch: BatchReport,
    /// Per-regime variance decomposition means.
    pub regimes: Vec<RegimeSummary>,
    /// Canonical hash of the report with this field left empty.
    pub report_hash: String,
}

/// Assembles the report, its provenance and its hash.
pub fn build_report(
    batch: BatchReport,
    created_at: impl Into<String>,
    tool_versions: BTreeMap<String, String>,
) -> Result<SensitivityReport, FuelError> {
    let specimens: Vec<Specimen> = batch.specimens.iter().map(|e| e.specimen.clone()).collect();
    let provenance = RunProvenance {
        input_hash: stable_hash_string(&(&batch.budget, &batch.opts))?,
        catalog_hash: catalog_hash(&specimens)?,
        created_at: created_at.into(),
        tool_versions,
    };
    let regimes = summarize_regimes(&batch);
    let mut report = SensitivityReport {
        schema_version: SchemaVersion::default(),
        provenance,
        batch,
        regimes,
        report_hash: String::new(),
    };
    report.report_hash = hash_report(&report)?;
    Ok(report)
}

/// Recomputes the canonical hash of a report, ignoring its stored hash.
pub fn hash_report(report: &SensitivityReport) -> Result<String, FuelError> {
    let mut unhashed = report.clone();
    unhashed.report_hash.clear();
    stable_hash_string(&unhashed)
}
