use std::collections::BTreeMap;

use fuel_core::catalog;
use fuel_core::serde::{from_json_slice, to_canonical_json_bytes};
use fuel_corr::Correlation;
use fuel_prop::{propagate_catalog, summarize_regimes, BatchOpts, Scheduler, UncertaintyBudget};
use fuel_report::{
    build_report, hash_report, render_conditions, render_fgr_table, render_regime_summary,
    render_swelling_table, result_columns, results_csv_string, write_results_csv_file,
};

fn fgr_batch() -> fuel_prop::BatchReport {
    propagate_catalog(
        &catalog(),
        &UncertaintyBudget::default(),
        &BatchOpts::default(),
    )
    .expect("batch")
}

#[test]
fn csv_columns_follow_sensitivity_layout() {
    let columns = result_columns(&fgr_batch());
    assert_eq!(
        columns,
        vec![
            "Sample_ID",
            "Target",
            "T_K",
            "BU_FIMA",
            "TD_pct",
            "FGR_Storms",
            "sigma_Storms",
            "Storms_var_T_pct",
            "Storms_var_BU_pct",
            "Storms_var_TD_pct",
            "FGR_Rogozkin",
            "sigma_Rogozkin",
            "Rogozkin_var_T_pct",
            "Rogozkin_var_BU_pct",
            "Abs_Discrepancy",
            "Regime",
        ]
    );
}

#[test]
fn csv_first_row_has_reference_values() {
    let csv = results_csv_string(&fgr_batch()).expect("csv");
    let mut lines = csv.lines();
    lines.next();
    let first = lines.next().expect("row");
    assert!(first.starts_with("RRN01-6,1,1190,7.0580,92.8900,3.8899,0.4971,"));
    assert!(first.ends_with(",\"Intermediate (~1,173 K)\""));
    assert_eq!(csv.lines().count(), 37);
}

#[test]
fn failed_cells_are_blank() {
    let mut specimens = catalog();
    specimens.truncate(2);
    specimens[1].burnup_fima = -1.0;
    let batch = propagate_catalog(
        &specimens,
        &UncertaintyBudget::default(),
        &BatchOpts::default(),
    )
    .unwrap();
    let csv = results_csv_string(&batch).unwrap();
    let row = csv.lines().nth(2).unwrap();
    assert!(row.starts_with("RRN01-5,1,1190,-1.0000,94.2100,,,,,,,,,,,"));

    let table = render_fgr_table(&batch).expect("render");
    assert!(table.contains("n/a"));
}

#[test]
fn csv_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("sensitivity_results_computed.csv");
    write_results_csv_file(&path, &fgr_batch()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Sample_ID,Target,T_K"));
}

#[test]
fn fgr_table_lists_every_specimen() {
    let table = render_fgr_table(&fgr_batch()).expect("render");
    assert!(table.contains("Input uncertainties: ΔT = ±30.0 K, ΔBU = ±0.5 %FIMA, Δρ = ±2.0 %TD"));
    assert!(table.contains("RRN01-6       1190.0    7.06    92.89      3.89    0.50     13.36    2.07    9.47"));
    assert_eq!(table.lines().filter(|l| l.starts_with("RRN")).count(), 36);
}

#[test]
fn regime_summary_renders_each_regime() {
    let text = render_regime_summary(&summarize_regimes(&fgr_batch())).expect("render");
    assert!(text.contains("Low (~873 K) (n=6 specimens):"));
    assert!(text.contains("Intermediate (~1,173 K) (n=24 specimens):"));
    assert!(text.contains("High (~1,473 K) (n=6 specimens):"));
    assert!(text.contains("  Storms:   T = "));
    assert!(text.contains("  Rogozkin: T = "));
    assert!(text.contains("Avg |Δ| = "));
}

#[test]
fn swelling_and_conditions_tables() {
    let batch = propagate_catalog(
        &catalog(),
        &UncertaintyBudget::default(),
        &BatchOpts {
            correlations: vec![Correlation::Ross],
            scheduler: Scheduler::default(),
        },
    )
    .unwrap();
    let swelling = render_swelling_table(&batch).expect("render");
    assert!(swelling.contains("RRN01-6          1190        7.058      92.89       9.04"));

    let conditions = render_conditions(&catalog()).expect("render");
    assert!(conditions.contains("RRN03    n=6  BU 3.498-3.852  T 1172-1187 K"));
}

#[test]
fn report_hash_is_reproducible() {
    let report = build_report(fgr_batch(), "2025-01-01T00:00:00Z", BTreeMap::new()).unwrap();
    assert_eq!(report.report_hash, hash_report(&report).unwrap());
    assert_eq!(report.regimes.len(), 3);

    let again = build_report(fgr_batch(), "2025-01-01T00:00:00Z", BTreeMap::new()).unwrap();
    assert_eq!(report.report_hash, again.report_hash);

    let bytes = to_canonical_json_bytes(&report).unwrap();
    let decoded: fuel_report::SensitivityReport = from_json_slice(&bytes).unwrap();
    assert_eq!(decoded.report_hash, report.report_hash);
    assert_eq!(decoded.provenance, report.provenance);
}
