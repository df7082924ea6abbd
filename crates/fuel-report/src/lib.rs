//! Reporting for fuel correlation runs: console tables, CSV dumps and
//! canonical JSON reports.

mod csv_out;
mod report;
pub mod table;

pub use csv_out::{result_columns, results_csv_string, write_results_csv, write_results_csv_file};
pub use report::{build_report, hash_report, SensitivityReport};
pub use table::{render_conditions, render_fgr_table, render_regime_summary, render_swelling_table};
