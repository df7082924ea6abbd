#![deny(missing_docs)]
#![doc = "First-order uncertainty propagation and variance decomposition for fuel correlations."]

/// Catalog-wide batch driver.
pub mod batch;
/// Uncertainty budget and YAML loading.
pub mod budget;
pub mod diff;
/// Single-point propagation.
pub mod propagate;
/// Temperature regime aggregation.
pub mod regime;
/// Variance composition.
pub mod variance;

pub use batch::{
    propagate_catalog, propagate_specimen, BatchOpts, BatchReport, CorrelationOutcome, Outcome,
    Scheduler, SpecimenReport,
};
pub use budget::{load_budget, InputUncertainty, UncertaintyBudget};
pub use diff::{central_difference, partial_derivative};
pub use propagate::{propagate, Propagation};
pub use regime::{summarize_regimes, Regime, RegimeSummary};
pub use variance::{compose, Sensitivity, VarianceBreakdown, VarianceTerm};
