use fuel_core::errors::{ErrorInfo, FuelError};
use fuel_core::Specimen;
use fuel_corr::Correlation;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::budget::UncertaintyBudget;
use crate::propagate::{propagate, Propagation};

/// Scheduler configuration controlling batch execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheduler {
    /// Worker threads; 0 and 1 both run sequentially on the caller's thread.
    #[serde(default = "Scheduler::default_parallelism")]
    pub parallelism: usize,
}

impl Scheduler {
    const fn default_parallelism() -> usize {
        1
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            parallelism: Self::default_parallelism(),
        }
    }
}

/// Options for a catalog-wide propagation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOpts {
    /// Correlations evaluated for every specimen, in report order.
    #[serde(default = "BatchOpts::default_correlations")]
    pub correlations: Vec<Correlation>,
    /// Execution scheduling.
    #[serde(default)]
    pub scheduler: Scheduler,
}

impl BatchOpts {
    fn default_correlations() -> Vec<Correlation> {
        Correlation::FGR.to_vec()
    }
}

impl Default for BatchOpts {
    fn default() -> Self {
        Self {
            correlations: Self::default_correlations(),
            scheduler: Scheduler::default(),
        }
    }
}

/// Result of one (specimen, correlation) evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum Outcome {
    /// Propagation succeeded.
    Ok(Propagation),
    /// Propagation failed with a domain or configuration error.
    Failed(FuelError),
}

impl Outcome {
    /// Successful propagation, if any.
    pub fn propagation(&self) -> Option<&Propagation> {
        match self {
            Outcome::Ok(propagation) => Some(propagation),
            Outcome::Failed(_) => None,
        }
    }

    /// Error, if the evaluation failed.
    pub fn error(&self) -> Option<&FuelError> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Failed(err) => Some(err),
        }
    }
}

impl From<Result<Propagation, FuelError>> for Outcome {
    fn from(result: Result<Propagation, FuelError>) -> Self {
        match result {
            Ok(propagation) => Outcome::Ok(propagation),
            Err(err) => Outcome::Failed(err),
        }
    }
}

/// Outcome of a single correlation for a specimen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationOutcome {
    /// Evaluated correlation.
    pub correlation: Correlation,
    /// Result of the evaluation.
    pub outcome: Outcome,
}

/// All outcomes for one specimen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecimenReport {
    /// Input record.
    pub specimen: Specimen,
    /// One outcome per requested correlation, in request order.
    pub outcomes: Vec<CorrelationOutcome>,
    /// |FGR_Storms − FGR_Rogozkin| when both forms evaluated successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discrepancy: Option<f64>,
}

impl SpecimenReport {
    /// Successful propagation for `correlation`, if it was requested and succeeded.
    pub fn propagation(&self, correlation: Correlation) -> Option<&Propagation> {
        self.outcome(correlation).and_then(Outcome::propagation)
    }

    /// Outcome for `correlation`, if it was requested.
    pub fn outcome(&self, correlation: Correlation) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|entry| entry.correlation == correlation)
            .map(|entry| &entry.outcome)
    }

    /// Number of failed evaluations for this specimen.
    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| entry.outcome.error().is_some())
            .count()
    }
}

/// Catalog-wide propagation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Budget the run used.
    pub budget: UncertaintyBudget,
    /// Options the run used.
    pub opts: BatchOpts,
    /// One entry per specimen, in catalog order.
    pub specimens: Vec<SpecimenReport>,
}

impl BatchReport {
    /// Total number of failed evaluations.
    pub fn failures(&self) -> usize {
        self.specimens.iter().map(SpecimenReport::failures).sum()
    }
}

/// Evaluates every requested correlation for one specimen. Failures are
/// recorded per correlation and never abort the others.
pub fn propagate_specimen(
    specimen: &Specimen,
    correlations: &[Correlation],
    budget: &UncertaintyBudget,
) -> SpecimenReport {
    let point = specimen.point();
    let outcomes: Vec<CorrelationOutcome> = correlations
        .iter()
        .map(|&correlation| {
            let result = propagate(correlation, &point, budget)
                .map_err(|err| err.with_context("specimen", specimen.id.clone()));
            if let Err(err) = &result {
                debug!(
                    specimen = %specimen.id,
                    correlation = correlation.name(),
                    error = %err,
                    "evaluation failed"
                );
            }
            CorrelationOutcome {
                correlation,
                outcome: result.into(),
            }
        })
        .collect();

    let value_of = |correlation: Correlation| {
        outcomes
            .iter()
            .find(|entry| entry.correlation == correlation)
            .and_then(|entry| entry.outcome.propagation())
            .map(|p| p.value)
    };
    let discrepancy = match (value_of(Correlation::Storms), value_of(Correlation::Rogozkin)) {
        (Some(storms), Some(rogozkin)) => Some((storms - rogozkin).abs()),
        _ => None,
    };

    SpecimenReport {
        specimen: specimen.clone(),
        outcomes,
        discrepancy,
    }
}

/// Propagates every specimen through every requested correlation.
///
/// Results keep catalog order regardless of the scheduler's parallelism.
pub fn propagate_catalog(
    specimens: &[Specimen],
    budget: &UncertaintyBudget,
    opts: &BatchOpts,
) -> Result<BatchReport, FuelError> {
    let parallelism = opts.scheduler.parallelism.max(1);
    info!(
        specimens = specimens.len(),
        correlations = opts.correlations.len(),
        parallelism,
        "propagating catalog"
    );

    let reports: Vec<SpecimenReport> = if parallelism == 1 {
        specimens
            .iter()
            .map(|specimen| propagate_specimen(specimen, &opts.correlations, budget))
            .collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parallelism)
            .build()
            .map_err(|err| {
                FuelError::Config(
                    ErrorInfo::new("thread-pool", "failed to build worker pool")
                        .with_context("parallelism", parallelism.to_string())
                        .with_hint(err.to_string()),
                )
            })?;
        pool.install(|| {
            specimens
                .par_iter()
                .map(|specimen| propagate_specimen(specimen, &opts.correlations, budget))
                .collect()
        })
    };

    let report = BatchReport {
        budget: budget.clone(),
        opts: opts.clone(),
        specimens: reports,
    };
    let failures = report.failures();
    if failures > 0 {
        warn!(count = failures, "some evaluations failed");
    }
    Ok(report)
}
