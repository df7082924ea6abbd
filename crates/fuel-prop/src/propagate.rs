use fuel_core::errors::{ErrorInfo, FuelError};
use fuel_core::{InputVar, OperatingPoint};
use fuel_corr::Correlation;
use serde::{Deserialize, Serialize};

use crate::budget::UncertaintyBudget;
use crate::diff::partial_derivative;
use crate::variance::{compose, Sensitivity, VarianceTerm};

/// Value, propagated standard deviation and variance decomposition of one
/// correlation at one operating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propagation {
    /// Correlation that was evaluated.
    pub correlation: Correlation,
    /// Operating point of the evaluation.
    pub point: OperatingPoint,
    /// Correlation response at `point`.
    pub value: f64,
    /// Propagated standard deviation.
    pub sigma: f64,
    /// Total propagated variance.
    pub total_variance: f64,
    /// Per-input variance terms in the correlation's canonical input order.
    pub terms: Vec<VarianceTerm>,
}

impl Propagation {
    /// Contribution in percent of `input`; `None` when the correlation does
    /// not depend on it.
    pub fn contribution(&self, input: InputVar) -> Option<f64> {
        self.terms
            .iter()
            .find(|term| term.input == input)
            .map(|term| term.contribution_pct)
    }

    /// Variance term of `input`, if present.
    pub fn term(&self, input: InputVar) -> Option<&VarianceTerm> {
        self.terms.iter().find(|term| term.input == input)
    }
}

/// Propagates the budget's input uncertainties through `correlation` at `point`.
///
/// Missing budget entries are reported before anything is evaluated. A domain
/// error at the operating point or at any perturbed point aborts this
/// evaluation only, as does a variance term that overflows `f64`.
pub fn propagate(
    correlation: Correlation,
    point: &OperatingPoint,
    budget: &UncertaintyBudget,
) -> Result<Propagation, FuelError> {
    let entries = correlation
        .inputs()
        .iter()
        .map(|&var| budget.get(var).map(|entry| (var, entry)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| err.with_context("correlation", correlation.name()))?;

    let value = correlation.evaluate(point)?;

    let mut sensitivities = Vec::with_capacity(entries.len());
    for (var, entry) in entries {
        let derivative = partial_derivative(correlation, point, var, entry.step)?;
        sensitivities.push(Sensitivity {
            input: var,
            derivative,
            uncertainty: entry.delta,
        });
    }
    let breakdown = compose(&sensitivities);
    if let Some(term) = breakdown.terms.iter().find(|t| !t.variance.is_finite()) {
        return Err(FuelError::Domain(
            ErrorInfo::new("non-finite-variance", "propagated variance is not finite")
                .with_context("correlation", correlation.name())
                .with_context("input", term.input.name())
                .with_context("uncertainty", term.uncertainty.to_string())
                .with_hint("reduce the uncertainty of this input"),
        ));
    }
    if !breakdown.total_variance.is_finite() {
        return Err(FuelError::Domain(
            ErrorInfo::new("non-finite-variance", "propagated variance is not finite")
                .with_context("correlation", correlation.name())
                .with_context("total_variance", breakdown.total_variance.to_string()),
        ));
    }

    Ok(Propagation {
        correlation,
        point: *point,
        value,
        sigma: breakdown.sigma,
        total_variance: breakdown.total_variance,
        terms: breakdown.terms,
    })
}
