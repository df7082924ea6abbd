use fuel_core::InputVar;
use serde::{Deserialize, Serialize};

/// Derivative and uncertainty of one input, the raw material of a variance term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensitivity {
    /// Input the derivative was taken with respect to.
    pub input: InputVar,
    /// Estimated partial derivative ∂f/∂x.
    pub derivative: f64,
    /// Absolute uncertainty Δx.
    pub uncertainty: f64,
}

/// Contribution of a single input to the propagated variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceTerm {
    /// Input the term belongs to.
    pub input: InputVar,
    /// Estimated partial derivative ∂f/∂x.
    pub derivative: f64,
    /// Absolute uncertainty Δx.
    pub uncertainty: f64,
    /// (∂f/∂x · Δx)².
    pub variance: f64,
    /// Share of the total variance in percent; 0 when the total is 0.
    pub contribution_pct: f64,
}

/// First-order variance decomposition over independent inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceBreakdown {
    /// One term per input, in the order supplied.
    pub terms: Vec<VarianceTerm>,
    /// Sum of all variance terms.
    pub total_variance: f64,
    /// Propagated standard deviation √V.
    pub sigma: f64,
}

impl VarianceBreakdown {
    /// Contribution in percent of `input`, if it is part of the breakdown.
    pub fn contribution(&self, input: InputVar) -> Option<f64> {
        self.terms
            .iter()
            .find(|term| term.input == input)
            .map(|term| term.contribution_pct)
    }

    /// Sum of all contributions: 100 when the total variance is positive, 0 otherwise.
    pub fn contribution_sum(&self) -> f64 {
        self.terms.iter().map(|term| term.contribution_pct).sum()
    }
}

/// Composes per-input sensitivities into variance terms, total variance,
/// standard deviation and percentage contributions.
///
/// No covariance terms are included. A zero total variance reports every
/// contribution as 0 instead of dividing by zero.
pub fn compose(sensitivities: &[Sensitivity]) -> VarianceBreakdown {
    let variances: Vec<f64> = sensitivities
        .iter()
        .map(|s| (s.derivative * s.uncertainty).powi(2))
        .collect();
    let total_variance: f64 = variances.iter().sum();
    let terms = sensitivities
        .iter()
        .zip(&variances)
        .map(|(s, &variance)| VarianceTerm {
            input: s.input,
            derivative: s.derivative,
            uncertainty: s.uncertainty,
            variance,
            contribution_pct: if total_variance > 0.0 {
                100.0 * variance / total_variance
            } else {
                0.0
            },
        })
        .collect();
    VarianceBreakdown {
        terms,
        total_variance,
        sigma: total_variance.sqrt(),
    }
}
