use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use fuel_core::errors::{ErrorInfo, FuelError};
use fuel_core::serde::{from_yaml_slice, to_yaml_string};
use fuel_core::InputVar;
use serde::{Deserialize, Serialize};

/// Absolute uncertainty and differentiation step for a single input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputUncertainty {
    /// One-sigma absolute uncertainty Δx, in the input's unit.
    pub delta: f64,
    /// Central difference step h. Purely numerical, unrelated to `delta`.
    pub step: f64,
}

impl InputUncertainty {
    /// Creates an entry from an uncertainty magnitude and a step size.
    pub const fn new(delta: f64, step: f64) -> Self {
        Self { delta, step }
    }
}

/// Per-input uncertainty budget keyed by [`InputVar`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UncertaintyBudget {
    entries: BTreeMap<InputVar, InputUncertainty>,
}

impl Default for UncertaintyBudget {
    /// ΔT = 30 K (h = 1 K), ΔBU = 0.5 %FIMA (h = 0.01), Δρ = 2 %TD (h = 0.1).
    fn default() -> Self {
        Self::empty()
            .with_entry(InputVar::Temperature, InputUncertainty::new(30.0, 1.0))
            .with_entry(InputVar::Burnup, InputUncertainty::new(0.5, 0.01))
            .with_entry(InputVar::Density, InputUncertainty::new(2.0, 0.1))
    }
}

impl UncertaintyBudget {
    /// Budget without any entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the budget with `var` set to `entry`.
    pub fn with_entry(mut self, var: InputVar, entry: InputUncertainty) -> Self {
        self.entries.insert(var, entry);
        self
    }

    /// Returns the budget without an entry for `var`.
    pub fn without(mut self, var: InputVar) -> Self {
        self.entries.remove(&var);
        self
    }

    /// Returns the budget with the uncertainty of `var` multiplied by `factor`.
    /// The step size is left untouched.
    pub fn scaled(mut self, var: InputVar, factor: f64) -> Self {
        if let Some(entry) = self.entries.get_mut(&var) {
            entry.delta *= factor;
        }
        self
    }

    /// Looks up the entry for a required input.
    pub fn get(&self, var: InputVar) -> Result<InputUncertainty, FuelError> {
        let entry = self.entries.get(&var).copied().ok_or_else(|| {
            FuelError::Config(
                ErrorInfo::new("missing-uncertainty", "no uncertainty entry for required input")
                    .with_context("input", var.name())
                    .with_hint("add delta and step for this input to the budget"),
            )
        })?;
        validate_entry(var, &entry)?;
        Ok(entry)
    }

    /// Iterates over all configured entries in canonical input order.
    pub fn entries(&self) -> impl Iterator<Item = (InputVar, InputUncertainty)> + '_ {
        self.entries.iter().map(|(var, entry)| (*var, *entry))
    }

    /// Checks every configured entry.
    pub fn validate(&self) -> Result<(), FuelError> {
        for (var, entry) in &self.entries {
            validate_entry(*var, entry)?;
        }
        Ok(())
    }

    /// Serializes the budget as YAML.
    pub fn to_yaml_string(&self) -> Result<String, FuelError> {
        to_yaml_string(self)
    }
}

fn validate_entry(var: InputVar, entry: &InputUncertainty) -> Result<(), FuelError> {
    if !entry.delta.is_finite() || entry.delta < 0.0 {
        return Err(FuelError::Config(
            ErrorInfo::new("invalid-uncertainty", "uncertainty must be finite and non-negative")
                .with_context("input", var.name())
                .with_context("delta", entry.delta.to_string()),
        ));
    }
    if !entry.step.is_finite() || entry.step <= 0.0 {
        return Err(FuelError::Config(
            ErrorInfo::new("invalid-step", "step size must be finite and strictly positive")
                .with_context("input", var.name())
                .with_context("step", entry.step.to_string()),
        ));
    }
    Ok(())
}

/// Loads a budget from a YAML file and validates every entry.
pub fn load_budget<P: AsRef<Path>>(path: P) -> Result<UncertaintyBudget, FuelError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| {
        FuelError::Io(
            ErrorInfo::new("budget_read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let budget: UncertaintyBudget = from_yaml_slice(&bytes)?;
    budget.validate()?;
    Ok(budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_matches_documented_values() {
        let budget = UncertaintyBudget::default();
        assert_eq!(
            budget.get(InputVar::Temperature).unwrap(),
            InputUncertainty::new(30.0, 1.0)
        );
        assert_eq!(
            budget.get(InputVar::Burnup).unwrap(),
            InputUncertainty::new(0.5, 0.01)
        );
        assert_eq!(
            budget.get(InputVar::Density).unwrap(),
            InputUncertainty::new(2.0, 0.1)
        );
    }

    #[test]
    fn missing_entry_is_configuration_error() {
        let budget = UncertaintyBudget::default().without(InputVar::Density);
        let err = budget.get(InputVar::Density).unwrap_err();
        assert!(err.is_config());
        assert_eq!(err.info().code, "missing-uncertainty");
    }

    #[test]
    fn zero_step_rejected() {
        let budget = UncertaintyBudget::default()
            .with_entry(InputVar::Burnup, InputUncertainty::new(0.5, 0.0));
        assert_eq!(budget.validate().unwrap_err().info().code, "invalid-step");
    }

    #[test]
    fn scaling_keeps_step() {
        let budget = UncertaintyBudget::default().scaled(InputVar::Temperature, 2.0);
        assert_eq!(
            budget.get(InputVar::Temperature).unwrap(),
            InputUncertainty::new(60.0, 1.0)
        );
    }
}
