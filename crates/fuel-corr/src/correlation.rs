use std::fmt;
use std::str::FromStr;

use fuel_core::errors::{ErrorInfo, FuelError};
use fuel_core::{InputVar, OperatingPoint};
use serde::{Deserialize, Serialize};

use crate::forms::{rogozkin_fgr, ross_swelling, storms_fgr};

/// Physical quantity returned by a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Response {
    /// Fission gas release fraction, %.
    FissionGasRelease,
    /// Volumetric swelling ΔV/V, %.
    Swelling,
}

/// Empirical correlation selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Correlation {
    /// Sigmoid saturation FGR form of T, BU and density.
    Storms,
    /// Arrhenius-type FGR form of T and BU.
    Rogozkin,
    /// Power-law swelling form of T, BU and density.
    Ross,
}

const STORMS_INPUTS: [InputVar; 3] = [InputVar::Temperature, InputVar::Burnup, InputVar::Density];
const ROGOZKIN_INPUTS: [InputVar; 2] = [InputVar::Temperature, InputVar::Burnup];
const ROSS_INPUTS: [InputVar; 3] = [InputVar::Temperature, InputVar::Burnup, InputVar::Density];

impl Correlation {
    /// Every supported correlation.
    pub const ALL: [Correlation; 3] = [Correlation::Storms, Correlation::Rogozkin, Correlation::Ross];

    /// The two fission gas release forms compared in the sensitivity study.
    pub const FGR: [Correlation; 2] = [Correlation::Storms, Correlation::Rogozkin];

    /// Resolves a correlation by name. `form-a` and `form-b` alias the two
    /// FGR forms, `swelling` aliases Ross.
    pub fn from_name(name: &str) -> Result<Self, FuelError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "storms" | "form-a" | "a" => Ok(Correlation::Storms),
            "rogozkin" | "form-b" | "b" => Ok(Correlation::Rogozkin),
            "ross" | "swelling" => Ok(Correlation::Ross),
            other => Err(FuelError::Config(
                ErrorInfo::new("unknown-correlation", "unsupported correlation name")
                    .with_context("name", other)
                    .with_hint("expected one of storms, rogozkin, ross"),
            )),
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Correlation::Storms => "storms",
            Correlation::Rogozkin => "rogozkin",
            Correlation::Ross => "ross",
        }
    }

    /// Capitalised name for report headers.
    pub fn label(self) -> &'static str {
        match self {
            Correlation::Storms => "Storms",
            Correlation::Rogozkin => "Rogozkin",
            Correlation::Ross => "Ross",
        }
    }

    /// Quantity the correlation predicts.
    pub fn response(self) -> Response {
        match self {
            Correlation::Storms | Correlation::Rogozkin => Response::FissionGasRelease,
            Correlation::Ross => Response::Swelling,
        }
    }

    /// Inputs the correlation depends on, in canonical order.
    pub fn inputs(self) -> &'static [InputVar] {
        match self {
            Correlation::Storms => &STORMS_INPUTS,
            Correlation::Rogozkin => &ROGOZKIN_INPUTS,
            Correlation::Ross => &ROSS_INPUTS,
        }
    }

    /// Whether the response depends on the given input.
    pub fn depends_on(self, var: InputVar) -> bool {
        self.inputs().contains(&var)
    }

    /// Evaluates the correlation at an operating point. Inputs the
    /// correlation does not depend on are ignored.
    pub fn evaluate(self, point: &OperatingPoint) -> Result<f64, FuelError> {
        let result = match self {
            Correlation::Storms => {
                storms_fgr(point.temperature_k, point.burnup_fima, point.density_td)
            }
            Correlation::Rogozkin => rogozkin_fgr(point.temperature_k, point.burnup_fima),
            Correlation::Ross => {
                ross_swelling(point.temperature_k, point.burnup_fima, point.density_td)
            }
        };
        result.map_err(|err| err.with_context("correlation", self.name()))
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Correlation {
    type Err = FuelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Correlation::from_name(value)
    }
}
