use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FuelError};

/// Physical input variable consumed by a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVar {
    /// Irradiation temperature in kelvin.
    Temperature,
    /// Burnup in %FIMA.
    Burnup,
    /// As-fabricated density in %TD.
    Density,
}

impl InputVar {
    /// All input variables in canonical order.
    pub const ALL: [InputVar; 3] = [InputVar::Temperature, InputVar::Burnup, InputVar::Density];

    /// Stable lowercase name used in configuration files and reports.
    pub fn name(self) -> &'static str {
        match self {
            InputVar::Temperature => "temperature",
            InputVar::Burnup => "burnup",
            InputVar::Density => "density",
        }
    }

    /// Short symbol used in column headers (`T`, `BU`, `TD`).
    pub fn symbol(self) -> &'static str {
        match self {
            InputVar::Temperature => "T",
            InputVar::Burnup => "BU",
            InputVar::Density => "TD",
        }
    }

    /// Unit label for human readable output.
    pub fn unit(self) -> &'static str {
        match self {
            InputVar::Temperature => "K",
            InputVar::Burnup => "%FIMA",
            InputVar::Density => "%TD",
        }
    }
}

impl fmt::Display for InputVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputVar {
    type Err = FuelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "temperature" | "t" => Ok(InputVar::Temperature),
            "burnup" | "bu" => Ok(InputVar::Burnup),
            "density" | "td" | "rho" => Ok(InputVar::Density),
            other => Err(FuelError::Config(
                ErrorInfo::new("unknown-input", "unknown input variable")
                    .with_context("name", other)
                    .with_hint("expected one of temperature, burnup, density"),
            )),
        }
    }
}

/// Values of all physical inputs at which a correlation is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// Temperature in kelvin.
    pub temperature_k: f64,
    /// Burnup in %FIMA.
    pub burnup_fima: f64,
    /// Density in %TD.
    pub density_td: f64,
}

impl OperatingPoint {
    /// Creates an operating point from temperature, burnup and density.
    pub fn new(temperature_k: f64, burnup_fima: f64, density_td: f64) -> Self {
        Self {
            temperature_k,
            burnup_fima,
            density_td,
        }
    }

    /// Returns the value of a single input.
    pub fn get(&self, var: InputVar) -> f64 {
        match var {
            InputVar::Temperature => self.temperature_k,
            InputVar::Burnup => self.burnup_fima,
            InputVar::Density => self.density_td,
        }
    }

    /// Returns a copy with one input replaced, all others untouched.
    pub fn with(&self, var: InputVar, value: f64) -> Self {
        let mut next = *self;
        match var {
            InputVar::Temperature => next.temperature_k = value,
            InputVar::Burnup => next.burnup_fima = value,
            InputVar::Density => next.density_td = value,
        }
        next
    }
}

/// Immutable record describing one irradiated specimen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specimen {
    /// Specimen identifier, e.g. `RRN01-6`.
    pub id: String,
    /// Irradiation target the specimen was loaded in.
    pub target: u8,
    /// Time and volume averaged irradiation temperature in kelvin.
    pub temperature_k: f64,
    /// Burnup in %FIMA.
    pub burnup_fima: f64,
    /// As-fabricated density in %TD.
    pub density_td: f64,
}

impl Specimen {
    /// Operating point at which correlations are evaluated for this specimen.
    pub fn point(&self) -> OperatingPoint {
        OperatingPoint::new(self.temperature_k, self.burnup_fima, self.density_td)
    }
}
