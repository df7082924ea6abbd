//! Closed-form correlations and their validity checks.

use fuel_core::errors::{ErrorInfo, FuelError};

/// Constants of the Storms sigmoid fission gas release correlation.
pub mod storms {
    /// Exponential steepness, 1/K.
    pub const K: f64 = 0.0025;
    /// Density prefactor, K.
    pub const C1: f64 = 90.0;
    /// Density exponent.
    pub const A: f64 = 0.77;
    /// Burnup exponent.
    pub const B: f64 = 0.09;
}

/// Constants of the Rogozkin Arrhenius-type fission gas release correlation.
pub mod rogozkin {
    /// Prefactor, %.
    pub const C2: f64 = 3.05;
    /// Burnup exponent.
    pub const P: f64 = 1.92;
    /// Activation temperature, °C.
    pub const E: f64 = 2086.0;
}

/// Constants of the Ross volumetric swelling correlation.
pub mod ross {
    /// Prefactor.
    pub const C: f64 = 4.7e-11;
    /// Temperature exponent.
    pub const T_EXP: f64 = 3.12;
    /// Burnup exponent.
    pub const BU_EXP: f64 = 0.83;
    /// Density exponent.
    pub const TD_EXP: f64 = 0.5;
}

/// Offset between the kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

fn require_positive(name: &str, value: f64) -> Result<(), FuelError> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(FuelError::Domain(
        ErrorInfo::new(
            format!("non-positive-{name}"),
            format!("{name} must be finite and strictly positive"),
        )
        .with_context(name, value.to_string()),
    ))
}

fn require_finite(correlation: &str, value: f64) -> Result<f64, FuelError> {
    if value.is_finite() {
        return Ok(value);
    }
    Err(FuelError::Domain(
        ErrorInfo::new("non-finite-response", "correlation produced a non-finite value")
            .with_context("correlation", correlation)
            .with_context("value", value.to_string()),
    ))
}

/// Storms FGR (%) for temperature in K, burnup in %FIMA and density in %TD.
///
/// Far from the release onset the sigmoid rounds to exactly 0 or 100 in
/// `f64`; such results are rejected so every value lies in (0, 100).
pub fn storms_fgr(temperature_k: f64, burnup_fima: f64, density_td: f64) -> Result<f64, FuelError> {
    require_positive("temperature", temperature_k)?;
    require_positive("burnup", burnup_fima)?;
    require_positive("density", density_td)?;
    let onset = storms::C1 * density_td.powf(storms::A) / burnup_fima.powf(storms::B);
    let value = 100.0 / ((storms::K * (onset - temperature_k)).exp() + 1.0);
    let value = require_finite("storms", value)?;
    if value <= 0.0 || value >= 100.0 {
        return Err(FuelError::Domain(
            ErrorInfo::new("saturated-response", "sigmoid saturated outside (0, 100)")
                .with_context("correlation", "storms")
                .with_context("value", value.to_string()),
        ));
    }
    Ok(value)
}

/// Rogozkin FGR (%) for temperature in K and burnup in %FIMA.
///
/// The exponential uses the Celsius temperature, so anything at or below
/// 273.15 K is outside the domain.
pub fn rogozkin_fgr(temperature_k: f64, burnup_fima: f64) -> Result<f64, FuelError> {
    require_positive("burnup", burnup_fima)?;
    let celsius = temperature_k - KELVIN_OFFSET;
    if !celsius.is_finite() || celsius <= 0.0 {
        return Err(FuelError::Domain(
            ErrorInfo::new(
                "non-positive-celsius",
                "temperature must exceed 273.15 K for the Celsius-based exponent",
            )
            .with_context("temperature", temperature_k.to_string()),
        ));
    }
    let value = rogozkin::C2 * burnup_fima.powf(rogozkin::P) * (-rogozkin::E / celsius).exp();
    require_finite("rogozkin", value)
}

/// Ross volumetric swelling ΔV/V (%) for the volume averaged temperature in K.
pub fn ross_swelling(
    temperature_k: f64,
    burnup_fima: f64,
    density_td: f64,
) -> Result<f64, FuelError> {
    require_positive("temperature", temperature_k)?;
    require_positive("burnup", burnup_fima)?;
    require_positive("density", density_td)?;
    let value = ross::C
        * temperature_k.powf(ross::T_EXP)
        * burnup_fima.powf(ross::BU_EXP)
        * density_td.powf(ross::TD_EXP);
    require_finite("ross", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storms_reference_point() {
        let value = storms_fgr(1190.0, 7.058, 92.89).unwrap();
        assert!((value - 3.8899).abs() < 1e-3, "got {value}");
    }

    #[test]
    fn rogozkin_reference_point() {
        let value = rogozkin_fgr(1190.0, 7.058).unwrap();
        assert!((value - 13.3558).abs() < 1e-3, "got {value}");
    }

    #[test]
    fn ross_reference_point() {
        let value = ross_swelling(1190.0, 7.058, 92.89).unwrap();
        assert!((value - 9.0405).abs() < 1e-3, "got {value}");
    }

    #[test]
    fn zero_burnup_rejected_everywhere() {
        for err in [
            storms_fgr(1190.0, 0.0, 92.89).unwrap_err(),
            rogozkin_fgr(1190.0, 0.0).unwrap_err(),
            ross_swelling(1190.0, 0.0, 92.89).unwrap_err(),
        ] {
            assert!(err.is_domain());
            assert_eq!(err.info().code, "non-positive-burnup");
        }
    }

    #[test]
    fn rogozkin_rejects_freezing_point() {
        let err = rogozkin_fgr(KELVIN_OFFSET, 5.0).unwrap_err();
        assert_eq!(err.info().code, "non-positive-celsius");
        assert!(rogozkin_fgr(200.0, 5.0).unwrap_err().is_domain());
    }

    #[test]
    fn storms_saturation_is_rejected() {
        for err in [
            storms_fgr(20000.0, 7.0, 93.0).unwrap_err(),
            storms_fgr(1.0, 7.0, 1e7).unwrap_err(),
        ] {
            assert!(err.is_domain());
            assert_eq!(err.info().code, "saturated-response");
        }
    }

    #[test]
    fn nan_inputs_are_domain_errors() {
        assert!(storms_fgr(f64::NAN, 5.0, 90.0).unwrap_err().is_domain());
        assert!(ross_swelling(1000.0, 5.0, f64::INFINITY).unwrap_err().is_domain());
    }
}
