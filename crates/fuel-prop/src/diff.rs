//! Central finite differences.
//!
//! The step is supplied by the caller per variable and never refined; the
//! truncation error is O(h²) for smooth responses.

use fuel_core::errors::{ErrorInfo, FuelError};
use fuel_core::{InputVar, OperatingPoint};
use fuel_corr::Correlation;

/// Estimates `f'(x)` as `(f(x + h) - f(x - h)) / 2h`.
///
/// Errors raised by `f` at either perturbed point are returned unchanged.
pub fn central_difference<F>(f: F, x: f64, step: f64) -> Result<f64, FuelError>
where
    F: Fn(f64) -> Result<f64, FuelError>,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(FuelError::Config(
            ErrorInfo::new("invalid-step", "step size must be finite and strictly positive")
                .with_context("step", step.to_string()),
        ));
    }
    let forward = f(x + step)?;
    let backward = f(x - step)?;
    Ok((forward - backward) / (2.0 * step))
}

/// Partial derivative of `correlation` with respect to `var` at `point`,
/// holding every other input fixed.
pub fn partial_derivative(
    correlation: Correlation,
    point: &OperatingPoint,
    var: InputVar,
    step: f64,
) -> Result<f64, FuelError> {
    central_difference(
        |value| correlation.evaluate(&point.with(var, value)),
        point.get(var),
        step,
    )
    .map_err(|err| err.with_context("input", var.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_matches_closed_form() {
        let step = 1e-3;
        for x in [-3.0, 0.5, 2.0, 17.0] {
            let estimate = central_difference(|v| Ok(v * v), x, step).unwrap();
            // Exact for quadratics up to rounding.
            assert!((estimate - 2.0 * x).abs() < 1e-9, "x={x} got {estimate}");
        }
    }

    #[test]
    fn cubic_error_scales_with_step_squared() {
        let x = 1.5;
        let exact = 3.0 * x * x;
        for step in [0.1, 0.01] {
            let estimate = central_difference(|v| Ok(v * v * v), x, step).unwrap();
            // Truncation term for x³ is exactly h².
            assert!((estimate - exact - step * step).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_non_positive_step() {
        let err = central_difference(|v| Ok(v), 1.0, 0.0).unwrap_err();
        assert!(err.is_config());
        assert!(central_difference(|v| Ok(v), 1.0, f64::NAN).is_err());
    }

    #[test]
    fn domain_error_at_perturbed_point_propagates() {
        // T - h falls below 273.15 K.
        let point = OperatingPoint::new(273.6, 5.0, 95.0);
        let err = partial_derivative(Correlation::Rogozkin, &point, InputVar::Temperature, 1.0)
            .unwrap_err();
        assert!(err.is_domain());
        assert_eq!(err.info().context.get("input"), Some(&"temperature".to_string()));
    }

    #[test]
    fn rogozkin_density_partial_is_zero() {
        let point = OperatingPoint::new(1190.0, 7.058, 92.89);
        let d = partial_derivative(Correlation::Rogozkin, &point, InputVar::Density, 0.1).unwrap();
        assert_eq!(d, 0.0);
    }
}
