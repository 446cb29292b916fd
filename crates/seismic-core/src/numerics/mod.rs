pub mod amplification;

pub use amplification::{
    FU_LOWER_PLATEAU_LIMIT, FU_TAPER_WIDTH, FU_TRANSITION_LIMIT, FU_UPPER_PLATEAU_LIMIT,
    amplification_factor,
};

use crate::domain::{SeismicError, SeismicResult};

pub const SPECTRAL_DIGITS: usize = 3;
pub const COEFFICIENT_DIGITS: usize = 5;
pub const FORCE_DIGITS: usize = 2;

/// Rounds on the exact decimal expansion of `value`, the way the tabulated
/// reference values were produced. Non-finite values pass through unchanged.
pub fn round_decimal(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = format!("{value:.digits$}")
        .parse::<f64>()
        .unwrap_or(value);
    // normalise -0.0 so payloads never carry a negative zero
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Straight-line interpolation between `(x0, y0)` and `(x1, y1)`.
///
/// The operation order is fixed (`y0 + (x - x0) * (y1 - y0) / (x1 - x0)`) so
/// results reproduce the reference tables bit for bit before rounding.
pub fn linear_interpolate(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

/// Divides `numerator` by `denominator`, rejecting zero or non-finite
/// denominators and non-finite quotients.
pub fn checked_quotient(quantity: &str, numerator: f64, denominator: f64) -> SeismicResult<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(SeismicError::computation(format!(
            "cannot evaluate {quantity}: denominator is {}",
            format_decimal(denominator)
        )));
    }
    ensure_finite(quantity, numerator / denominator)
}

pub fn ensure_finite(quantity: &str, value: f64) -> SeismicResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SeismicError::computation(format!(
            "cannot evaluate {quantity}: result is not finite"
        )))
    }
}

/// Renders a float the way the legacy reports did: integral values keep a
/// trailing `.0`, everything else uses the shortest round-trip form.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1.0e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
