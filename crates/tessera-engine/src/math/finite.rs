//! Shared numeric guards for the value types in this module.

use super::NumberError;

/// Returns `value` unchanged if it is finite.
#[inline]
pub(crate) fn require_finite(value: f64, what: &'static str) -> Result<f64, NumberError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumberError::InvalidNumber { what, value })
    }
}

/// Returns `value` unchanged if it is finite and not zero (of either sign).
#[inline]
pub(crate) fn require_non_zero(value: f64, what: &'static str) -> Result<f64, NumberError> {
    let value = require_finite(value, what)?;
    if value == 0.0 {
        return Err(NumberError::DivisionByZero { what });
    }
    Ok(value)
}

/// Clamps a finite percent into `[0, 100]`.
///
/// `-0.0` collapses to `+0.0` so callers can compare bit patterns.
#[inline]
pub(crate) fn clamp_percent(value: f64) -> f64 {
    debug_assert!(value.is_finite());
    let v = value.clamp(0.0, 100.0);
    if v == 0.0 { 0.0 } else { v }
}
