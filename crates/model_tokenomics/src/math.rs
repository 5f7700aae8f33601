//! Float helpers - no panics, no NaN leaks from guarded paths

use crate::error::{ModelResult, ValidationError};

/// Tolerance for comparing percentage sums and token totals
pub const EPSILON: f64 = 1e-9;

/// Divide, returning 0 when the divisor is 0
pub fn div_or_zero(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

/// Percentage `pct` (0..=100) of `amount`
pub fn percent_of(pct: f64, amount: f64) -> f64 {
    (pct / 100.0) * amount
}

/// Clamp into [0, 1]
pub fn clamp_unit(x: f64) -> f64 {
    x.max(0.0).min(1.0)
}

/// Round to two decimals, ties away from zero.
///
/// `format!("{:.2}")` alone rounds exact binary ties to even (`1.125` gives
/// `1.12`); display amounts round ties up. Magnitudes past 1e15 have no
/// fractional cents to round and are returned as is.
pub fn round_cents(x: f64) -> f64 {
    if x.abs() < 1e15 {
        (x * 100.0).round() / 100.0
    } else {
        x
    }
}

/// Approximate equality at `EPSILON` relative to magnitude
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= EPSILON * scale
}

/// Reject NaN and infinities
pub fn ensure_finite(field: &'static str, value: f64) -> ModelResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field })
    }
}

/// Reject non-finite and negative amounts
pub fn ensure_non_negative(field: &'static str, value: f64) -> ModelResult<f64> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(value)
}
