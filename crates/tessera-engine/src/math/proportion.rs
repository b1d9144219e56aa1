use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Sub};

use super::finite::{clamp_percent, require_finite, require_non_zero};
use super::NumberError;

/// Percentage constrained to `0.0..=100.0`.
///
/// Invariants:
/// - `percent` is finite and within `[0, 100]`
/// - zero is always `+0.0`, so equality, ordering and hashing agree with the
///   bit pattern
///
/// Constructors that land exactly on a bound return [`Proportion::EMPTY`] or
/// [`Proportion::FULL`].
#[derive(Debug, Copy, Clone)]
pub struct Proportion {
    percent: f64,
}

impl Proportion {
    /// 0%.
    pub const EMPTY: Proportion = Proportion { percent: 0.0 };

    /// 100%.
    pub const FULL: Proportion = Proportion { percent: 100.0 };

    /// Builds a constant without validation. `percent` must already satisfy the
    /// type invariants.
    pub(crate) const fn from_percent_unchecked(percent: f64) -> Self {
        Self { percent }
    }

    /// Creates a proportion by clamping `value` into `0.0..=100.0`.
    ///
    /// Returns [`NumberError::InvalidNumber`] for NaN or infinite input.
    pub fn percent_clamping(value: f64) -> Result<Self, NumberError> {
        let value = require_finite(value, "percent")?;
        Ok(Self::from_finite(value))
    }

    /// Creates a proportion only if `value` is finite and within `0.0..=100.0`.
    ///
    /// No clamping: anything outside the range yields `None`.
    pub fn percent_or_none(value: f64) -> Option<Self> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return None;
        }
        Some(Self::canonical(value))
    }

    /// Clamp + canonicalize for an input already known to be finite.
    #[inline]
    pub(crate) fn from_finite(value: f64) -> Self {
        Self::canonical(clamp_percent(value))
    }

    #[inline]
    fn canonical(percent: f64) -> Self {
        if percent == 0.0 {
            Self::EMPTY
        } else if percent == 100.0 {
            Self::FULL
        } else {
            Self { percent }
        }
    }

    #[inline]
    pub const fn percent(self) -> f64 {
        self.percent
    }

    /// Percent as a fraction in `[0, 1]`.
    #[inline]
    pub fn rate(self) -> f64 {
        self.percent / 100.0
    }

    /// [`rate`](Self::rate) narrowed to `f32`.
    #[inline]
    pub fn ratef(self) -> f32 {
        self.rate() as f32
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.percent == 0.0
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self.percent == 100.0
    }

    /// Multiplies the rate by `scalar`.
    ///
    /// The result is a plain rate value and is not clamped.
    pub fn scale(self, scalar: f64) -> Result<f64, NumberError> {
        let scalar = require_finite(scalar, "scalar")?;
        Ok(self.rate() * scalar)
    }

    /// Multiplies `value` by the rate. Same as [`scale`](Self::scale) with the
    /// operands swapped; the error names the value instead of the scalar.
    pub fn scale_value(self, value: f64) -> Result<f64, NumberError> {
        let value = require_finite(value, "value")?;
        Ok(value * self.rate())
    }

    /// Divides the percent by `scalar`, clamping the result.
    ///
    /// A zero divisor is rejected with [`NumberError::DivisionByZero`].
    pub fn divide(self, scalar: f64) -> Result<Proportion, NumberError> {
        let scalar = require_non_zero(scalar, "scalar")?;
        Proportion::percent_clamping(self.percent / scalar)
    }

    /// Divides `value` by the rate.
    ///
    /// Dividing by [`Proportion::EMPTY`] is not an error: the result follows
    /// IEEE-754 and is infinite (or NaN for `0.0`).
    pub fn divide_value(self, value: f64) -> Result<f64, NumberError> {
        let value = require_finite(value, "value")?;
        Ok(value / self.rate())
    }

    /// Channel byte: `round(percent * 255 / 100)` clamped to `0..=255`.
    ///
    /// Ties round away from zero, so 50% maps to 128.
    #[inline]
    pub fn to_u8(self) -> u8 {
        let scaled = (self.percent.clamp(0.0, 100.0) * 255.0 / 100.0).round();
        scaled.clamp(0.0, 255.0) as u8
    }
}

impl Default for Proportion {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for Proportion {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.percent.to_bits() == other.percent.to_bits()
    }
}

impl Eq for Proportion {}

impl Hash for Proportion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.percent.to_bits().hash(state);
    }
}

impl Ord for Proportion {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.percent.total_cmp(&other.percent)
    }
}

impl PartialOrd for Proportion {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent)
    }
}

impl Add for Proportion {
    type Output = Proportion;
    #[inline]
    fn add(self, rhs: Proportion) -> Proportion {
        Proportion::from_finite(self.percent + rhs.percent)
    }
}

impl Sub for Proportion {
    type Output = Proportion;
    #[inline]
    fn sub(self, rhs: Proportion) -> Proportion {
        Proportion::from_finite(self.percent - rhs.percent)
    }
}

impl Mul<f64> for Proportion {
    type Output = Result<f64, NumberError>;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Proportion> for f64 {
    type Output = Result<f64, NumberError>;
    #[inline]
    fn mul(self, rhs: Proportion) -> Self::Output {
        rhs.scale_value(self)
    }
}

impl Div<f64> for Proportion {
    type Output = Result<Proportion, NumberError>;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

impl Div<Proportion> for f64 {
    type Output = Result<f64, NumberError>;
    #[inline]
    fn div(self, rhs: Proportion) -> Self::Output {
        rhs.divide_value(self)
    }
}

/// Percentage literals: `50_i32.percent()`, `12.5_f64.percent()?`.
///
/// Integers are always finite, so their conversion cannot fail. Floats go
/// through [`Proportion::percent_clamping`] and may.
pub trait Percent {
    type Output;

    fn percent(self) -> Self::Output;
}

macro_rules! impl_int_percent {
    ($($t:ty),*) => {$(
        impl Percent for $t {
            type Output = Proportion;
            #[inline]
            fn percent(self) -> Proportion {
                Proportion::from_finite(self as f64)
            }
        }
    )*};
}

impl_int_percent!(i32, i64, u8, u32);

impl Percent for f64 {
    type Output = Result<Proportion, NumberError>;
    #[inline]
    fn percent(self) -> Self::Output {
        Proportion::percent_clamping(self)
    }
}

impl Percent for f32 {
    type Output = Result<Proportion, NumberError>;
    #[inline]
    fn percent(self) -> Self::Output {
        Proportion::percent_clamping(self as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(v: f64) -> Proportion {
        Proportion::percent_clamping(v).unwrap()
    }

    fn same(a: Proportion, b: Proportion) -> bool {
        a.percent().to_bits() == b.percent().to_bits()
    }

    // ── constants ─────────────────────────────────────────────────────────

    #[test]
    fn constants_have_expected_percents() {
        assert_eq!(Proportion::EMPTY.percent(), 0.0);
        assert_eq!(Proportion::FULL.percent(), 100.0);
        assert!(same(p(0.0), Proportion::EMPTY));
        assert!(same(p(100.0), Proportion::FULL));
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Proportion::default(), Proportion::EMPTY);
    }

    // ── percent_clamping ──────────────────────────────────────────────────

    #[test]
    fn clamping_collapses_extremes_to_constants() {
        assert!(same(p(-1.0), Proportion::EMPTY));
        assert!(same(p(-0.0), Proportion::EMPTY));
        assert!(same(p(1e9), Proportion::FULL));
        assert!(same(p(f64::MAX), Proportion::FULL));
        assert!(same(p(f64::MIN), Proportion::EMPTY));
    }

    #[test]
    fn clamping_keeps_in_range_values() {
        assert_eq!(p(42.5).percent(), 42.5);
        assert_eq!(p(f64::MIN_POSITIVE).percent(), f64::MIN_POSITIVE);
    }

    #[test]
    fn clamping_rejects_non_finite() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Proportion::percent_clamping(v),
                Err(NumberError::InvalidNumber { what: "percent", .. })
            ));
        }
    }

    // ── percent_or_none ───────────────────────────────────────────────────

    #[test]
    fn or_none_rejects_out_of_range_and_non_finite() {
        for v in [-0.1, 100.1, -1e-12, 100.0 + 1e-12, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(Proportion::percent_or_none(v), None, "input {v}");
        }
    }

    #[test]
    fn or_none_returns_constants_at_bounds() {
        assert!(same(Proportion::percent_or_none(0.0).unwrap(), Proportion::EMPTY));
        assert!(same(Proportion::percent_or_none(-0.0).unwrap(), Proportion::EMPTY));
        assert!(same(Proportion::percent_or_none(100.0).unwrap(), Proportion::FULL));
        assert_eq!(Proportion::percent_or_none(42.0).map(Proportion::percent), Some(42.0));
    }

    // ── literals ──────────────────────────────────────────────────────────

    #[test]
    fn int_and_float_literals_clamp() {
        assert!(same((-10i32).percent(), Proportion::EMPTY));
        assert!(same(120.0f64.percent().unwrap(), Proportion::FULL));
        assert_eq!(50i32.percent().percent(), 50.0);
        assert_eq!(200u8.percent(), Proportion::FULL);
        assert_eq!(25.0f32.percent().unwrap().percent(), 25.0);
    }

    #[test]
    fn float_literals_reject_non_finite() {
        assert!(f64::NAN.percent().is_err());
        assert!(f64::INFINITY.percent().is_err());
        assert!(f32::NEG_INFINITY.percent().is_err());
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_and_sub_clamp_to_constants() {
        let thirty = 30i32.percent();
        let forty = 40i32.percent();
        assert_eq!((thirty + forty).percent(), 70.0);
        assert!(same(thirty + forty + forty, Proportion::FULL));
        assert!(same(thirty - forty, Proportion::EMPTY));
        assert!(same(forty - forty, Proportion::EMPTY));
    }

    #[test]
    fn scale_returns_unclamped_rate() {
        let half = 50i32.percent();
        assert_eq!((half * 2.0).unwrap(), 1.0);
        assert_eq!((half * 0.5).unwrap(), 0.25);
        assert_eq!((half * -2.0).unwrap(), -1.0);
        assert_eq!((half * 10_000.0).unwrap(), 5_000.0);
        assert!(((2.0 * half).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scale_rejects_non_finite_operands() {
        let half = 50i32.percent();
        assert!(matches!(half * f64::NAN, Err(NumberError::InvalidNumber { what: "scalar", .. })));
        assert!(matches!(f64::NAN * half, Err(NumberError::InvalidNumber { what: "value", .. })));
        assert!(matches!(f64::INFINITY * half, Err(NumberError::InvalidNumber { .. })));
    }

    #[test]
    fn divide_by_scalar_clamps() {
        let half = 50i32.percent();
        assert_eq!((half / 2.0).unwrap().percent(), 25.0);
        assert!(same((half / -2.0).unwrap(), Proportion::EMPTY));
        assert!(same((half / 0.25).unwrap(), Proportion::FULL));
    }

    #[test]
    fn divide_by_scalar_rejects_zero_and_non_finite() {
        let half = 50i32.percent();
        assert_eq!(half / 0.0, Err(NumberError::DivisionByZero { what: "scalar" }));
        assert_eq!(half / -0.0, Err(NumberError::DivisionByZero { what: "scalar" }));
        assert!(matches!(half / f64::NAN, Err(NumberError::InvalidNumber { .. })));
    }

    #[test]
    fn value_divided_by_proportion_uses_rate() {
        assert!(((10.0 / 50i32.percent()).unwrap() - 20.0).abs() < 1e-9);
        assert_eq!((10.0 / Proportion::FULL).unwrap(), 10.0);
    }

    #[test]
    fn value_divided_by_empty_is_infinite_not_error() {
        let r = (10.0 / Proportion::EMPTY).unwrap();
        assert!(r.is_infinite() && r.is_sign_positive());
        assert_eq!((-10.0 / Proportion::EMPTY).unwrap(), f64::NEG_INFINITY);
        assert!((0.0 / Proportion::EMPTY).unwrap().is_nan());
        assert!((f64::NAN / Proportion::EMPTY).is_err());
    }

    // ── rate / bytes ──────────────────────────────────────────────────────

    #[test]
    fn rate_and_ratef_reflect_percent() {
        let q = 75i32.percent();
        assert!((q.rate() - 0.75).abs() < 1e-9);
        assert!((q.ratef() - 0.75f32).abs() < 1e-6);
        assert_eq!(Proportion::EMPTY.rate(), 0.0);
        assert_eq!(Proportion::FULL.rate(), 1.0);
    }

    #[test]
    fn to_u8_rounds_half_up_at_documented_points() {
        assert_eq!(Proportion::EMPTY.to_u8(), 0);
        assert_eq!(50i32.percent().to_u8(), 128);
        assert_eq!(p(49.9).to_u8(), 127);
        assert_eq!(80i32.percent().to_u8(), 204);
        assert_eq!(Proportion::FULL.to_u8(), 255);
    }

    // ── traits ────────────────────────────────────────────────────────────

    #[test]
    fn ordering_and_hashing_follow_value() {
        use std::collections::HashSet;

        assert!(30i32.percent() < 40i32.percent());
        assert_eq!(Proportion::EMPTY.max(Proportion::FULL), Proportion::FULL);

        let set: HashSet<Proportion> =
            [p(-3.0), Proportion::EMPTY, 0i32.percent(), 12i32.percent()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_appends_percent_sign() {
        assert_eq!(12.5f64.percent().unwrap().to_string(), "12.5%");
        assert_eq!(Proportion::FULL.to_string(), "100%");
    }
}
