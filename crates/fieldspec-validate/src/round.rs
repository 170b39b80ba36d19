//! Decimal rounding with an integral result at zero digits.

use std::fmt;

use fieldspec_model::Value;

/// Result of [`round_half_even`].
///
/// Rounding to zero digits is semantically "produce a whole number", so it
/// yields an [`Rounded::Int`]; any other digit count keeps the real kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rounded {
    Int(i64),
    Real(f64),
}

impl Rounded {
    pub fn as_f64(&self) -> f64 {
        match self {
            Rounded::Int(i) => *i as f64,
            Rounded::Real(x) => *x,
        }
    }

    /// Lossless integer view: whole-valued reals convert, anything with a
    /// fractional part (or outside the `i64` range) does not.
    pub fn to_int(self) -> Option<i64> {
        match self {
            Rounded::Int(i) => Some(i),
            Rounded::Real(x) => to_i64_exact(x),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Rounded::Int(i) => Value::Int(i),
            Rounded::Real(x) => Value::Real(x),
        }
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounded::Int(i) => write!(f, "{i}"),
            Rounded::Real(x) => write!(f, "{x}"),
        }
    }
}

/// Round `x` to `digits` decimal places, ties to even.
///
/// Negative digit counts round to a power of ten. Zero digits returns an
/// integral result; a non-finite `x` cannot become integral and is passed
/// through unchanged for the caller's type coercion to reject.
/// Idempotent: re-rounding a result at the same digit count is a no-op.
pub fn round_half_even(x: f64, digits: i32) -> Rounded {
    if digits == 0 {
        match to_i64_exact(x.round_ties_even()) {
            Some(i) => Rounded::Int(i),
            None => Rounded::Real(x),
        }
    } else {
        let scale = 10f64.powi(digits);
        Rounded::Real((x * scale).round_ties_even() / scale)
    }
}

fn to_i64_exact(x: f64) -> Option<i64> {
    if x.is_finite() && x.fract() == 0.0 && x >= i64::MIN as f64 && x <= i64::MAX as f64 {
        Some(x as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_digits_yields_an_integer() {
        assert_eq!(round_half_even(3.6, 0), Rounded::Int(4));
        assert_eq!(round_half_even(-3.6, 0), Rounded::Int(-4));
        assert_eq!(round_half_even(3.0, 0), Rounded::Int(3));
    }

    #[test]
    fn nonzero_digits_keep_the_real_kind() {
        assert_eq!(round_half_even(3.14159, 2), Rounded::Real(3.14));
        assert_eq!(round_half_even(4.0, 2), Rounded::Real(4.0));
    }

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round_half_even(0.5, 0), Rounded::Int(0));
        assert_eq!(round_half_even(1.5, 0), Rounded::Int(2));
        assert_eq!(round_half_even(2.5, 0), Rounded::Int(2));
        assert_eq!(round_half_even(0.125, 2), Rounded::Real(0.12));
    }

    #[test]
    fn negative_digits_round_to_powers_of_ten() {
        assert_eq!(round_half_even(1234.0, -2), Rounded::Real(1200.0));
        assert_eq!(round_half_even(1250.0, -2), Rounded::Real(1200.0));
        assert_eq!(round_half_even(1350.0, -2), Rounded::Real(1400.0));
    }

    #[test]
    fn non_finite_values_stay_real_at_zero_digits() {
        assert!(matches!(
            round_half_even(f64::NAN, 0),
            Rounded::Real(x) if x.is_nan()
        ));
        assert_eq!(
            round_half_even(f64::INFINITY, 0),
            Rounded::Real(f64::INFINITY)
        );
    }

    #[test]
    fn whole_reals_convert_to_int_exactly() {
        assert_eq!(Rounded::Real(3.0).to_int(), Some(3));
        assert_eq!(Rounded::Real(3.7).to_int(), None);
        assert_eq!(Rounded::Real(f64::NAN).to_int(), None);
    }
}
