//! The `is_valid` decision procedure and its assertion wrapper.

use fieldspec_model::{Result, Spec, SpecError, SpecKind, UnderlyingType, Value};

use crate::round::{Rounded, round_half_even};

/// A raw candidate value, before any coercion.
///
/// Typically text straight from an input source, but already-typed values
/// can be validated too (e.g. program-internal parameters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Raw<'a> {
    /// An explicit "no value" marker.
    Absent,
    Text(&'a str),
    Int(i64),
    Real(f64),
}

impl Raw<'_> {
    /// Recognized as absent: the explicit marker, or text that is empty
    /// once trimmed.
    fn is_blank(&self) -> bool {
        match self {
            Raw::Absent => true,
            Raw::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl<'a> From<&'a str> for Raw<'a> {
    fn from(value: &'a str) -> Self {
        Raw::Text(value)
    }
}

impl<'a> From<&'a String> for Raw<'a> {
    fn from(value: &'a String) -> Self {
        Raw::Text(value)
    }
}

impl From<i64> for Raw<'_> {
    fn from(value: i64) -> Self {
        Raw::Int(value)
    }
}

impl From<f64> for Raw<'_> {
    fn from(value: f64) -> Self {
        Raw::Real(value)
    }
}

/// Outcome of a validation call.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The normalized value; `None` means the value was deliberately left
    /// blank and the spec allows that.
    Accepted(Option<Value>),
    /// The candidate as far as it coerced. Diagnostics only; callers must
    /// not rely on its shape.
    Rejected(String),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// The normalized value, if accepted.
    pub fn ok(self) -> Option<Option<Value>> {
        match self {
            Verdict::Accepted(value) => Some(value),
            Verdict::Rejected(_) => None,
        }
    }
}

/// Decide whether `raw` conforms to `spec` and normalize it.
///
/// The absence check runs before any coercion: a blank value with a
/// blank-allowing spec is accepted as `None` without ever reaching the
/// numeric parser. Numeric candidates coerce through a real number first,
/// then round, then coerce to the exact underlying type, then round once
/// more; the final rounding is what makes a zero-digit real spec report an
/// integral value. Acceptance is then allow-list membership when the spec
/// has a list, else the range check, else unconditional.
pub fn is_valid<'a>(raw: impl Into<Raw<'a>>, spec: &Spec) -> Verdict {
    let raw = raw.into();
    if spec.allows_absent() && raw.is_blank() {
        return Verdict::Accepted(None);
    }
    if spec.underlying_type().is_numeric() {
        validate_numeric(raw, spec)
    } else {
        validate_string(raw, spec)
    }
}

/// Validate a program-internal parameter, failing hard on rejection.
///
/// The error message is the spec's message, prefixed with the trimmed,
/// lower-cased `name` when one is given.
pub fn assert_valid<'a>(
    raw: impl Into<Raw<'a>>,
    spec: &Spec,
    name: Option<&str>,
) -> Result<Option<Value>> {
    match is_valid(raw, spec) {
        Verdict::Accepted(value) => Ok(value),
        Verdict::Rejected(_) => Err(match name {
            Some(name) => SpecError::InvalidParam {
                name: name.trim().to_lowercase(),
                message: spec.message().to_string(),
            },
            None => SpecError::Invalid(spec.message().to_string()),
        }),
    }
}

fn validate_numeric(raw: Raw<'_>, spec: &Spec) -> Verdict {
    // Pre-coerce through a real number even for integer specs: "3.0" must
    // parse before it can legitimately become the integer 3.
    let real = match raw {
        Raw::Int(i) => i as f64,
        Raw::Real(x) => x,
        Raw::Text(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<f64>() {
                Ok(x) => x,
                Err(_) => return Verdict::Rejected(trimmed.to_string()),
            }
        }
        Raw::Absent => return Verdict::Rejected(String::new()),
    };
    // Round before the integer coercion so a value meant to land on a
    // whole number survives it.
    let rounded = match spec.round_digits() {
        Some(digits) => round_half_even(real, digits),
        None => Rounded::Real(real),
    };
    let value = match spec.underlying_type() {
        UnderlyingType::Int => match rounded.to_int() {
            Some(i) => Value::Int(i),
            None => return Verdict::Rejected(rounded.to_string()),
        },
        _ => match spec.round_digits() {
            // Second application; a no-op except that zero digits turns
            // the real-spec result integral.
            Some(digits) => round_half_even(rounded.as_f64(), digits).into_value(),
            None => Value::Real(rounded.as_f64()),
        },
    };
    check_numeric(value, spec)
}

fn check_numeric(value: Value, spec: &Spec) -> Verdict {
    match spec.kind() {
        SpecKind::NumList { allowed } => {
            if allowed.iter().any(|number| number.matches(&value)) {
                Verdict::Accepted(Some(value))
            } else {
                Verdict::Rejected(value.to_string())
            }
        }
        SpecKind::NumRange { min, max } => {
            let x = value.as_f64().unwrap_or(f64::NAN);
            let above_min = min.is_none_or(|bound| bound.as_f64() <= x);
            let below_max = max.is_none_or(|bound| x <= bound.as_f64());
            if above_min && below_max {
                Verdict::Accepted(Some(value))
            } else {
                Verdict::Rejected(value.to_string())
            }
        }
        _ => Verdict::Accepted(Some(value)),
    }
}

fn validate_string(raw: Raw<'_>, spec: &Spec) -> Verdict {
    let text = match raw {
        Raw::Text(s) => s.trim().to_string(),
        Raw::Int(i) => i.to_string(),
        Raw::Real(x) => x.to_string(),
        Raw::Absent => return Verdict::Rejected(String::new()),
    };
    match spec.kind() {
        SpecKind::Str { allowed, to_lower } => {
            let text = if *to_lower { text.to_lowercase() } else { text };
            match allowed {
                Some(list) if !list.iter().any(|item| item == &text) => Verdict::Rejected(text),
                _ => Verdict::Accepted(Some(Value::Str(text))),
            }
        }
        // Generic string spec: any text is fine once trimmed.
        _ => Verdict::Accepted(Some(Value::Str(text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldspec_model::presets;

    #[test]
    fn absence_wins_over_every_other_check() {
        let spec = Spec::integer_range(Some(1), Some(31)).or_blank();
        assert_eq!(is_valid("", &spec), Verdict::Accepted(None));
        assert_eq!(is_valid("   ", &spec), Verdict::Accepted(None));
        assert_eq!(is_valid(Raw::Absent, &spec), Verdict::Accepted(None));
    }

    #[test]
    fn blank_without_allowance_is_rejected() {
        let spec = Spec::integer_range(Some(1), Some(31));
        assert!(!is_valid("", &spec).is_accepted());
        assert!(!is_valid(Raw::Absent, &spec).is_accepted());
    }

    #[test]
    fn whole_reals_coerce_to_integers() {
        let spec = Spec::integer();
        assert_eq!(is_valid("3.0", &spec), Verdict::Accepted(Some(Value::Int(3))));
        assert_eq!(is_valid(" 15 ", &spec), Verdict::Accepted(Some(Value::Int(15))));
    }

    #[test]
    fn fractional_reals_reject_without_rounding_but_round_in() {
        // Preserved asymmetry: "3.7" cannot losslessly become an integer,
        // but with zero-digit rounding it is meant to land on 4.
        let plain = Spec::integer();
        assert_eq!(is_valid("3.7", &plain), Verdict::Rejected("3.7".to_string()));
        let rounding = Spec::integer().rounded(0);
        assert_eq!(
            is_valid("3.7", &rounding),
            Verdict::Accepted(Some(Value::Int(4)))
        );
    }

    #[test]
    fn typed_raw_values_validate_too() {
        assert_eq!(
            is_valid(24, &presets::HOUR_CLOCK),
            Verdict::Accepted(Some(Value::Int(24)))
        );
        assert!(!is_valid(18, &presets::HOUR_CLOCK).is_accepted());
        assert_eq!(
            is_valid(12.0, &Spec::integer()),
            Verdict::Accepted(Some(Value::Int(12)))
        );
    }

    #[test]
    fn nan_never_satisfies_a_range() {
        let spec = Spec::real_range(Some(0.0), Some(59.0));
        assert!(!is_valid("nan", &spec).is_accepted());
        let spec = Spec::integer().rounded(0);
        assert!(!is_valid("nan", &spec).is_accepted());
    }

    #[test]
    fn assert_valid_prefixes_the_parameter_name() {
        let spec = Spec::string_one_of(["exact", "uk", "us", "long"], true);
        let value = assert_valid("long", &spec, None).expect("valid form");
        assert_eq!(value, Some(Value::Str("long".to_string())));

        let error = assert_valid("bogus", &spec, Some(" Form ")).unwrap_err();
        assert!(error.to_string().starts_with("form: "));
        assert!(error.to_string().contains("'exact', 'uk', 'us', 'long'"));
    }
}
