//! The specification type and its constructors.

use std::fmt;

use crate::value::{Number, UnderlyingType};

/// Variant-specific rules, dispatched by tag rather than downcasting.
///
/// A spec is either list-based or range-based, never both; the allow-list
/// precedence rule in the engine is a single match on this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecKind {
    /// Type check only.
    Generic,
    /// String, optionally restricted to an allow-list. When `to_lower` is
    /// set both the stored list (folded at construction) and the candidate
    /// are compared lower-cased, and the normalized output is lower-cased.
    Str {
        allowed: Option<Vec<String>>,
        to_lower: bool,
    },
    /// Any number of the required kind.
    Num,
    /// Inclusive range; either bound may be absent.
    NumRange {
        min: Option<Number>,
        max: Option<Number>,
    },
    /// Non-empty numeric allow-list.
    NumList { allowed: Vec<Number> },
}

/// Immutable description of an acceptable value shape.
///
/// Built once, reused across arbitrarily many validation calls; carries no
/// per-call state. The rejection `message` is derived from the other
/// fields at construction time, so equal specs always render identical
/// messages.
#[derive(Debug, Clone, PartialEq)]
pub struct Spec {
    ty: UnderlyingType,
    kind: SpecKind,
    allow_absent: bool,
    round_digits: Option<i32>,
    message: String,
}

impl Spec {
    fn build(ty: UnderlyingType, kind: SpecKind) -> Self {
        let mut spec = Spec {
            ty,
            kind,
            allow_absent: false,
            round_digits: None,
            message: String::new(),
        };
        spec.message = spec.render_message();
        spec
    }

    /// Accept any value that coerces to `ty`.
    pub fn generic(ty: UnderlyingType) -> Self {
        Spec::build(ty, SpecKind::Generic)
    }

    /// Accept any string, optionally folded to lower case.
    pub fn string(to_lower: bool) -> Self {
        Spec::build(
            UnderlyingType::Str,
            SpecKind::Str {
                allowed: None,
                to_lower,
            },
        )
    }

    /// Accept only the listed strings.
    ///
    /// # Panics
    ///
    /// Panics if the allow-list is empty.
    pub fn string_one_of<I, S>(allowed: I, to_lower: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed
            .into_iter()
            .map(|item| {
                let item = item.into();
                if to_lower { item.to_lowercase() } else { item }
            })
            .collect();
        assert!(!allowed.is_empty(), "string allow-list must not be empty");
        Spec::build(
            UnderlyingType::Str,
            SpecKind::Str {
                allowed: Some(allowed),
                to_lower,
            },
        )
    }

    /// Accept any integer.
    pub fn integer() -> Self {
        Spec::build(UnderlyingType::Int, SpecKind::Num)
    }

    /// Accept any real number.
    pub fn real() -> Self {
        Spec::build(UnderlyingType::Real, SpecKind::Num)
    }

    /// Accept an integer in an inclusive range; either bound may be open.
    pub fn integer_range(min: Option<i64>, max: Option<i64>) -> Self {
        Spec::build(
            UnderlyingType::Int,
            SpecKind::NumRange {
                min: min.map(Number::Int),
                max: max.map(Number::Int),
            },
        )
    }

    /// Accept a real number in an inclusive range; either bound may be open.
    ///
    /// # Panics
    ///
    /// Panics if a bound is NaN.
    pub fn real_range(min: Option<f64>, max: Option<f64>) -> Self {
        let min = min.map(Number::Real);
        let max = max.map(Number::Real);
        assert!(
            !min.is_some_and(|bound| bound.is_nan()) && !max.is_some_and(|bound| bound.is_nan()),
            "range bound must not be NaN"
        );
        Spec::build(UnderlyingType::Real, SpecKind::NumRange { min, max })
    }

    /// Accept only the listed integers.
    ///
    /// # Panics
    ///
    /// Panics if the allow-list is empty.
    pub fn integer_one_of(allowed: impl IntoIterator<Item = i64>) -> Self {
        let allowed: Vec<Number> = allowed.into_iter().map(Number::Int).collect();
        assert!(!allowed.is_empty(), "numeric allow-list must not be empty");
        Spec::build(UnderlyingType::Int, SpecKind::NumList { allowed })
    }

    /// Accept only the listed real numbers.
    ///
    /// # Panics
    ///
    /// Panics if the allow-list is empty or contains NaN.
    pub fn real_one_of(allowed: impl IntoIterator<Item = f64>) -> Self {
        let allowed: Vec<Number> = allowed.into_iter().map(Number::Real).collect();
        assert!(!allowed.is_empty(), "numeric allow-list must not be empty");
        assert!(
            !allowed.iter().any(Number::is_nan),
            "numeric allow-list must not contain NaN"
        );
        Spec::build(UnderlyingType::Real, SpecKind::NumList { allowed })
    }

    /// Also accept a blank value, which normalizes to `None`.
    #[must_use]
    pub fn or_blank(mut self) -> Self {
        self.allow_absent = true;
        self.message = self.render_message();
        self
    }

    /// Round the coerced number to `digits` decimal places before any
    /// comparison. Zero digits makes the normalized value integral;
    /// negative digits round to a power of ten.
    ///
    /// # Panics
    ///
    /// Panics when applied to a non-numeric spec.
    #[must_use]
    pub fn rounded(mut self, digits: i32) -> Self {
        assert!(
            self.ty.is_numeric(),
            "rounding applies only to numeric specs"
        );
        self.round_digits = Some(digits);
        self.message = self.render_message();
        self
    }

    pub fn underlying_type(&self) -> UnderlyingType {
        self.ty
    }

    pub fn kind(&self) -> &SpecKind {
        &self.kind
    }

    pub fn allows_absent(&self) -> bool {
        self.allow_absent
    }

    pub fn round_digits(&self) -> Option<i32> {
        self.round_digits
    }

    /// The precomputed rejection message.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn render_message(&self) -> String {
        let mut message = match (&self.kind, self.ty) {
            (SpecKind::Generic, ty) => format!("Must be type {ty}"),
            (SpecKind::Str { .. }, _) => "Must be type string".to_string(),
            (_, UnderlyingType::Int) => "Must be an integer".to_string(),
            (_, _) => "Must be a number".to_string(),
        };
        if let Some(digits) = self.round_digits {
            message = format!("Once rounded to {digits} decimal places, m{}", &message[1..]);
        }
        if self.allow_absent {
            message.push_str(" or leave blank");
        }
        match &self.kind {
            SpecKind::Str {
                allowed: Some(allowed),
                to_lower,
            } => {
                if *to_lower {
                    message
                        .push_str(" and once converted to lower case, must be one of the following: ");
                } else {
                    message.push_str(" and must be one of the following: ");
                }
                message.push_str(&quoted_list(allowed));
            }
            SpecKind::NumRange { min, max } => {
                if let Some(min) = min {
                    message.push_str(&format!(", minimum {min}"));
                }
                if let Some(max) = max {
                    message.push_str(&format!(", maximum {max}"));
                }
            }
            SpecKind::NumList { allowed } => {
                message.push_str(" that is one of the following: ");
                message.push_str(&quoted_list(allowed));
            }
            _ => {}
        }
        message
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spec({})", self.message)
    }
}

fn quoted_list<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
