//! Normalized values and the types they coerce to.

use serde::Serialize;
use std::fmt;

/// Canonical type a validated value must coerce to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnderlyingType {
    Str,
    Int,
    Real,
}

impl UnderlyingType {
    /// Human-readable name as it appears in rejection messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnderlyingType::Str => "string",
            UnderlyingType::Int => "integer",
            UnderlyingType::Real => "number",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, UnderlyingType::Int | UnderlyingType::Real)
    }
}

impl fmt::Display for UnderlyingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized value produced by a successful validation.
///
/// Deliberate absence is expressed as `Option<Value>` = `None` at the API
/// boundary, never as a variant of this enum.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    Real(f64),
}

impl Value {
    pub fn into_str(self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_int(self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Real(x) => Some(*x),
            Value::Str(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Real(x) => write!(f, "{x}"),
        }
    }
}

/// A typed numeric bound or allow-list entry.
///
/// Keeps integers and reals apart so messages print `1`, not `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Real(x) => *x,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Number::Real(x) if x.is_nan())
    }

    /// Whether a normalized value is exactly this number.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Number::Int(a), Value::Int(b)) => a == b,
            _ => value.as_f64() == Some(self.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Real(x) => write!(f, "{x}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_display_keeps_integers_whole() {
        assert_eq!(Number::Int(31).to_string(), "31");
        assert_eq!(Number::Real(59.999999).to_string(), "59.999999");
    }

    #[test]
    fn number_matches_across_kinds() {
        assert!(Number::Int(24).matches(&Value::Int(24)));
        assert!(Number::Real(24.0).matches(&Value::Real(24.0)));
        assert!(!Number::Int(24).matches(&Value::Int(18)));
        assert!(!Number::Int(24).matches(&Value::Str("24".to_string())));
    }

    #[test]
    fn value_serializes_untagged() {
        let json = serde_json::to_string(&Value::Int(15)).expect("serialize value");
        assert_eq!(json, "15");
        let json = serde_json::to_string(&Value::Str("yes".to_string())).expect("serialize value");
        assert_eq!(json, "\"yes\"");
    }
}
