//! Specification model for fieldspec.
//!
//! A [`Spec`] is an immutable description of an acceptable value shape:
//! the type a raw value must coerce to, optional rounding, an optional
//! allow-list or inclusive range, and whether a blank value is accepted.
//! The rejection message is derived once at construction time and never
//! recomputed per validation call.

pub mod error;
pub mod presets;
pub mod spec;
pub mod value;

pub use error::{Result, SpecError};
pub use spec::{Spec, SpecKind};
pub use value::{Number, UnderlyingType, Value};
