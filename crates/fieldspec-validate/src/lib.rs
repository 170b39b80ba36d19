//! Validation and coercion engine.
//!
//! [`is_valid`] is the single source of truth for acceptance and
//! normalization: it takes a raw candidate and a [`Spec`] and either
//! produces the normalized typed value or rejects. The engine is a pure
//! function of its arguments; it performs no I/O, so specs can be shared
//! read-only across any number of concurrent calls.
//!
//! [`Spec`]: fieldspec_model::Spec

mod engine;
mod round;

pub use engine::{Raw, Verdict, assert_valid, is_valid};
pub use round::{Rounded, round_half_even};
