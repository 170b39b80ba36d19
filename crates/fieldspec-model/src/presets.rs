//! Prebuilt specs for common shapes.
//!
//! Specs are immutable, so these are process-wide constants built once on
//! first use and shared read-only ever after.

use std::sync::LazyLock;

use crate::spec::Spec;

/// Lower-case month names, in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Day of month, before the month is known.
pub static DAY: LazyLock<Spec> = LazyLock::new(|| Spec::integer_range(Some(1), Some(31)));

/// Month as a number.
pub static MONTH_NUMBER: LazyLock<Spec> = LazyLock::new(|| Spec::integer_range(Some(1), Some(12)));

/// Month by short name or number.
pub static MONTH: LazyLock<Spec> = LazyLock::new(|| {
    let mut allowed: Vec<String> = MONTH_NAMES.iter().map(|name| (*name).to_string()).collect();
    allowed.extend((1..=12).map(|n| n.to_string()));
    Spec::string_one_of(allowed, true)
});

/// Any year, positive or negative.
pub static YEAR: LazyLock<Spec> = LazyLock::new(|| Spec::integer_range(None, None));

/// Hour on a 12-hour clock.
pub static HOUR_12: LazyLock<Spec> = LazyLock::new(|| Spec::integer_range(Some(1), Some(12)));

/// Hour on a 24-hour clock.
pub static HOUR_24: LazyLock<Spec> = LazyLock::new(|| Spec::integer_range(Some(0), Some(23)));

pub static MINUTE: LazyLock<Spec> = LazyLock::new(|| Spec::integer_range(Some(0), Some(59)));

/// Seconds rounded to the nearest whole second.
pub static WHOLE_SECOND: LazyLock<Spec> =
    LazyLock::new(|| Spec::integer_range(Some(0), Some(59)).rounded(0));

/// Seconds with microsecond precision.
pub static PRECISE_SECOND: LazyLock<Spec> =
    LazyLock::new(|| Spec::real_range(Some(0.0), Some(59.999999)).rounded(6));

/// 12- or 24-hour clock selector.
pub static HOUR_CLOCK: LazyLock<Spec> = LazyLock::new(|| Spec::integer_one_of([12, 24]));

/// AM/PM period, case-insensitive.
pub static AM_PM: LazyLock<Spec> = LazyLock::new(|| Spec::string_one_of(["am", "pm"], true));

/// Boolean-like words plus 0/1.
pub static BOOL_LIKE: LazyLock<Spec> = LazyLock::new(|| {
    Spec::string_one_of(
        ["t", "true", "f", "false", "y", "yes", "n", "no", "0", "1"],
        true,
    )
});

/// Every preset with its name, for listings.
pub fn all() -> Vec<(&'static str, &'static Spec)> {
    vec![
        ("day", &DAY),
        ("month", &MONTH),
        ("month-number", &MONTH_NUMBER),
        ("year", &YEAR),
        ("hour-12", &HOUR_12),
        ("hour-24", &HOUR_24),
        ("minute", &MINUTE),
        ("whole-second", &WHOLE_SECOND),
        ("precise-second", &PRECISE_SECOND),
        ("hour-clock", &HOUR_CLOCK),
        ("am-pm", &AM_PM),
        ("bool-like", &BOOL_LIKE),
    ]
}
