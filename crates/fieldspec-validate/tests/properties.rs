//! Algebraic properties of the engine and the rounding utility.

use fieldspec_model::{Spec, Value};
use fieldspec_validate::{Rounded, is_valid, round_half_even};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// `round(round(x, n), n) == round(x, n)` for every digit count.
    #[test]
    fn rounding_is_idempotent(x in -1.0e6f64..1.0e6, digits in -6i32..=6) {
        let once = round_half_even(x, digits);
        let twice = match once {
            Rounded::Int(i) => round_half_even(i as f64, digits),
            Rounded::Real(r) => round_half_even(r, digits),
        };
        prop_assert_eq!(once, twice);
    }

    /// Zero digits yields an integral kind; any other count keeps the real kind.
    #[test]
    fn rounding_kind_follows_digit_count(x in -1.0e6f64..1.0e6, digits in -6i32..=6) {
        match round_half_even(x, digits) {
            Rounded::Int(_) => prop_assert_eq!(digits, 0),
            Rounded::Real(_) => prop_assert!(digits != 0),
        }
    }

    /// An integer-range spec accepts exactly the integers inside its bounds.
    #[test]
    fn range_acceptance_is_membership(lo in -1000i64..1000, span in 0i64..1000, x in -3000i64..3000) {
        let hi = lo + span;
        let spec = Spec::integer_range(Some(lo), Some(hi));
        let verdict = is_valid(x.to_string().as_str(), &spec);
        if lo <= x && x <= hi {
            prop_assert_eq!(verdict.ok(), Some(Some(Value::Int(x))));
        } else {
            prop_assert!(!verdict.is_accepted());
        }
    }

    /// Numeric-list acceptance is exactly membership of the normalized value.
    #[test]
    fn list_acceptance_is_membership(allowed in proptest::collection::vec(-100i64..100, 1..8), x in -150i64..150) {
        let spec = Spec::integer_one_of(allowed.clone());
        let verdict = is_valid(x.to_string().as_str(), &spec);
        prop_assert_eq!(verdict.is_accepted(), allowed.contains(&x));
    }

    /// A blank-allowing spec accepts whitespace-only input as absent, no
    /// matter what its other constraints are.
    #[test]
    fn absence_always_wins(pad in any::<u8>()) {
        let blank = " ".repeat(usize::from(pad % 5));
        let spec = Spec::integer_range(Some(1), Some(1)).or_blank();
        prop_assert_eq!(is_valid(blank.as_str(), &spec).ok(), Some(None));
    }
}
