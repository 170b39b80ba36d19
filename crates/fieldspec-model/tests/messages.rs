//! Rejection-message rendering.
//!
//! Messages are derived once at construction time, so these snapshots also
//! pin down the determinism contract: identical parameters, identical text.

use fieldspec_model::{Spec, UnderlyingType};

#[test]
fn integer_range_message() {
    let spec = Spec::integer_range(Some(1), Some(31));
    insta::assert_snapshot!(spec.message(), @"Must be an integer, minimum 1, maximum 31");
}

#[test]
fn open_ended_range_messages() {
    insta::assert_snapshot!(
        Spec::integer_range(Some(0), None).message(),
        @"Must be an integer, minimum 0"
    );
    insta::assert_snapshot!(
        Spec::real_range(None, Some(59.999999)).message(),
        @"Must be a number, maximum 59.999999"
    );
}

#[test]
fn folded_string_list_message() {
    let spec = Spec::string_one_of(["am", "pm"], true);
    insta::assert_snapshot!(
        spec.message(),
        @"Must be type string and once converted to lower case, must be one of the following: 'am', 'pm'"
    );
}

#[test]
fn case_preserving_string_list_message() {
    let spec = Spec::string_one_of(["AM", "PM"], false);
    insta::assert_snapshot!(
        spec.message(),
        @"Must be type string and must be one of the following: 'AM', 'PM'"
    );
}

#[test]
fn numeric_list_message() {
    let spec = Spec::integer_one_of([12, 24]);
    insta::assert_snapshot!(
        spec.message(),
        @"Must be an integer that is one of the following: '12', '24'"
    );
}

#[test]
fn rounding_prefix_and_blank_suffix() {
    let spec = Spec::integer_range(Some(0), Some(59)).rounded(0);
    insta::assert_snapshot!(
        spec.message(),
        @"Once rounded to 0 decimal places, must be an integer, minimum 0, maximum 59"
    );

    let spec = Spec::real_range(Some(0.0), Some(59.999999)).rounded(6).or_blank();
    insta::assert_snapshot!(
        spec.message(),
        @"Once rounded to 6 decimal places, must be a number or leave blank, minimum 0, maximum 59.999999"
    );
}

#[test]
fn blank_suffix_precedes_string_clause() {
    let spec = Spec::string_one_of(["t", "f"], true).or_blank();
    insta::assert_snapshot!(
        spec.message(),
        @"Must be type string or leave blank and once converted to lower case, must be one of the following: 't', 'f'"
    );
}

#[test]
fn generic_messages_name_the_type() {
    insta::assert_snapshot!(Spec::generic(UnderlyingType::Str).message(), @"Must be type string");
    insta::assert_snapshot!(Spec::generic(UnderlyingType::Int).message(), @"Must be type integer");
    insta::assert_snapshot!(Spec::generic(UnderlyingType::Real).message(), @"Must be type number");
    insta::assert_snapshot!(Spec::integer().message(), @"Must be an integer");
    insta::assert_snapshot!(Spec::real().message(), @"Must be a number");
}
