//! Subcommand implementations.

use anyhow::{Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use fieldspec_model::{Spec, Value, presets};
use fieldspec_prompt::{
    DateOptions, DateTimeOptions, StdConsole, TimeOptions, date, datetime, time, true_false,
    validate_input,
};
use fieldspec_validate::{Verdict, is_valid};
use serde::Serialize;
use tracing::info;

use crate::cli::{
    AskArgs, BoolArgs, CheckArgs, DateArgs, DatetimeArgs, ListFormatArg, PresetsArgs, SpecArgs,
    TimeArgs, ValueTypeArg,
};

pub fn run_ask(args: &AskArgs) -> Result<i32> {
    let spec = build_spec(&args.spec)?;
    info!(spec = %spec, "prompting");
    let mut console = StdConsole::new();
    let value = validate_input(&mut console, &spec, args.prompt.as_deref())?;
    print_value(value.as_ref());
    Ok(0)
}

pub fn run_check(args: &CheckArgs) -> Result<i32> {
    let spec = build_spec(&args.spec)?;
    match is_valid(args.value.as_str(), &spec) {
        Verdict::Accepted(value) => {
            print_value(value.as_ref());
            Ok(0)
        }
        Verdict::Rejected(_) => {
            eprintln!("{}", spec.message());
            Ok(1)
        }
    }
}

pub fn run_bool(args: &BoolArgs) -> Result<i32> {
    let mut console = StdConsole::new();
    let answer = true_false(&mut console, args.prompt.as_deref(), args.blank_ok)?;
    match answer {
        Some(answer) => println!("{answer}"),
        None => println!("n/a"),
    }
    Ok(0)
}

pub fn run_date(args: &DateArgs) -> Result<i32> {
    let options = DateOptions {
        enforce: !args.no_enforce,
        form: args.form.clone(),
        fill_zeros: !args.no_fill_zeros,
    };
    let mut console = StdConsole::new();
    let text = date(&mut console, args.prompt.as_deref(), &options)?;
    println!("{text}");
    Ok(0)
}

pub fn run_time(args: &TimeArgs) -> Result<i32> {
    let options = TimeOptions {
        output_hour_clock: args.output_clock,
        milliseconds: args.millis,
        fill_zeros: !args.no_fill_zeros,
        or_blank: args.blank_ok,
    };
    let mut console = StdConsole::new();
    let text = time(&mut console, args.prompt.as_deref(), &options)?;
    println!("{text}");
    Ok(0)
}

pub fn run_datetime(args: &DatetimeArgs) -> Result<i32> {
    let options = DateTimeOptions {
        enforce: !args.no_enforce,
        form: args.form.clone(),
        milliseconds: args.millis,
        fill_zeros: !args.no_fill_zeros,
    };
    let mut console = StdConsole::new();
    let text = datetime(&mut console, args.prompt.as_deref(), &options)?;
    println!("{text}");
    Ok(0)
}

#[derive(Serialize)]
struct PresetRow {
    name: &'static str,
    value_type: &'static str,
    message: String,
}

pub fn run_presets(args: &PresetsArgs) -> Result<i32> {
    let rows: Vec<PresetRow> = presets::all()
        .into_iter()
        .map(|(name, spec)| PresetRow {
            name,
            value_type: spec.underlying_type().as_str(),
            message: spec.message().to_string(),
        })
        .collect();
    match args.format {
        ListFormatArg::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        ListFormatArg::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL_CONDENSED)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![
                header_cell("Name"),
                header_cell("Type"),
                header_cell("Message"),
            ]);
            for row in rows {
                table.add_row(vec![
                    Cell::new(row.name),
                    Cell::new(row.value_type),
                    Cell::new(row.message),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(0)
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn print_value(value: Option<&Value>) {
    match value {
        Some(value) => println!("{value}"),
        None => println!("n/a"),
    }
}

/// Translate the spec flags into a [`Spec`], rejecting contradictory
/// combinations up front.
fn build_spec(args: &SpecArgs) -> Result<Spec> {
    if let (Some(min), Some(max)) = (args.min, args.max)
        && min > max
    {
        bail!("--min must not exceed --max");
    }
    let mut spec = match args.value_type {
        ValueTypeArg::String => {
            if args.min.is_some() || args.max.is_some() {
                bail!("--min and --max apply to numeric types only");
            }
            if args.round.is_some() {
                bail!("--round applies to numeric types only");
            }
            match &args.one_of {
                Some(allowed) => {
                    Spec::string_one_of(allowed.iter().map(String::as_str), !args.keep_case)
                }
                None => Spec::string(!args.keep_case),
            }
        }
        ValueTypeArg::Integer => match &args.one_of {
            Some(allowed) => {
                let allowed: Vec<i64> = allowed
                    .iter()
                    .map(|text| {
                        text.trim()
                            .parse()
                            .map_err(|_| anyhow::anyhow!("--one-of entry {text:?} is not an integer"))
                    })
                    .collect::<Result<_>>()?;
                Spec::integer_one_of(allowed)
            }
            None if args.min.is_some() || args.max.is_some() => {
                let min = args.min.map(require_integral).transpose()?;
                let max = args.max.map(require_integral).transpose()?;
                Spec::integer_range(min, max)
            }
            None => Spec::integer(),
        },
        ValueTypeArg::Number => match &args.one_of {
            Some(allowed) => {
                let allowed: Vec<f64> = allowed
                    .iter()
                    .map(|text| {
                        text.trim()
                            .parse()
                            .map_err(|_| anyhow::anyhow!("--one-of entry {text:?} is not a number"))
                    })
                    .collect::<Result<_>>()?;
                Spec::real_one_of(allowed)
            }
            None if args.min.is_some() || args.max.is_some() => {
                Spec::real_range(args.min, args.max)
            }
            None => Spec::real(),
        },
    };
    if let Some(digits) = args.round {
        spec = spec.rounded(digits);
    }
    if args.blank_ok {
        spec = spec.or_blank();
    }
    Ok(spec)
}

fn require_integral(bound: f64) -> Result<i64> {
    if bound.is_finite() && bound.fract() == 0.0 {
        Ok(bound as i64)
    } else {
        bail!("integer bounds must be whole numbers, got {bound}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_args() -> SpecArgs {
        SpecArgs {
            value_type: ValueTypeArg::String,
            min: None,
            max: None,
            one_of: None,
            round: None,
            blank_ok: false,
            keep_case: false,
        }
    }

    #[test]
    fn default_flags_build_a_lowercasing_string_spec() {
        let spec = build_spec(&spec_args()).expect("valid flags");
        assert_eq!(spec.message(), "Must be type string");
        assert!(is_valid("  Anything  ", &spec).is_accepted());
    }

    #[test]
    fn integer_bounds_must_be_whole() {
        let args = SpecArgs {
            value_type: ValueTypeArg::Integer,
            min: Some(1.5),
            ..spec_args()
        };
        assert!(build_spec(&args).is_err());
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        let args = SpecArgs {
            value_type: ValueTypeArg::Number,
            min: Some(10.0),
            max: Some(1.0),
            ..spec_args()
        };
        assert!(build_spec(&args).is_err());
    }

    #[test]
    fn rounding_a_string_spec_is_rejected() {
        let args = SpecArgs {
            round: Some(2),
            ..spec_args()
        };
        assert!(build_spec(&args).is_err());
    }

    #[test]
    fn numeric_allow_list_parses_entries() {
        let args = SpecArgs {
            value_type: ValueTypeArg::Integer,
            one_of: Some(vec!["12".to_string(), "24".to_string()]),
            ..spec_args()
        };
        let spec = build_spec(&args).expect("valid flags");
        assert_eq!(
            spec.message(),
            "Must be an integer that is one of the following: '12', '24'"
        );
    }

    #[test]
    fn blank_and_round_compose() {
        let args = SpecArgs {
            value_type: ValueTypeArg::Number,
            min: Some(0.0),
            max: Some(59.999999),
            round: Some(6),
            blank_ok: true,
            ..spec_args()
        };
        let spec = build_spec(&args).expect("valid flags");
        assert!(is_valid("", &spec).is_accepted());
        assert!(is_valid("59.9999994", &spec).is_accepted());
        assert!(!is_valid("60", &spec).is_accepted());
    }
}
