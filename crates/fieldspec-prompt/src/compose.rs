//! Composite prompts assembled from the core primitives.
//!
//! These are plain call sequences over `validate_input` and
//! `assert_valid`; they contain no validation logic of their own.

use std::sync::LazyLock;

use fieldspec_model::{Result, Spec, Value, presets};
use fieldspec_validate::assert_valid;

use crate::console::Console;
use crate::input::validate_input;

static DATE_FORM: LazyLock<Spec> =
    LazyLock::new(|| Spec::string_one_of(["exact", "uk", "us", "long"], true));
static DATETIME_FORM: LazyLock<Spec> =
    LazyLock::new(|| Spec::string_one_of(["exact", "long"], true));

#[derive(Debug, Clone)]
pub struct DateOptions {
    /// Require every part; when false, parts may be left blank and render
    /// as `?`.
    pub enforce: bool,
    /// Output form: "exact" (Y-M-D), "uk" (D/M/Y), "us" (M/D/Y) or "long"
    /// (ordinal day, month name, year).
    pub form: String,
    /// Zero-fill month and day in the numeric forms.
    pub fill_zeros: bool,
}

impl Default for DateOptions {
    fn default() -> Self {
        DateOptions {
            enforce: true,
            form: "exact".to_string(),
            fill_zeros: true,
        }
    }
}

/// Prompt for year, month and day and format the result.
///
/// The day's upper bound follows the chosen month, leap years included.
pub fn date<C: Console>(
    console: &mut C,
    prompt: Option<&str>,
    options: &DateOptions,
) -> Result<String> {
    let form = assert_valid(options.form.as_str(), &DATE_FORM, Some("form"))?
        .and_then(Value::into_str)
        .expect("form spec yields a string");
    if let Some(prompt) = prompt {
        console.write_line(prompt)?;
    }
    let enforce = options.enforce;

    let year = validate_input(
        console,
        &blankable(&presets::YEAR, !enforce),
        Some(if enforce {
            "Year: "
        } else {
            "Year (can leave blank): "
        }),
    )?
    .and_then(Value::into_int);
    let leap = year.is_some_and(|y| y % 4 == 0 && (y % 100 != 0 || y % 400 == 0));

    let month = validate_input(
        console,
        &blankable(&presets::MONTH, !enforce),
        Some(if enforce {
            "Month: "
        } else {
            "Month (can leave blank): "
        }),
    )?
    .and_then(Value::into_str)
    .map(|word| month_number(&word));

    let days = match month {
        Some(2) => {
            if leap {
                29
            } else {
                28
            }
        }
        Some(4 | 6 | 9 | 11) => 30,
        _ => 31,
    };
    let day = validate_input(
        console,
        &blankable(&Spec::integer_range(Some(1), Some(days)), !enforce),
        Some(if enforce {
            "Date/day: "
        } else {
            "Date/day (can leave blank): "
        }),
    )?
    .and_then(Value::into_int);

    let year_text = year.map_or_else(|| "?".to_string(), |y| y.to_string());
    if form == "long" {
        let day_text = day.map_or_else(
            || "?".to_string(),
            |d| format!("{d}{}", ordinal_suffix(d)),
        );
        let month_text = month.map_or_else(
            || "?".to_string(),
            |m| capitalize(presets::MONTH_NAMES[m as usize - 1]),
        );
        return Ok(format!("{day_text} {month_text}, {year_text}"));
    }
    let month_text = number_or_question(month, options.fill_zeros);
    let day_text = number_or_question(day, options.fill_zeros);
    Ok(match form.as_str() {
        "exact" => format!("{year_text}-{month_text}-{day_text}"),
        "us" => format!("{month_text}/{day_text}/{year_text}"),
        _ => format!("{day_text}/{month_text}/{year_text}"),
    })
}

#[derive(Debug, Clone)]
pub struct TimeOptions {
    /// Output clock, 12 or 24.
    pub output_hour_clock: i64,
    /// Accept fractional seconds to microsecond precision.
    pub milliseconds: bool,
    pub fill_zeros: bool,
    /// Allow each part to be left blank.
    pub or_blank: bool,
}

impl Default for TimeOptions {
    fn default() -> Self {
        TimeOptions {
            output_hour_clock: 24,
            milliseconds: false,
            fill_zeros: true,
            or_blank: false,
        }
    }
}

/// Prompt for hours, minutes and seconds and format the result.
///
/// Input can use either clock; 12-hour input asks for AM/PM and converts.
pub fn time<C: Console>(
    console: &mut C,
    prompt: Option<&str>,
    options: &TimeOptions,
) -> Result<String> {
    let output_clock = assert_valid(
        options.output_hour_clock,
        &presets::HOUR_CLOCK,
        Some("output hour clock"),
    )?
    .and_then(Value::into_int)
    .expect("clock spec yields an integer");
    if let Some(prompt) = prompt {
        console.write_line(prompt)?;
    }
    let blank = options.or_blank;

    let input_clock = validate_input(
        console,
        &presets::HOUR_CLOCK,
        Some("Input hour clock (12/24): "),
    )?
    .and_then(Value::into_int)
    .expect("clock spec yields an integer");

    let hours = if input_clock == 12 {
        let hours = validate_input(
            console,
            &blankable(&presets::HOUR_12, blank),
            Some("Hours (12 hour clock): "),
        )?
        .and_then(Value::into_int);
        let period = validate_input(console, &blankable(&presets::AM_PM, blank), Some("AM or PM? "))?
            .and_then(Value::into_str);
        hours.map(|h| {
            let h = if h == 12 { 0 } else { h };
            if period.as_deref() == Some("pm") { h + 12 } else { h }
        })
    } else {
        validate_input(
            console,
            &blankable(&presets::HOUR_24, blank),
            Some("Hours (24 hour clock): "),
        )?
        .and_then(Value::into_int)
    };

    let minutes = validate_input(console, &blankable(&presets::MINUTE, blank), Some("Minutes: "))?
        .and_then(Value::into_int);

    let seconds = if options.milliseconds {
        validate_input(
            console,
            &blankable(&presets::PRECISE_SECOND, blank),
            Some("Seconds including decimal: "),
        )?
    } else {
        validate_input(
            console,
            &blankable(&presets::WHOLE_SECOND, blank),
            Some("Seconds: "),
        )?
    };

    let (hours, period_label) = if output_clock == 12 {
        match hours {
            Some(h) => {
                let label = if h < 12 { "AM" } else { "PM" };
                let h12 = match h % 12 {
                    0 => 12,
                    other => other,
                };
                (Some(h12), Some(label))
            }
            None => (None, None),
        }
    } else {
        (hours, None)
    };

    let hours_text = number_or_question(hours, options.fill_zeros);
    let minutes_text = number_or_question(minutes, options.fill_zeros);
    let seconds_text = seconds_text(seconds.as_ref(), options.fill_zeros);
    let mut formatted = format!("{hours_text}:{minutes_text}:{seconds_text}");
    if output_clock == 12 {
        formatted.push(' ');
        formatted.push_str(period_label.unwrap_or("?"));
    }
    Ok(formatted)
}

#[derive(Debug, Clone)]
pub struct DateTimeOptions {
    pub enforce: bool,
    /// Output form: "exact" (24-hour) or "long" (12-hour with AM/PM).
    pub form: String,
    pub milliseconds: bool,
    pub fill_zeros: bool,
}

impl Default for DateTimeOptions {
    fn default() -> Self {
        DateTimeOptions {
            enforce: true,
            form: "exact".to_string(),
            milliseconds: false,
            fill_zeros: true,
        }
    }
}

/// Prompt for a full date and time.
pub fn datetime<C: Console>(
    console: &mut C,
    prompt: Option<&str>,
    options: &DateTimeOptions,
) -> Result<String> {
    let form = assert_valid(options.form.as_str(), &DATETIME_FORM, Some("form"))?
        .and_then(Value::into_str)
        .expect("form spec yields a string");
    if let Some(prompt) = prompt {
        console.write_line(prompt)?;
    }
    let date_text = date(
        console,
        None,
        &DateOptions {
            enforce: options.enforce,
            form: form.clone(),
            fill_zeros: options.fill_zeros,
        },
    )?;
    let time_text = time(
        console,
        None,
        &TimeOptions {
            output_hour_clock: if form == "exact" { 24 } else { 12 },
            milliseconds: options.milliseconds,
            fill_zeros: options.fill_zeros,
            or_blank: !options.enforce,
        },
    )?;
    Ok(format!("{date_text} {time_text}"))
}

fn blankable(spec: &Spec, blank: bool) -> Spec {
    if blank {
        spec.clone().or_blank()
    } else {
        spec.clone()
    }
}

fn month_number(word: &str) -> i64 {
    match presets::MONTH_NAMES.iter().position(|name| *name == word) {
        Some(index) => index as i64 + 1,
        None => word.parse().expect("month spec admits only names or 1-12"),
    }
}

fn number_or_question(value: Option<i64>, fill_zeros: bool) -> String {
    match value {
        Some(v) if fill_zeros => format!("{v:02}"),
        Some(v) => v.to_string(),
        None => "?".to_string(),
    }
}

fn seconds_text(seconds: Option<&Value>, fill_zeros: bool) -> String {
    match seconds {
        None => "?".to_string(),
        Some(Value::Int(s)) => number_or_question(Some(*s), fill_zeros),
        Some(value) => {
            let text = value.to_string();
            if fill_zeros && value.as_f64().is_some_and(|x| x < 10.0) {
                format!("0{text}")
            } else {
                text
            }
        }
    }
}

fn ordinal_suffix(day: i64) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
