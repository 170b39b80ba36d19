//! CLI argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fieldspec",
    version,
    about = "Prompt for and validate values against declarative specs",
    long_about = "Validate raw values against declarative specs describing the\n\
                  accepted type, range, allow-list and rounding, or prompt\n\
                  interactively until the input conforms."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prompt until the input matches an ad-hoc spec.
    Ask(AskArgs),

    /// Validate a single value without prompting.
    Check(CheckArgs),

    /// Prompt for a yes/no answer.
    Bool(BoolArgs),

    /// Prompt for a calendar date.
    Date(DateArgs),

    /// Prompt for a time of day.
    Time(TimeArgs),

    /// Prompt for a date and time.
    Datetime(DatetimeArgs),

    /// List the prebuilt specs.
    Presets(PresetsArgs),
}

/// Flags describing an ad-hoc spec.
#[derive(Args)]
pub struct SpecArgs {
    /// Type the value must coerce to.
    #[arg(long = "type", value_enum, default_value = "string")]
    pub value_type: ValueTypeArg,

    /// Inclusive lower bound (numeric types only).
    #[arg(long)]
    pub min: Option<f64>,

    /// Inclusive upper bound (numeric types only).
    #[arg(long)]
    pub max: Option<f64>,

    /// Comma-separated allow-list of accepted values.
    #[arg(long = "one-of", value_delimiter = ',', conflicts_with_all = ["min", "max"])]
    pub one_of: Option<Vec<String>>,

    /// Decimal places to round to before checking (numeric types only).
    #[arg(long)]
    pub round: Option<i32>,

    /// Accept a blank value.
    #[arg(long = "blank-ok")]
    pub blank_ok: bool,

    /// Keep string case instead of folding to lower case.
    #[arg(long = "keep-case")]
    pub keep_case: bool,
}

#[derive(Args)]
pub struct AskArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Prompt text shown before reading.
    #[arg(long)]
    pub prompt: Option<String>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Raw value to validate.
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Args)]
pub struct BoolArgs {
    /// Prompt text shown before reading.
    #[arg(long)]
    pub prompt: Option<String>,

    /// Accept a blank answer.
    #[arg(long = "blank-ok")]
    pub blank_ok: bool,
}

#[derive(Args)]
pub struct DateArgs {
    /// Output form: exact, uk, us or long.
    #[arg(long, default_value = "exact")]
    pub form: String,

    /// Allow parts to be left blank.
    #[arg(long = "no-enforce")]
    pub no_enforce: bool,

    /// Skip zero-filling month and day.
    #[arg(long = "no-fill-zeros")]
    pub no_fill_zeros: bool,

    /// Message shown before the part prompts.
    #[arg(long)]
    pub prompt: Option<String>,
}

#[derive(Args)]
pub struct TimeArgs {
    /// Output clock: 12 or 24.
    #[arg(long = "output-clock", default_value_t = 24)]
    pub output_clock: i64,

    /// Accept fractional seconds.
    #[arg(long)]
    pub millis: bool,

    /// Skip zero-filling hours, minutes and seconds.
    #[arg(long = "no-fill-zeros")]
    pub no_fill_zeros: bool,

    /// Allow parts to be left blank.
    #[arg(long = "blank-ok")]
    pub blank_ok: bool,

    /// Message shown before the part prompts.
    #[arg(long)]
    pub prompt: Option<String>,
}

#[derive(Args)]
pub struct DatetimeArgs {
    /// Output form: exact or long.
    #[arg(long, default_value = "exact")]
    pub form: String,

    /// Allow parts to be left blank.
    #[arg(long = "no-enforce")]
    pub no_enforce: bool,

    /// Accept fractional seconds.
    #[arg(long)]
    pub millis: bool,

    /// Skip zero-filling date and time parts.
    #[arg(long = "no-fill-zeros")]
    pub no_fill_zeros: bool,

    /// Message shown before the part prompts.
    #[arg(long)]
    pub prompt: Option<String>,
}

#[derive(Args)]
pub struct PresetsArgs {
    /// Listing format.
    #[arg(long, value_enum, default_value = "table")]
    pub format: ListFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ValueTypeArg {
    String,
    Integer,
    Number,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListFormatArg {
    Table,
    Json,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
