//! CLI argument definitions for `yarn-form`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use form_cli::input::Assignment;
use form_standards::FormVariant;

#[derive(Parser)]
#[command(
    name = "yarn-form",
    version,
    about = "Fill in, validate and evaluate declarative forms",
    long_about = "Fill in, validate and evaluate declarative forms.\n\n\
                  Ships with a registration form, a clothing preference form and\n\
                  a yarn calculator that estimates grams and 50 g packs of yarn."
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

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include raw field values in log output.
    ///
    /// Values are redacted by default since forms may hold passwords.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in forms.
    Forms,

    /// Show the fields of a form with their default state.
    Fields(FormArgs),

    /// Fill in a form and report validation errors.
    Check(CheckArgs),

    /// Fill in the yarn calculator and compute the yarn requirement.
    Calculate(CalculateArgs),
}

#[derive(Args)]
pub struct FormArgs {
    /// Built-in form to use.
    #[arg(long = "form", default_value = "yarn-calculator")]
    pub form: FormVariant,

    /// Load the form definition from a TOML file instead.
    #[arg(long = "form-file", value_name = "PATH", conflicts_with = "form")]
    pub form_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Field assignment, applied in order (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<Assignment>,
}

#[derive(Args)]
pub struct CalculateArgs {
    /// Yarn calculator definition to use instead of the built-in one.
    #[arg(long = "form-file", value_name = "PATH")]
    pub form_file: Option<PathBuf>,

    /// Field assignment, applied in order (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<Assignment>,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
