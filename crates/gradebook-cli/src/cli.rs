//! CLI argument definitions for the gradebook.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Gradebook - Interactive student record management",
    long_about = "Manage a roster of student records for one interactive session.\n\n\
                  Add, modify, delete, and search students; view grade statistics;\n\
                  and export a CSV report. All state lives in memory and is\n\
                  discarded when the session ends."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Grading scale preset used when no policy file is given.
    #[arg(long = "scale", value_enum, default_value = "percent", global = true)]
    pub scale: ScaleArg,

    /// Load the grading policy from a JSON file (overrides --scale).
    #[arg(long = "policy-file", value_name = "PATH", global = true)]
    pub policy_file: Option<PathBuf>,

    /// Override the pass threshold of the selected scale.
    #[arg(long = "pass-threshold", value_name = "GRADE", global = true)]
    pub pass_threshold: Option<f64>,

    /// Directory the CSV report is exported to (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR", global = true)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive roster session (default).
    Session,

    /// Print the effective grading policy and exit.
    Policy,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScaleArg {
    /// 0.0-100.0, pass at 60.
    Percent,
    /// 1.0-5.0, pass at 3.
    FivePoint,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
