//! Interactive gradebook CLI.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use gradebook_cli::config::resolve_policy;
use gradebook_cli::logging::{LogConfig, LogFormat, init_logging};
use gradebook_model::GradingPolicy;
use gradebook_store::RosterStore;

mod cli;
mod session;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ScaleArg};
use crate::session::run_session;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let preset = match cli.scale {
        ScaleArg::Percent => GradingPolicy::percent(),
        ScaleArg::FivePoint => GradingPolicy::five_point(),
    };
    let policy = match resolve_policy(preset, cli.policy_file.as_deref(), cli.pass_threshold) {
        Ok(policy) => policy,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let exit_code = match cli.command.unwrap_or(Command::Session) {
        Command::Session => {
            let output_dir = cli.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
            let mut store = RosterStore::new(policy);
            match run_session(&mut store, &output_dir) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Policy => {
            summary::print_policy(policy);
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
