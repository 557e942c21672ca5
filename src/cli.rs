// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every launch flag is optional. Anything not given here falls back to the
//! environment, then to the config file, then to built-in defaults (see
//! [`crate::config::overrides`]).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::{FailurePolicy, LaunchMode};

/// Command-line arguments for `execlaunch`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "execlaunch",
    version,
    about = "Replace this process with a shell running a build script.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `$EXECLAUNCH_CONFIG`, else `Execlaunch.toml` in the current
    /// working directory if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Shell interpreter to exec.
    #[arg(long, value_name = "PATH")]
    pub interpreter: Option<PathBuf>,

    /// Script the interpreter should run.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// `argv[0]` handed to the interpreter.
    #[arg(long, value_name = "NAME")]
    pub arg0: Option<String>,

    /// Exit status policy when the exec call fails.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_failure: Option<FailurePolicyArg>,

    /// Replace this process (`exec`) or run the script as a child (`spawn`).
    #[arg(long, value_enum, value_name = "MODE")]
    pub mode: Option<LaunchModeArg>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EXECLAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve + validate the launch plan, print it, but don't exec.
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments passed to the script after `--`.
    #[arg(last = true, value_name = "ARGS")]
    pub script_args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum FailurePolicyArg {
    Success,
    Propagate,
}

impl From<FailurePolicyArg> for FailurePolicy {
    fn from(arg: FailurePolicyArg) -> Self {
        match arg {
            FailurePolicyArg::Success => FailurePolicy::Success,
            FailurePolicyArg::Propagate => FailurePolicy::Propagate,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LaunchModeArg {
    Exec,
    Spawn,
}

impl From<LaunchModeArg> for LaunchMode {
    fn from(arg: LaunchModeArg) -> Self {
        match arg {
            LaunchModeArg::Exec => LaunchMode::Exec,
            LaunchModeArg::Spawn => LaunchMode::Spawn,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
