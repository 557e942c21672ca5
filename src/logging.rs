// src/logging.rs

//! Logging setup for `execlaunch` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `EXECLAUNCH_LOG` environment variable: either a bare level ("debug")
//!    or full `EnvFilter` directives ("info,execlaunch::exec=trace")
//! 3. default to `info`
//!
//! A bare level only applies to `execlaunch` itself; dependencies such as
//! tokio stay at `warn`. Launch-path events (exec attempt, exec failure,
//! spawned child exit) are logged at `debug`, so a default run adds nothing
//! to stderr.
//!
//! Logs are sent to STDERR. STDOUT carries only the launcher's startup and
//! error lines, and after a successful exec it belongs to the script.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "EXECLAUNCH_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let directives = filter_directives(cli_level, env_value.as_deref());
    let filter = EnvFilter::try_new(&directives)?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initialising tracing subscriber: {e}"))?;

    Ok(())
}

/// Resolve the `EnvFilter` directive string for the given CLI level and
/// `EXECLAUNCH_LOG` value. Invalid env values fall back to the default.
pub fn filter_directives(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    if let Some(lvl) = cli_level {
        return crate_directives(level_str(lvl));
    }

    match env_value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => match parse_level_str(s) {
            Some(level) => crate_directives(level),
            None if EnvFilter::try_new(s).is_ok() => s.to_string(),
            None => crate_directives("info"),
        },
        None => crate_directives("info"),
    }
}

fn crate_directives(level: &str) -> String {
    let deps = if level == "error" { "error" } else { "warn" };
    format!("{deps},execlaunch={level}")
}

fn level_str(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

fn parse_level_str(s: &str) -> Option<&'static str> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some("error"),
        "warn" | "warning" => Some("warn"),
        "info" => Some("info"),
        "debug" => Some("debug"),
        "trace" => Some("trace"),
        _ => None,
    }
}
