// src/config/overrides.rs

//! CLI and environment overrides layered on top of the config file.
//!
//! Precedence, highest first: CLI flag, environment variable, config file,
//! built-in default.

use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::CliArgs;
use crate::config::model::RawConfigFile;
use crate::errors::{LauncherError, Result};
use crate::types::{FailurePolicy, LaunchMode};

pub const INTERPRETER_ENV: &str = "EXECLAUNCH_INTERPRETER";
pub const SCRIPT_ENV: &str = "EXECLAUNCH_SCRIPT";
pub const ARG0_ENV: &str = "EXECLAUNCH_ARG0";
pub const ON_FAILURE_ENV: &str = "EXECLAUNCH_ON_FAILURE";
pub const MODE_ENV: &str = "EXECLAUNCH_MODE";

/// A partial set of `[launch]` values. `None` means "not overridden".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub interpreter: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub arg0: Option<String>,
    pub on_failure: Option<FailurePolicy>,
    pub mode: Option<LaunchMode>,
    /// Script args only come from the CLI; an empty list means "keep file value".
    pub script_args: Vec<String>,
}

impl Overrides {
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            interpreter: args.interpreter.clone(),
            script: args.script.clone(),
            arg0: args.arg0.clone(),
            on_failure: args.on_failure.map(Into::into),
            mode: args.mode.map(Into::into),
            script_args: args.script_args.clone(),
        }
    }

    /// Read overrides through `env`, usually `|k| std::env::var(k).ok()`.
    ///
    /// Empty variables are treated as unset.
    pub fn from_env(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| env(key).filter(|v| !v.is_empty());

        let on_failure = get(ON_FAILURE_ENV)
            .map(|v| parse_env::<FailurePolicy>(ON_FAILURE_ENV, &v))
            .transpose()?;
        let mode = get(MODE_ENV)
            .map(|v| parse_env::<LaunchMode>(MODE_ENV, &v))
            .transpose()?;

        Ok(Self {
            interpreter: get(INTERPRETER_ENV).map(PathBuf::from),
            script: get(SCRIPT_ENV).map(PathBuf::from),
            arg0: get(ARG0_ENV),
            on_failure,
            mode,
            script_args: Vec::new(),
        })
    }

    /// Combine two layers, keeping `self` where both set a value.
    pub fn or(self, lower: Overrides) -> Overrides {
        Overrides {
            interpreter: self.interpreter.or(lower.interpreter),
            script: self.script.or(lower.script),
            arg0: self.arg0.or(lower.arg0),
            on_failure: self.on_failure.or(lower.on_failure),
            mode: self.mode.or(lower.mode),
            script_args: if self.script_args.is_empty() {
                lower.script_args
            } else {
                self.script_args
            },
        }
    }

    pub fn apply(self, raw: &mut RawConfigFile) {
        let launch = &mut raw.launch;
        if let Some(interpreter) = self.interpreter {
            launch.interpreter = interpreter;
        }
        if let Some(script) = self.script {
            launch.script = script;
        }
        if let Some(arg0) = self.arg0 {
            launch.arg0 = arg0;
        }
        if let Some(on_failure) = self.on_failure {
            launch.on_failure = on_failure;
        }
        if let Some(mode) = self.mode {
            launch.mode = mode;
        }
        if !self.script_args.is_empty() {
            launch.args = self.script_args;
        }
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|e| LauncherError::ConfigError(format!("{key}: {e}")))
}
