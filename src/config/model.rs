// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::exec::LaunchSpec;
use crate::types::{FailurePolicy, LaunchMode};

/// Interpreter used when nothing else is configured.
pub const DEFAULT_INTERPRETER: &str = "/bin/bash";
/// `argv[0]` handed to the interpreter by default.
pub const DEFAULT_ARG0: &str = "sh";
/// Script run by default.
pub const DEFAULT_SCRIPT: &str = "/workspace/build.sh";
/// Line printed before the exec attempt.
pub const DEFAULT_STARTUP_MESSAGE: &str = "Started launcher";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [launch]
/// interpreter = "/bin/bash"
/// arg0 = "sh"
/// script = "/workspace/build.sh"
/// args = []
/// startup_message = "Started launcher"
/// on_failure = "success"
/// mode = "exec"
/// ```
///
/// Every key is optional. An empty file (or no file at all) yields the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub launch: LaunchSection,
}

/// `[launch]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchSection {
    /// Shell interpreter to exec.
    #[serde(default = "default_interpreter")]
    pub interpreter: PathBuf,

    /// `argv[0]` for the interpreter. Bash started as `sh` runs in POSIX mode.
    #[serde(default = "default_arg0")]
    pub arg0: String,

    /// Script path passed as the interpreter's first argument.
    #[serde(default = "default_script")]
    pub script: PathBuf,

    /// Arguments forwarded to the script. Empty by default.
    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default = "default_startup_message")]
    pub startup_message: String,

    /// `"success"` (default) or `"propagate"`.
    #[serde(default)]
    pub on_failure: FailurePolicy,

    /// `"exec"` (default) or `"spawn"`.
    #[serde(default)]
    pub mode: LaunchMode,
}

fn default_interpreter() -> PathBuf {
    PathBuf::from(DEFAULT_INTERPRETER)
}

fn default_arg0() -> String {
    DEFAULT_ARG0.to_string()
}

fn default_script() -> PathBuf {
    PathBuf::from(DEFAULT_SCRIPT)
}

fn default_startup_message() -> String {
    DEFAULT_STARTUP_MESSAGE.to_string()
}

impl Default for LaunchSection {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            arg0: default_arg0(),
            script: default_script(),
            args: Vec::new(),
            startup_message: default_startup_message(),
            on_failure: FailurePolicy::default(),
            mode: LaunchMode::default(),
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>`, so holding one means the
/// launch plan passed [`crate::config::validate`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    launch: LaunchSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(launch: LaunchSection) -> Self {
        Self { launch }
    }

    pub fn launch(&self) -> &LaunchSection {
        &self.launch
    }

    /// The resolved command line to exec.
    pub fn launch_spec(&self) -> LaunchSpec {
        LaunchSpec {
            interpreter: self.launch.interpreter.clone(),
            arg0: self.launch.arg0.clone(),
            script: self.launch.script.clone(),
            script_args: self.launch.args.clone(),
        }
    }

    pub fn startup_message(&self) -> &str {
        &self.launch.startup_message
    }

    pub fn on_failure(&self) -> FailurePolicy {
        self.launch.on_failure
    }

    pub fn mode(&self) -> LaunchMode {
        self.launch.mode
    }
}
