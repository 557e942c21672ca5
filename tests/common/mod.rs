#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

pub use execlaunch_test_utils::builders;
pub use execlaunch_test_utils::init_tracing;

const LAUNCH_ENV: &[&str] = &[
    "EXECLAUNCH_CONFIG",
    "EXECLAUNCH_INTERPRETER",
    "EXECLAUNCH_SCRIPT",
    "EXECLAUNCH_ARG0",
    "EXECLAUNCH_ON_FAILURE",
    "EXECLAUNCH_MODE",
    "EXECLAUNCH_LOG",
];

/// Command for the built binary, run from `cwd` with no `EXECLAUNCH_*`
/// variables inherited from the test environment.
pub fn launcher_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_execlaunch"));
    cmd.current_dir(cwd);
    for key in LAUNCH_ENV {
        cmd.env_remove(key);
    }
    cmd
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
