// src/exec/command.rs

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// Fully resolved interpreter command line.
///
/// The interpreter receives `argv = [arg0, script, script_args...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub interpreter: PathBuf,
    pub arg0: String,
    pub script: PathBuf,
    pub script_args: Vec<String>,
}

/// Build the `std::process::Command` for a launch.
///
/// Environment, working directory and stdio are inherited untouched.
pub fn build_command(spec: &LaunchSpec) -> Command {
    let mut cmd = Command::new(&spec.interpreter);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.arg0(&spec.arg0);
    }

    cmd.arg(&spec.script).args(&spec.script_args);
    cmd
}

impl fmt::Display for LaunchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (argv0={}) {}",
            self.interpreter.display(),
            self.arg0,
            self.script.display()
        )?;
        for arg in &self.script_args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
