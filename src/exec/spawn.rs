// src/exec/spawn.rs

//! Child-process mode: run the interpreter with `tokio::process::Command`,
//! inherit stdio and wait for it.

use std::io;
use std::process::ExitStatus;

use tokio::process::Command;
use tracing::debug;

use super::command::{build_command, LaunchSpec};

/// Spawn the interpreter and wait for it to exit.
///
/// The error is the spawn (or wait) failure; a script that runs and exits
/// nonzero is an `Ok` status.
pub async fn spawn_and_wait(spec: &LaunchSpec) -> io::Result<ExitStatus> {
    debug!(%spec, "spawning interpreter as child");

    let mut cmd = Command::from(build_command(spec));
    let mut child = cmd.spawn()?;
    let status = child.wait().await?;

    debug!(
        exit_code = status.code().unwrap_or(-1),
        success = status.success(),
        "interpreter exited"
    );

    Ok(status)
}
