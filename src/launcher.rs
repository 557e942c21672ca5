// src/launcher.rs

//! The launcher: announce, replace the process image, report on failure.

use std::io::Write;

use tracing::{debug, warn};

use crate::exec::{error_code, spawn_and_wait, LaunchSpec, ProcessImage};
use crate::types::FailurePolicy;

/// What happened when the launcher's own code path completed.
///
/// A successful replacement has no variant: control never comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The exec call returned with this platform code (`errno`, or `-1`).
    Failed { code: i32 },
    /// Spawn mode only: the child exited with this code (`-1` for a signal).
    Exited { code: i32 },
}

impl LaunchOutcome {
    /// Process exit status to report to our parent.
    ///
    /// Under `FailurePolicy::Success` a failed exec still exits 0.
    pub fn exit_code(&self, policy: FailurePolicy) -> i32 {
        match (*self, policy) {
            (LaunchOutcome::Failed { .. }, FailurePolicy::Success) => 0,
            (LaunchOutcome::Failed { .. }, FailurePolicy::Propagate) => 1,
            (LaunchOutcome::Exited { code }, _) if code >= 0 => code,
            (LaunchOutcome::Exited { .. }, _) => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Launcher {
    spec: LaunchSpec,
    startup_message: String,
}

impl Launcher {
    pub fn new(spec: LaunchSpec, startup_message: impl Into<String>) -> Self {
        Self {
            spec,
            startup_message: startup_message.into(),
        }
    }

    /// Print the startup line, then hand the process over to the interpreter.
    ///
    /// Only returns if the replacement failed, after printing `Error: <code>`.
    /// Console write errors never stop the exec attempt or change the outcome.
    pub fn run<W, P>(&self, out: &mut W, backend: &mut P) -> LaunchOutcome
    where
        W: Write,
        P: ProcessImage + ?Sized,
    {
        self.announce(out);

        let err = backend.replace(&self.spec);
        let code = error_code(&err);
        debug!(code, error = %err, interpreter = ?self.spec.interpreter, "process replacement failed");

        self.report_failure(out, code);
        LaunchOutcome::Failed { code }
    }

    /// Same announcement and failure report, but the interpreter runs as a
    /// child and its exit code is returned.
    pub async fn run_spawned<W>(&self, out: &mut W) -> LaunchOutcome
    where
        W: Write,
    {
        self.announce(out);

        match spawn_and_wait(&self.spec).await {
            Ok(status) => LaunchOutcome::Exited {
                code: status.code().unwrap_or(-1),
            },
            Err(err) => {
                let code = error_code(&err);
                debug!(code, error = %err, interpreter = ?self.spec.interpreter, "spawning interpreter failed");
                self.report_failure(out, code);
                LaunchOutcome::Failed { code }
            }
        }
    }

    fn announce<W: Write>(&self, out: &mut W) {
        // Anything left buffered would be lost with the old process image.
        let written = writeln!(out, "{}", self.startup_message).and_then(|()| out.flush());
        if let Err(err) = written {
            warn!(error = %err, "could not write startup line");
        }
    }

    fn report_failure<W: Write>(&self, out: &mut W, code: i32) {
        let written = writeln!(out, "Error: {code}").and_then(|()| out.flush());
        if let Err(err) = written {
            warn!(code, error = %err, "could not write failure report");
        }
    }
}
