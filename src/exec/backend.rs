// src/exec/backend.rs

//! Pluggable process-image backend.
//!
//! The launcher talks to a `ProcessImage` instead of calling `exec` directly.
//! Production code uses [`ExecBackend`]; tests substitute a fake that hands
//! back a chosen `io::Error` so the failure path can be driven in-process.

use std::io;

use tracing::debug;

use super::command::LaunchSpec;

/// Something that can replace the running process with `spec`.
///
/// The return type is the whole contract: on success the call never returns,
/// so the only value it can ever produce is the error that stopped it.
pub trait ProcessImage {
    fn replace(&mut self, spec: &LaunchSpec) -> io::Error;
}

/// Real backend: `execv` through `std::os::unix::process::CommandExt::exec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecBackend;

impl ProcessImage for ExecBackend {
    #[cfg(unix)]
    fn replace(&mut self, spec: &LaunchSpec) -> io::Error {
        use std::os::unix::process::CommandExt;

        debug!(%spec, "replacing process image");
        super::command::build_command(spec).exec()
    }

    #[cfg(not(unix))]
    fn replace(&mut self, spec: &LaunchSpec) -> io::Error {
        debug!(%spec, "process replacement unavailable on this platform");
        io::Error::new(
            io::ErrorKind::Unsupported,
            "process replacement is only available on Unix; use --mode spawn",
        )
    }
}

/// Platform code for a failed replacement, `-1` when the OS gave none.
pub fn error_code(err: &io::Error) -> i32 {
    err.raw_os_error().unwrap_or(-1)
}
