use std::io;
use std::sync::{Arc, Mutex};

use execlaunch::exec::{LaunchSpec, ProcessImage};

/// A fake process-image backend that:
/// - records every spec it was asked to exec
/// - "fails" each time with a fresh error built from `errno` (or a custom
///   error without an OS code).
pub struct FakeProcessImage {
    errno: Option<i32>,
    attempts: Arc<Mutex<Vec<LaunchSpec>>>,
}

impl FakeProcessImage {
    /// Fail with `io::Error::from_raw_os_error(errno)`.
    pub fn failing_with(errno: i32) -> Self {
        Self {
            errno: Some(errno),
            attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail with an error that carries no OS code.
    pub fn failing_without_code() -> Self {
        Self {
            errno: None,
            attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn attempts(&self) -> Arc<Mutex<Vec<LaunchSpec>>> {
        Arc::clone(&self.attempts)
    }
}

impl ProcessImage for FakeProcessImage {
    fn replace(&mut self, spec: &LaunchSpec) -> io::Error {
        self.attempts.lock().unwrap().push(spec.clone());
        match self.errno {
            Some(code) => io::Error::from_raw_os_error(code),
            None => io::Error::new(io::ErrorKind::InvalidInput, "nul byte in argument"),
        }
    }
}
