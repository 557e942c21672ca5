// tests/launcher_fake_backend.rs

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use execlaunch::exec::LaunchSpec;
use execlaunch::launcher::{LaunchOutcome, Launcher};
use execlaunch::types::FailurePolicy;
use execlaunch_test_utils::FakeProcessImage;

type TestResult = Result<(), Box<dyn Error>>;

/// A console whose every write fails, like stdout on a closed pipe.
struct BrokenConsole {
    write_attempts: usize,
}

impl Write for BrokenConsole {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.write_attempts += 1;
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

fn build_spec() -> LaunchSpec {
    LaunchSpec {
        interpreter: PathBuf::from("/bin/bash"),
        arg0: "sh".to_string(),
        script: PathBuf::from("/workspace/build.sh"),
        script_args: vec![],
    }
}

#[test]
fn failed_replacement_prints_startup_then_error_code() -> TestResult {
    init_tracing();

    let launcher = Launcher::new(build_spec(), "Started launcher");
    let mut backend = FakeProcessImage::failing_with(2);
    let mut out = Vec::new();

    let outcome = launcher.run(&mut out, &mut backend);

    assert_eq!(outcome, LaunchOutcome::Failed { code: 2 });
    assert_eq!(String::from_utf8(out)?, "Started launcher\nError: 2\n");
    Ok(())
}

#[test]
fn backend_receives_the_configured_command_line() -> TestResult {
    init_tracing();

    let mut spec = build_spec();
    spec.script_args = vec!["--release".to_string()];
    let launcher = Launcher::new(spec.clone(), "hi");
    let mut backend = FakeProcessImage::failing_with(13);
    let attempts = backend.attempts();

    launcher.run(&mut Vec::new(), &mut backend);

    let attempts = attempts.lock().unwrap();
    assert_eq!(attempts.len(), 1, "exactly one replacement attempt, no retry");
    assert_eq!(attempts[0], spec);
    Ok(())
}

#[test]
fn error_without_os_code_reports_minus_one() -> TestResult {
    init_tracing();

    let launcher = Launcher::new(build_spec(), "Started launcher");
    let mut backend = FakeProcessImage::failing_without_code();
    let mut out = Vec::new();

    let outcome = launcher.run(&mut out, &mut backend);

    assert_eq!(outcome, LaunchOutcome::Failed { code: -1 });
    assert!(String::from_utf8(out)?.ends_with("Error: -1\n"));
    Ok(())
}

#[test]
fn failure_exits_zero_by_default_and_one_when_propagating() -> TestResult {
    let launcher = Launcher::new(build_spec(), "Started launcher");
    let outcome = launcher.run(&mut Vec::new(), &mut FakeProcessImage::failing_with(8));

    assert_eq!(outcome.exit_code(FailurePolicy::default()), 0);
    assert_eq!(outcome.exit_code(FailurePolicy::Success), 0);
    assert_eq!(outcome.exit_code(FailurePolicy::Propagate), 1);
    Ok(())
}

#[test]
fn running_twice_gives_identical_output() -> TestResult {
    let launcher = Launcher::new(build_spec(), "Started launcher");

    let mut first = Vec::new();
    let mut second = Vec::new();
    launcher.run(&mut first, &mut FakeProcessImage::failing_with(2));
    launcher.run(&mut second, &mut FakeProcessImage::failing_with(2));

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn spawned_exit_codes_pass_through() {
    assert_eq!(LaunchOutcome::Exited { code: 0 }.exit_code(FailurePolicy::Success), 0);
    assert_eq!(LaunchOutcome::Exited { code: 3 }.exit_code(FailurePolicy::Success), 3);
    assert_eq!(LaunchOutcome::Exited { code: 3 }.exit_code(FailurePolicy::Propagate), 3);
    assert_eq!(LaunchOutcome::Exited { code: -1 }.exit_code(FailurePolicy::Success), 1);
}

#[test]
fn broken_console_still_attempts_exec_and_exits_zero() {
    init_tracing();

    let launcher = Launcher::new(build_spec(), "Started launcher");
    let mut backend = FakeProcessImage::failing_with(2);
    let attempts = backend.attempts();
    let mut console = BrokenConsole { write_attempts: 0 };

    let outcome = launcher.run(&mut console, &mut backend);

    assert_eq!(attempts.lock().unwrap().len(), 1);
    assert_eq!(outcome, LaunchOutcome::Failed { code: 2 });
    assert_eq!(outcome.exit_code(FailurePolicy::Success), 0);
    // Both the startup line and the failure report were tried.
    assert!(console.write_attempts >= 2);
}
