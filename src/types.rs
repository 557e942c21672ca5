use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// What the launcher reports to its parent when process replacement fails.
///
/// - `Success`: print the error code and exit 0 anyway (default). Callers
///   that only care that *a* process was started rely on this.
/// - `Propagate`: print the error code and exit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum FailurePolicy {
    Success,
    Propagate,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::Success
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(FailurePolicy::Success),
            "propagate" => Ok(FailurePolicy::Propagate),
            other => Err(format!(
                "invalid on_failure: {other} (expected \"success\" or \"propagate\")"
            )),
        }
    }
}

impl TryFrom<String> for FailurePolicy {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Success => f.write_str("success"),
            FailurePolicy::Propagate => f.write_str("propagate"),
        }
    }
}

/// How the interpreter is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LaunchMode {
    /// Replace the current process image (`execv`). Never returns on success.
    Exec,
    /// Run the interpreter as a child, wait for it and forward its exit code.
    Spawn,
}

impl Default for LaunchMode {
    fn default() -> Self {
        LaunchMode::Exec
    }
}

impl FromStr for LaunchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exec" => Ok(LaunchMode::Exec),
            "spawn" => Ok(LaunchMode::Spawn),
            other => Err(format!(
                "invalid mode: {other} (expected \"exec\" or \"spawn\")"
            )),
        }
    }
}

impl TryFrom<String> for LaunchMode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchMode::Exec => f.write_str("exec"),
            LaunchMode::Spawn => f.write_str("spawn"),
        }
    }
}
