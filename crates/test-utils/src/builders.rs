#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use execlaunch::config::{ConfigFile, RawConfigFile};
use execlaunch::types::{FailurePolicy, LaunchMode};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn interpreter(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.launch.interpreter = path.into();
        self
    }

    pub fn script(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.launch.script = path.into();
        self
    }

    pub fn arg0(mut self, arg0: &str) -> Self {
        self.config.launch.arg0 = arg0.to_string();
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.config.launch.args.push(arg.to_string());
        self
    }

    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.config.launch.on_failure = policy;
        self
    }

    pub fn mode(mut self, mode: LaunchMode) -> Self {
        self.config.launch.mode = mode;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write an executable shell script into `dir` and return its path.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("writing test script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("stat test script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod test script");
    }

    path
}

/// Write a config file into `dir` and return its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("Execlaunch.toml");
    fs::write(&path, contents).expect("writing test config");
    path
}
