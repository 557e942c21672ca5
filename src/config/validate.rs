// src/config/validate.rs

use std::ffi::OsStr;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{LauncherError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = LauncherError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.launch))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    let launch = &cfg.launch;

    ensure_non_empty("interpreter", launch.interpreter.as_os_str())?;
    ensure_non_empty("script", launch.script.as_os_str())?;
    ensure_non_empty("arg0", OsStr::new(&launch.arg0))?;

    // argv elements end up as C strings; an interior NUL can't be passed.
    ensure_no_nul("interpreter", launch.interpreter.as_os_str())?;
    ensure_no_nul("script", launch.script.as_os_str())?;
    ensure_no_nul("arg0", OsStr::new(&launch.arg0))?;
    for (idx, arg) in launch.args.iter().enumerate() {
        ensure_no_nul(&format!("args[{idx}]"), OsStr::new(arg))?;
    }

    Ok(())
}

fn ensure_non_empty(field: &str, value: &OsStr) -> Result<()> {
    if value.is_empty() {
        return Err(LauncherError::ConfigError(format!(
            "[launch].{field} must not be empty"
        )));
    }
    Ok(())
}

fn ensure_no_nul(field: &str, value: &OsStr) -> Result<()> {
    if value.as_encoded_bytes().contains(&0) {
        return Err(LauncherError::ConfigError(format!(
            "[launch].{field} contains an interior NUL byte"
        )));
    }
    Ok(())
}
