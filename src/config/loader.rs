// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "EXECLAUNCH_CONFIG";

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load the raw config the launcher should start from.
///
/// - An explicit path (flag or `EXECLAUNCH_CONFIG`) must exist.
/// - Otherwise `Execlaunch.toml` is read if present, and built-in defaults
///   are used if it isn't.
pub fn load_raw_or_default(explicit: Option<&Path>) -> Result<RawConfigFile> {
    if let Some(path) = explicit {
        debug!(path = ?path, "loading explicit config file");
        return load_from_path(path);
    }

    let fallback = default_config_path();
    if fallback.is_file() {
        debug!(path = ?fallback, "loading default config file");
        load_from_path(&fallback)
    } else {
        debug!("no config file found, using built-in defaults");
        Ok(RawConfigFile::default())
    }
}

/// Resolve the explicit config path: CLI flag first, then `EXECLAUNCH_CONFIG`.
pub fn explicit_config_path(
    cli: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| env(CONFIG_ENV).filter(|s| !s.is_empty()).map(PathBuf::from))
}

/// Default config path: `Execlaunch.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Execlaunch.toml")
}
