// tests/error_handling.rs

mod common;
use crate::common::builders::{write_config, ConfigFileBuilder};

use std::collections::HashMap;
use std::path::PathBuf;

use execlaunch::cli::CliArgs;
use execlaunch::config::{load_and_validate, ConfigFile, Overrides};
use execlaunch::errors::LauncherError;
use execlaunch::resolve_config;
use tempfile::TempDir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn empty_interpreter_returns_config_error() {
    let raw = ConfigFileBuilder::new().interpreter("").raw();

    match ConfigFile::try_from(raw) {
        Err(LauncherError::ConfigError(msg)) => {
            assert!(msg.contains("interpreter"));
            assert!(msg.contains("must not be empty"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_script_and_arg0_are_rejected() {
    let raw = ConfigFileBuilder::new().script("").raw();
    assert!(matches!(
        ConfigFile::try_from(raw),
        Err(LauncherError::ConfigError(msg)) if msg.contains("script")
    ));

    let raw = ConfigFileBuilder::new().arg0("").raw();
    assert!(matches!(
        ConfigFile::try_from(raw),
        Err(LauncherError::ConfigError(msg)) if msg.contains("arg0")
    ));
}

#[test]
fn nul_byte_in_script_arg_is_rejected() {
    let raw = ConfigFileBuilder::new().arg("ok").arg("bad\0arg").raw();

    match ConfigFile::try_from(raw) {
        Err(LauncherError::ConfigError(msg)) => {
            assert!(msg.contains("args[1]"));
            assert!(msg.contains("NUL"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_key_returns_toml_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[launch]\ninterpeter = \"/bin/sh\"\n");

    match load_and_validate(&path) {
        Err(LauncherError::TomlError(e)) => {
            assert!(e.to_string().contains("interpeter"));
        }
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn invalid_policy_in_file_returns_toml_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[launch]\non_failure = \"ignore\"\n");

    assert!(matches!(
        load_and_validate(&path),
        Err(LauncherError::TomlError(_))
    ));
}

#[test]
fn invalid_env_value_returns_config_error() {
    let env: HashMap<&str, &str> = HashMap::from([("EXECLAUNCH_ON_FAILURE", "ignore")]);

    match Overrides::from_env(|k| env.get(k).map(|v| v.to_string())) {
        Err(LauncherError::ConfigError(msg)) => {
            assert!(msg.contains("EXECLAUNCH_ON_FAILURE"));
            assert!(msg.contains("ignore"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn explicit_missing_config_returns_io_error() {
    let args = CliArgs {
        config: Some(PathBuf::from("/definitely/not/here/Execlaunch.toml")),
        ..CliArgs::default()
    };

    assert!(matches!(
        resolve_config(&args, no_env),
        Err(LauncherError::IoError(_))
    ));
}
