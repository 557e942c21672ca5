// src/config/mod.rs

//! Configuration loading and validation for execlaunch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Layer CLI / environment overrides on top (`overrides.rs`).
//! - Validate the resulting launch plan (`validate.rs`).

pub mod loader;
pub mod model;
pub mod overrides;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_raw_or_default};
pub use model::{ConfigFile, LaunchSection, RawConfigFile};
pub use overrides::Overrides;
