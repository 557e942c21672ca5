// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] holds the resolved command line and turns it into a
//!   `std::process::Command`.
//! - [`backend`] provides the `ProcessImage` trait and the real
//!   [`ExecBackend`] that replaces the current process.
//! - [`spawn`] runs the same command as a child via `tokio::process`.

pub mod backend;
pub mod command;
pub mod spawn;

pub use backend::{error_code, ExecBackend, ProcessImage};
pub use command::{build_command, LaunchSpec};
pub use spawn::spawn_and_wait;
