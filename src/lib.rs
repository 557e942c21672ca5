// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod launcher;
pub mod logging;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::explicit_config_path;
use crate::config::{load_raw_or_default, ConfigFile, Overrides};
use crate::exec::ExecBackend;
use crate::launcher::Launcher;
use crate::types::LaunchMode;

/// High-level entry point used by `main.rs`.
///
/// Resolves the configuration, then runs the launcher in the configured mode.
/// Returns the process exit code. In exec mode this only returns when the
/// replacement failed.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = resolve_config(&args, |key| std::env::var(key).ok())?;

    let mut out = std::io::stdout();

    if args.dry_run {
        print_dry_run(&mut out, &cfg)?;
        return Ok(0);
    }

    let launcher = Launcher::new(cfg.launch_spec(), cfg.startup_message());

    let outcome = match cfg.mode() {
        LaunchMode::Exec => launcher.run(&mut out, &mut ExecBackend),
        LaunchMode::Spawn => launcher.run_spawned(&mut out).await,
    };

    let code = outcome.exit_code(cfg.on_failure());
    debug!(?outcome, policy = %cfg.on_failure(), code, "launcher finished");
    Ok(code)
}

/// Build the validated config from file, environment (through `env`) and CLI.
pub fn resolve_config(
    args: &CliArgs,
    env: impl Fn(&str) -> Option<String>,
) -> errors::Result<ConfigFile> {
    let explicit = explicit_config_path(args.config.as_deref(), &env);
    let mut raw = load_raw_or_default(explicit.as_deref())?;

    Overrides::from_cli(args)
        .or(Overrides::from_env(&env)?)
        .apply(&mut raw);

    ConfigFile::try_from(raw)
}

/// Print the resolved launch plan without executing anything.
pub fn print_dry_run<W: Write>(out: &mut W, cfg: &ConfigFile) -> std::io::Result<()> {
    let launch = cfg.launch();
    writeln!(out, "execlaunch dry-run")?;
    writeln!(out, "  interpreter: {}", launch.interpreter.display())?;
    writeln!(out, "  arg0: {}", launch.arg0)?;
    writeln!(out, "  script: {}", launch.script.display())?;
    if !launch.args.is_empty() {
        writeln!(out, "  args: {:?}", launch.args)?;
    }
    writeln!(out, "  startup_message: {}", launch.startup_message)?;
    writeln!(out, "  on_failure: {}", launch.on_failure)?;
    writeln!(out, "  mode: {}", launch.mode)?;

    debug!("dry-run complete (no execution)");
    Ok(())
}
