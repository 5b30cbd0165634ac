//! `resume-config` — inspect and export the front-end configuration.
//!
//! The binary is the single entry point that selects an environment, installs
//! the process-wide store once, and then answers one query against it.
//!
//! # Usage
//!
//! ```text
//! resume-config [--env <ENV>] <COMMAND>
//!
//! Commands:
//!   show   [--format json|toml|script]  Print the whole record
//!   get    <PATH>                       Print the value at a dotted path
//!   icon   <FILE_NAME>                  Print the glyph for a file name
//!   check                               Verify the record and print a summary
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable     | Default       | Description                                  |
//! |--------------|---------------|----------------------------------------------|
//! | `RESUME_ENV` | `development` | Environment selector (anything else is prod) |
//! | `RUST_LOG`   | see below     | `tracing` filter                             |
//!
//! When `RUST_LOG` is unset the log level follows the active record's
//! `CONSOLE_LOG` flag: `debug` when it is set, `warn` otherwise.  Logs go to
//! stderr so exports on stdout stay clean.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use resume_config::export::{render, ExportFormat};
use resume_config::store::{install, ConfigStore};
use resume_config::Environment;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and export the AI resume manager front-end configuration.
#[derive(Debug, Parser)]
#[command(name = "resume-config", version)]
struct Cli {
    /// Environment selector.  `development`/`dev` select the DEV overlay;
    /// every other value selects PROD.
    #[arg(long, default_value = "development", env = "RESUME_ENV")]
    env: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the whole record.
    Show {
        /// Output format: json, toml or script.
        #[arg(long, short, default_value = "json")]
        format: String,
    },

    /// Print the value at a dotted path, e.g. UPLOAD.MAX_FILE_SIZE.
    Get { path: String },

    /// Print the glyph shown for a file name.
    Icon { file_name: String },

    /// Verify the record and print a summary.
    Check,
}

impl Cli {
    fn environment(&self) -> Environment {
        Environment::from_selector(&self.env)
    }
}

// ── Command execution ─────────────────────────────────────────────────────────

/// Runs `command` against `store` and returns the text to print.
///
/// # Errors
///
/// Fails for an unknown export format, an unknown path, or a record that
/// does not pass `check`.
fn execute(command: &Command, store: &ConfigStore) -> anyhow::Result<String> {
    match command {
        Command::Show { format } => {
            let format: ExportFormat = format.parse()?;
            render(store.record(), format)
                .with_context(|| format!("failed to render configuration as {format}"))
        }
        Command::Get { path } => {
            let value = store.lookup(path)?;
            display_value(value)
        }
        Command::Icon { file_name } => Ok(store
            .record()
            .file_icons
            .icon_for_file(file_name)
            .to_string()),
        Command::Check => {
            let problems = store.record().problems();
            if !problems.is_empty() {
                bail!("configuration has problems:\n  {}", problems.join("\n  "));
            }
            let record = store.record();
            Ok(format!(
                "environment={} leaf_paths={} pages={} file_icons={} shortcuts={} debug={}",
                store.environment(),
                store.leaf_paths().len(),
                record.pages.len(),
                record.file_icons.len(),
                record.shortcuts.len(),
                record.active.debug,
            ))
        }
    }
}

/// Strings print bare; everything else prints as pretty JSON.
fn display_value(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env = cli.environment();

    // The store is built before logging so the CONSOLE_LOG flag can pick the
    // default level.
    let store = install(env).context("failed to install configuration store")?;

    let default_level = if store.record().active.console_log {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!(environment = %env, selector = %cli.env, "configuration loaded");

    let output = execute(&cli.command, store)?;
    println!("{output}");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
