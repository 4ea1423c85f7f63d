//! `roster` — command-line front end for the player roster.
//!
//! Reads `roster.toml` (or the path given with `--config`), opens the SQLite
//! store, applies one command to the in-memory model and writes the roster
//! back if it changed.
//!
//! # Usage
//!
//! ```text
//! roster player add --id 1 --name Ana --surname Smith --birthday 1990-01-01
//! roster group add 10
//! roster member add 1 10
//! roster players --group 10
//! ```

mod commands;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use commands::{Command, Output};
use roster_core::{RosterModel, store::RosterStore};
use roster_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::RosterConfig;

#[derive(Parser)]
#[command(name = "roster", version, about = "Player and group roster")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "roster.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so JSON output on stdout stays clean.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let cfg = RosterConfig::load(&cli.config)?;

  let store = SqliteStore::open(&cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.store_path))?;

  let snapshot = store.load().await.context("failed to load roster")?;
  let mut model = RosterModel::from_snapshot(snapshot)
    .context("stored roster violates membership invariants")?;

  let outcome = commands::apply(&mut model, cli.command)?;

  if outcome.changed {
    store
      .save(&model.snapshot())
      .await
      .context("failed to save roster")?;
    tracing::info!(
      memberships = model.membership_count(),
      "roster saved to {:?}",
      cfg.store_path
    );
  }

  match outcome.output {
    Output::Text(text) => println!("{text}"),
    Output::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
  }

  Ok(())
}
