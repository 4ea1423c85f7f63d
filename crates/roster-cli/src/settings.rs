//! Runtime configuration for the `roster` binary.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Settings read from the TOML config file and `ROSTER_*` environment
/// variables. Environment values win.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
  /// Path of the SQLite database. `~/` expands to `$HOME`.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf { PathBuf::from("roster.db") }

impl RosterConfig {
  /// Layer the optional file at `path` under the process environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    Self::from_sources(
      config::File::from(path).required(false),
      config::Environment::with_prefix("ROSTER"),
      home.as_deref(),
    )
  }

  /// Resolve settings from an explicit file source and environment source.
  fn from_sources<F>(
    file: F,
    env: config::Environment,
    home: Option<&Path>,
  ) -> anyhow::Result<Self>
  where
    F: config::Source + Send + Sync + 'static,
  {
    let settings = config::Config::builder()
      .add_source(file)
      .add_source(env)
      .build()
      .context("failed to read config file")?;

    let mut cfg: Self = settings
      .try_deserialize()
      .context("failed to deserialise RosterConfig")?;
    cfg.store_path = expand_tilde(&cfg.store_path, home);
    Ok(cfg)
  }
}

/// Expand a leading `~` to `home`.
fn expand_tilde(path: &Path, home: Option<&Path>) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Some(home) = home
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use config::{Environment, File, FileFormat, Map};

  use super::*;

  fn env(vars: &[(&str, &str)]) -> Environment {
    let map: Map<String, String> = vars
      .iter()
      .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
      .collect();
    Environment::with_prefix("ROSTER").source(Some(map))
  }

  fn toml(raw: &str) -> File<config::FileSourceString, FileFormat> {
    File::from_str(raw, FileFormat::Toml)
  }

  #[test]
  fn empty_sources_fall_back_to_defaults() {
    let cfg = RosterConfig::from_sources(toml(""), env(&[]), None).unwrap();
    assert_eq!(cfg.store_path, Path::new("roster.db"));
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let cfg = RosterConfig::from_sources(
      File::from(Path::new("does-not-exist.toml")).required(false),
      env(&[]),
      None,
    )
    .unwrap();
    assert_eq!(cfg.store_path, Path::new("roster.db"));
  }

  #[test]
  fn file_store_path_is_used() {
    let cfg = RosterConfig::from_sources(
      toml(r#"store_path = "/data/club.db""#),
      env(&[]),
      None,
    )
    .unwrap();
    assert_eq!(cfg.store_path, Path::new("/data/club.db"));
  }

  #[test]
  fn environment_overrides_file() {
    let cfg = RosterConfig::from_sources(
      toml(r#"store_path = "/data/club.db""#),
      env(&[("ROSTER_STORE_PATH", "/srv/team.sqlite")]),
      None,
    )
    .unwrap();
    assert_eq!(cfg.store_path, Path::new("/srv/team.sqlite"));
  }

  #[test]
  fn leading_tilde_expands_to_home() {
    let cfg = RosterConfig::from_sources(
      toml(r#"store_path = "~/rosters/club.db""#),
      env(&[]),
      Some(Path::new("/home/ana")),
    )
    .unwrap();
    assert_eq!(cfg.store_path, Path::new("/home/ana/rosters/club.db"));
  }

  #[test]
  fn tilde_is_kept_without_home() {
    let p = Path::new("~/club.db");
    assert_eq!(expand_tilde(p, None), p);
  }

  #[test]
  fn paths_without_tilde_are_untouched() {
    let p = Path::new("/var/lib/roster.db");
    assert_eq!(expand_tilde(p, Some(Path::new("/home/ana"))), p);
  }
}
