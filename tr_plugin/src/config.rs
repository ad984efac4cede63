use crate::{defaults, table::RecoveryTable};
use std::{
  fs, io,
  path::{Path, PathBuf},
};
use thiserror::Error;
use tr_common::{config::Config, version::BlockVersion};

/// The directory, relative to the server's run directory, that the config is
/// stored in.
pub const CONFIG_DIR: &str = "TreeRecovery";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("could not create config directory `{}`: {source}", .path.display())]
  CreateDir { path: PathBuf, source: io::Error },
  #[error("could not write default config to `{}`: {source}", .path.display())]
  Write { path: PathBuf, source: io::Error },
}

/// Returns the path of the config file for a server running in `run_dir`.
pub fn config_path(run_dir: &Path) -> PathBuf { run_dir.join(CONFIG_DIR).join(CONFIG_FILE) }

/// Writes the default config, if there is no config file yet. Returns the path
/// that was written, or `None` if the file already existed.
pub fn generate(run_dir: &Path, ver: BlockVersion) -> Result<Option<PathBuf>, ConfigError> {
  let path = config_path(run_dir);
  if path.exists() {
    return Ok(None);
  }
  if let Some(dir) = path.parent() {
    fs::create_dir_all(dir)
      .map_err(|source| ConfigError::CreateDir { path: dir.to_path_buf(), source })?;
  }
  fs::write(&path, defaults::default_config(ver))
    .map_err(|source| ConfigError::Write { path: path.clone(), source })?;
  info!("Generated default config at {}", path.display());
  Ok(Some(path))
}

/// Loads the recovery table from the config file. If the file is missing, or
/// cannot be used, this falls back to the built in table.
pub fn load(run_dir: &Path, ver: BlockVersion) -> RecoveryTable {
  info!("Loading configuration...");
  let path = config_path(run_dir);
  if !path.exists() {
    warn!("Config file not found, using defaults.");
    return RecoveryTable::defaults(ver);
  }
  let config = Config::new(&path, &defaults::default_config(ver));
  RecoveryTable::from_config(&config, ver)
}
