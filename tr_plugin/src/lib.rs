//! TreeRecovery puts the bark back on stripped logs. Right clicking a stripped
//! log or wood with an allowed axe turns it back into the natural block, and
//! uses up one point of durability on the axe.
//!
//! The server creates a [`TreeRecovery`] when it loads the plugin, calls
//! [`on_server_starting`](TreeRecovery::on_server_starting) once the world is
//! ready, registers the commands with
//! [`register_commands`](TreeRecovery::register_commands), and forwards every
//! block interaction to [`interact`](TreeRecovery::interact).

#[macro_use]
extern crate log;

pub mod command;
mod config;
mod defaults;
pub mod host;
mod interact;
mod table;

pub use config::{config_path, ConfigError, CONFIG_DIR, CONFIG_FILE};
pub use defaults::default_config;
pub use table::RecoveryTable;

use host::Server;
use parking_lot::RwLock;
use std::{
  path::{Path, PathBuf},
  sync::Arc,
};
use tr_common::version::BlockVersion;

/// The version reported by `/treerecovery version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct TreeRecovery {
  run_dir: PathBuf,
  version: BlockVersion,
  table:   RwLock<Arc<RecoveryTable>>,
}

impl TreeRecovery {
  /// Creates the plugin. Until [`on_server_starting`](Self::on_server_starting)
  /// is called, the built in table is used.
  pub fn new(server: &dyn Server) -> Self {
    info!("TreeRecovery initializing");
    let version = server.block_version();
    TreeRecovery {
      run_dir: server.run_dir().to_path_buf(),
      version,
      table: RwLock::new(Arc::new(RecoveryTable::defaults(version))),
    }
  }

  /// Writes the default config if needed, and then loads the config.
  pub fn on_server_starting(&self) { self.reload(); }

  /// Loads the config from disk again. If the config file has been removed, a
  /// new default config is written first. Returns the new table.
  pub fn reload(&self) -> Arc<RecoveryTable> {
    if let Err(e) = config::generate(&self.run_dir, self.version) {
      error!("{e}");
    }
    let table = Arc::new(config::load(&self.run_dir, self.version));
    *self.table.write() = table.clone();
    table
  }

  /// Returns the current table. This is a snapshot, so a reload that happens
  /// while this is held will not change it.
  pub fn table(&self) -> Arc<RecoveryTable> { self.table.read().clone() }

  pub fn run_dir(&self) -> &Path { &self.run_dir }
  pub fn block_version(&self) -> BlockVersion { self.version }
  pub fn config_path(&self) -> PathBuf { config::config_path(&self.run_dir) }
}
