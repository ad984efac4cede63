use std::collections::{HashMap, HashSet};
use tr_common::{
  block::Kind,
  config::{Config, Table},
  item,
  version::BlockVersion,
};

use crate::defaults;

/// The table of allowed axes, and which stripped blocks turn back into which
/// natural blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryTable {
  axes:   HashSet<item::Type>,
  blocks: HashMap<Kind, Kind>,
}

impl RecoveryTable {
  /// Creates an empty table. Nothing can be restored with this table.
  pub fn new() -> Self { RecoveryTable::default() }

  /// Returns the built in table for the given block version.
  pub fn defaults(ver: BlockVersion) -> Self {
    let mut table = RecoveryTable::new();
    table.axes.extend(defaults::axes(ver));
    table.blocks.extend(defaults::logs(ver));
    table.blocks.extend(defaults::woods(ver));
    table
  }

  /// Reads the table from the given config. Any entry that cannot be used is
  /// logged and skipped.
  ///
  /// Block entries are read in the order they are written, `blocks.logs`
  /// first. If a stripped block is listed more than once, the last entry wins.
  pub fn from_config(config: &Config, ver: BlockVersion) -> Self {
    let mut table = RecoveryTable::new();
    for id in config.get::<_, Vec<String>>("axes") {
      match id.parse::<item::Type>() {
        Ok(ty) if ty.exists_in(ver) => {
          table.axes.insert(ty);
        }
        Ok(_) => warn!("item `{id}` does not exist in {ver}, skipping it"),
        Err(e) => warn!("{e}, skipping it"),
      }
    }
    for key in ["blocks.logs", "blocks.woods"] {
      for (stripped, natural) in config.get::<_, &Table>(key) {
        let natural = match natural.as_str() {
          Some(v) => v,
          None => {
            warn!("invalid entry in `{key}`: `{stripped}` should be a block name, skipping it");
            continue;
          }
        };
        match parse_pair(stripped, natural, ver) {
          Ok((stripped, natural)) => {
            if let Some(prev) = table.blocks.insert(stripped, natural) {
              if prev != natural {
                warn!("`{stripped}` is listed twice, it will turn into `{natural}`, not `{prev}`");
              }
            }
          }
          Err(e) => warn!("invalid entry in `{key}`: {e}, skipping it"),
        }
      }
    }
    table
  }

  pub fn add_axe(&mut self, axe: item::Type) { self.axes.insert(axe); }
  pub fn add_block(&mut self, stripped: Kind, natural: Kind) {
    self.blocks.insert(stripped, natural);
  }

  /// Returns true if the given item can restore bark.
  pub fn is_allowed_axe(&self, item: item::Type) -> bool { self.axes.contains(&item) }
  /// Returns the block that the given stripped block turns back into, if any.
  pub fn natural_of(&self, stripped: Kind) -> Option<Kind> { self.blocks.get(&stripped).copied() }

  /// All the allowed axes, in no particular order.
  pub fn axes(&self) -> impl Iterator<Item = item::Type> + '_ { self.axes.iter().copied() }
  /// All the block pairs, in no particular order.
  pub fn blocks(&self) -> impl Iterator<Item = (Kind, Kind)> + '_ {
    self.blocks.iter().map(|(k, v)| (*k, *v))
  }
  pub fn axes_len(&self) -> usize { self.axes.len() }
  pub fn blocks_len(&self) -> usize { self.blocks.len() }
}

fn parse_pair(stripped: &str, natural: &str, ver: BlockVersion) -> Result<(Kind, Kind), String> {
  let stripped_kind: Kind = stripped.parse().map_err(|e| format!("{e}"))?;
  let natural_kind: Kind = natural.parse().map_err(|e| format!("{e}"))?;
  for kind in [stripped_kind, natural_kind] {
    if !kind.exists_in(ver) {
      return Err(format!("block `{kind}` does not exist in {ver}"));
    }
  }
  if stripped_kind == natural_kind {
    return Err(format!("`{stripped}` would turn into itself"));
  }
  Ok((stripped_kind, natural_kind))
}
