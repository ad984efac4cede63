//! Item types and item stacks.

use crate::{block::NAMESPACE, version::BlockVersion};
use std::{fmt, str::FromStr};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

mod stack;

pub use stack::Stack;

/// An item type. This only lists the items that plugins in this repository
/// need to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Type {
  Air,
  Stick,
  Apple,
  OakLog,
  Shears,

  WoodenAxe,
  StoneAxe,
  IronAxe,
  GoldenAxe,
  DiamondAxe,
  NetheriteAxe,

  WoodenPickaxe,
  StonePickaxe,
  IronPickaxe,
  GoldenPickaxe,
  DiamondPickaxe,
  NetheritePickaxe,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid item name: {0}")]
pub struct InvalidItem(pub String);

impl Type {
  /// Returns the name of this item, without a namespace.
  pub fn to_str(&self) -> &'static str { (*self).into() }

  /// Returns the full identifier of this item, like `minecraft:iron_axe`.
  pub fn id(&self) -> String { format!("{NAMESPACE}:{}", self.to_str()) }

  /// Returns the amount of uses this item has before it breaks. This is zero
  /// for items that cannot be damaged.
  pub fn max_damage(&self) -> u32 {
    match self {
      Self::WoodenAxe | Self::WoodenPickaxe => 59,
      Self::StoneAxe | Self::StonePickaxe => 131,
      Self::IronAxe | Self::IronPickaxe => 250,
      Self::GoldenAxe | Self::GoldenPickaxe => 32,
      Self::DiamondAxe | Self::DiamondPickaxe => 1561,
      Self::NetheriteAxe | Self::NetheritePickaxe => 2031,
      Self::Shears => 238,
      _ => 0,
    }
  }
  /// Returns true if this item loses durability when used.
  pub fn is_damageable(&self) -> bool { self.max_damage() > 0 }

  pub fn is_axe(&self) -> bool {
    matches!(
      self,
      Self::WoodenAxe
        | Self::StoneAxe
        | Self::IronAxe
        | Self::GoldenAxe
        | Self::DiamondAxe
        | Self::NetheriteAxe
    )
  }

  /// Returns the first block version this item exists in.
  pub fn since(&self) -> BlockVersion {
    match self {
      Self::NetheriteAxe | Self::NetheritePickaxe => BlockVersion::V1_16,
      _ => BlockVersion::V1_14,
    }
  }

  /// Returns true if this item exists in the given version.
  pub fn exists_in(&self, ver: BlockVersion) -> bool {
    ver != BlockVersion::Invalid && self.since() <= ver
  }
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.to_str()) }
}

impl FromStr for Type {
  type Err = InvalidItem;

  /// Parses an item identifier, with or without the `minecraft:` namespace.
  fn from_str(s: &str) -> Result<Self, InvalidItem> {
    let name = match s.split_once(':') {
      Some((NAMESPACE, name)) => name,
      Some(_) => return Err(InvalidItem(s.into())),
      None => s,
    };
    Type::iter().find(|t| t.to_str() == name).ok_or_else(|| InvalidItem(s.into()))
  }
}
