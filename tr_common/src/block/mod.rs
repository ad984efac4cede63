//! Block kinds and block types.
//!
//! A [`Kind`] is a general block, like an oak log. A [`Type`] is a single
//! state of that kind. For example, there is one kind for an oak log, but there
//! are three types for it, one for each value of its `axis` property.

use crate::version::BlockVersion;
use std::{collections::HashMap, fmt, str::FromStr};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

mod prop;

pub use prop::{Prop, PropKind, PropValue};


const STATE_PROPS_LEN: usize = 8;

/// The namespace that all vanilla identifiers live in.
pub const NAMESPACE: &str = "minecraft";

const AXIS: &[Prop] = &[Prop { name: "axis", kind: PropKind::Enum(&["x", "y", "z"]), default: 1 }];

/// A block kind. This only lists the blocks that plugins in this repository
/// need to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
  Air,
  Stone,
  Dirt,
  OakPlanks,

  OakLog,
  SpruceLog,
  BirchLog,
  JungleLog,
  AcaciaLog,
  DarkOakLog,
  CrimsonStem,
  WarpedStem,
  MangroveLog,
  CherryLog,
  BambooBlock,

  StrippedOakLog,
  StrippedSpruceLog,
  StrippedBirchLog,
  StrippedJungleLog,
  StrippedAcaciaLog,
  StrippedDarkOakLog,
  StrippedCrimsonStem,
  StrippedWarpedStem,
  StrippedMangroveLog,
  StrippedCherryLog,
  StrippedBambooBlock,

  OakWood,
  SpruceWood,
  BirchWood,
  JungleWood,
  AcaciaWood,
  DarkOakWood,
  CrimsonHyphae,
  WarpedHyphae,
  MangroveWood,
  CherryWood,

  StrippedOakWood,
  StrippedSpruceWood,
  StrippedBirchWood,
  StrippedJungleWood,
  StrippedAcaciaWood,
  StrippedDarkOakWood,
  StrippedCrimsonHyphae,
  StrippedWarpedHyphae,
  StrippedMangroveWood,
  StrippedCherryWood,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid block name: {0}")]
pub struct InvalidBlock(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropError {
  #[error("block {kind} has no property `{name}`")]
  Missing { kind: Kind, name: String },
  #[error("`{value}` is not a valid value for property `{name}` on {kind}")]
  Invalid { kind: Kind, name: String, value: String },
}

impl Kind {
  /// Returns the name of this block, without a namespace. This is something
  /// like `stripped_oak_log`.
  pub fn to_str(&self) -> &'static str { (*self).into() }

  /// Returns the full identifier of this block, like `minecraft:oak_log`.
  pub fn id(&self) -> String { format!("{NAMESPACE}:{}", self.to_str()) }

  /// Returns all the properties on this block.
  pub fn props(&self) -> &'static [Prop] {
    match self {
      Self::Air | Self::Stone | Self::Dirt | Self::OakPlanks => &[],
      _ => AXIS,
    }
  }

  /// Returns the first block version this kind exists in.
  pub fn since(&self) -> BlockVersion {
    match self {
      Self::CrimsonStem
      | Self::WarpedStem
      | Self::StrippedCrimsonStem
      | Self::StrippedWarpedStem
      | Self::CrimsonHyphae
      | Self::WarpedHyphae
      | Self::StrippedCrimsonHyphae
      | Self::StrippedWarpedHyphae => BlockVersion::V1_16,
      Self::MangroveLog
      | Self::StrippedMangroveLog
      | Self::MangroveWood
      | Self::StrippedMangroveWood => BlockVersion::V1_19,
      Self::CherryLog
      | Self::StrippedCherryLog
      | Self::CherryWood
      | Self::StrippedCherryWood
      | Self::BambooBlock
      | Self::StrippedBambooBlock => BlockVersion::V1_20,
      _ => BlockVersion::V1_14,
    }
  }

  /// Returns true if this block exists in the given version.
  pub fn exists_in(&self, ver: BlockVersion) -> bool {
    ver != BlockVersion::Invalid && self.since() <= ver
  }

  /// Returns the default type for this kind. For logs, this is the upright
  /// (`axis=y`) log.
  pub fn default_type(&self) -> Type {
    let mut state_props = [0; STATE_PROPS_LEN];
    for (i, p) in self.props().iter().enumerate() {
      state_props[i] = p.default;
    }
    Type { kind: *self, state_props }
  }
}

impl fmt::Display for Kind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.to_str()) }
}

impl FromStr for Kind {
  type Err = InvalidBlock;

  /// Parses a block identifier. Both `oak_log` and `minecraft:oak_log` are
  /// accepted. Any other namespace is invalid.
  fn from_str(s: &str) -> Result<Self, InvalidBlock> {
    let name = match s.split_once(':') {
      Some((NAMESPACE, name)) => name,
      Some(_) => return Err(InvalidBlock(s.into())),
      None => s,
    };
    Kind::iter().find(|k| k.to_str() == name).ok_or_else(|| InvalidBlock(s.into()))
  }
}

/// A single block type. This is different from a block kind, which is more
/// general. For example, there is one block kind for oak logs. However, there
/// are 3 types for an oak log, based on its state (axis, in this case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Type {
  kind:        Kind,
  state_props: [u32; STATE_PROPS_LEN],
}

impl Type {
  /// Returns the type for air.
  pub fn air() -> Type { Kind::Air.default_type() }
  /// Returns the block kind that this state comes from.
  pub fn kind(&self) -> Kind { self.kind }

  fn prop_index(&self, name: &str) -> Option<usize> {
    self.kind.props().iter().position(|p| p.name == name)
  }

  /// Returns the value of the given property, or `None` if this block doesn't
  /// have that property.
  pub fn prop(&self, name: &str) -> Option<PropValue<'static>> {
    let idx = self.prop_index(name)?;
    self.kind.props()[idx].from_id(self.state_props[idx])
  }
  /// Sets the given property. If this block doesn't have that property, or the
  /// value doesn't fit it, this returns an error, and nothing is changed.
  pub fn set_prop<'a>(
    &mut self,
    name: &str,
    val: impl Into<PropValue<'a>>,
  ) -> Result<(), PropError> {
    let idx = self
      .prop_index(name)
      .ok_or_else(|| PropError::Missing { kind: self.kind, name: name.into() })?;
    let val = val.into();
    match self.kind.props()[idx].id_of(&val) {
      Some(id) => {
        self.state_props[idx] = id;
        Ok(())
      }
      None => {
        Err(PropError::Invalid { kind: self.kind, name: name.into(), value: val.to_string() })
      }
    }
  }
  /// Same as [`set_prop`](Self::set_prop), but returns the modified self.
  pub fn with_prop<'a>(
    mut self,
    name: &str,
    val: impl Into<PropValue<'a>>,
  ) -> Result<Self, PropError> {
    self.set_prop(name, val)?;
    Ok(self)
  }

  /// Returns the property definition with the given name.
  pub fn prop_at(&self, name: &str) -> Option<&'static Prop> {
    self.kind.props().iter().find(|prop| prop.name == name)
  }
  /// Returns every property on this block, mapped to its current value.
  pub fn props(&self) -> HashMap<String, String> {
    self
      .kind
      .props()
      .iter()
      .enumerate()
      .map(|(i, prop)| (prop.name.into(), prop.kind.name_at(self.state_props[i])))
      .collect()
  }

  /// Returns the default type of `kind`, with all of our properties that
  /// `kind` also has copied over. Properties that `kind` doesn't have, or
  /// values that don't fit, are dropped. This is how a log keeps its axis
  /// when it is replaced by another log.
  #[must_use = "with_kind returns a new type"]
  pub fn with_kind(&self, kind: Kind) -> Type {
    let mut out = kind.default_type();
    for (i, prop) in self.kind.props().iter().enumerate() {
      if let Some(val) = prop.from_id(self.state_props[i]) {
        // Missing or incompatible properties keep the default.
        let _ = out.set_prop(prop.name, val);
      }
    }
    out
  }
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.kind().to_str())?;
    let mut all_props: Vec<_> = self.props().into_iter().collect();
    all_props.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    if !all_props.is_empty() {
      write!(f, "[")?;
      for (i, (key, val)) in all_props.iter().enumerate() {
        write!(f, "{key}={val}")?;
        if i != all_props.len() - 1 {
          write!(f, ",")?;
        }
      }
      write!(f, "]")?;
    }
    Ok(())
  }
}
