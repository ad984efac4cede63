use num_derive::{FromPrimitive, ToPrimitive};
use std::fmt;
use strum_macros::EnumString;

/// A list of all supported block versions. Any time the game gets new blocks
/// or items, there is a new version added to this enum. The plugin uses this
/// to decide which blocks exist on the host, so it never refers to a block the
/// host doesn't know about.
#[non_exhaustive]
#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString,
)]
pub enum BlockVersion {
  V1_14,
  V1_15,
  V1_16,
  V1_17,
  V1_18,
  V1_19,
  V1_20,
  Invalid,
}

impl BlockVersion {
  /// Returns the latest version.
  pub const fn latest() -> Self { Self::V1_20 }

  /// Converts the given string to a block version. This string should be in
  /// the same format as the enums. That is, `V1_16` would get
  /// `BlockVersion::V1_16`. This will return [`Self::Invalid`] if the string
  /// could not be parsed.
  pub fn parse_str(s: &str) -> Self {
    match s.parse() {
      Ok(v) => v,
      Err(_) => Self::Invalid,
    }
  }

  /// Returns the block version from the given index. 0 -> 1.14, 1 -> 1.15,
  /// etc.
  pub fn from_index(v: u32) -> Self {
    match num_traits::FromPrimitive::from_u32(v) {
      Some(v) => v,
      None => Self::Invalid,
    }
  }

  /// Returns the given index of this block version. 1.14 -> 0, 1.15 -> 1, etc.
  pub fn to_index(self) -> u32 { num_traits::ToPrimitive::to_u32(&self).unwrap_or(0) }

  /// The nether update added crimson and warped stems, and netherite tools.
  pub fn has_nether_wood(&self) -> bool { *self >= Self::V1_16 && *self != Self::Invalid }
}

impl fmt::Display for BlockVersion {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Invalid => write!(f, "invalid"),
      _ => write!(f, "1.{}", self.to_index() + 14),
    }
  }
}
