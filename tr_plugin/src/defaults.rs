//! The built in recovery table. This is used on first run to write the config
//! file, and whenever the config file cannot be used.

use std::fmt::Write;
use tr_common::{
  block::Kind,
  item::{self, Type::*},
  version::BlockVersion,
};

const AXES: &[item::Type] = &[WoodenAxe, StoneAxe, IronAxe, GoldenAxe, DiamondAxe, NetheriteAxe];

const LOGS: &[(Kind, Kind)] = &[
  (Kind::StrippedOakLog, Kind::OakLog),
  (Kind::StrippedSpruceLog, Kind::SpruceLog),
  (Kind::StrippedBirchLog, Kind::BirchLog),
  (Kind::StrippedJungleLog, Kind::JungleLog),
  (Kind::StrippedAcaciaLog, Kind::AcaciaLog),
  (Kind::StrippedDarkOakLog, Kind::DarkOakLog),
  (Kind::StrippedWarpedStem, Kind::WarpedStem),
  (Kind::StrippedCrimsonStem, Kind::CrimsonStem),
];

const WOODS: &[(Kind, Kind)] = &[
  (Kind::StrippedOakWood, Kind::OakWood),
  (Kind::StrippedSpruceWood, Kind::SpruceWood),
  (Kind::StrippedBirchWood, Kind::BirchWood),
  (Kind::StrippedJungleWood, Kind::JungleWood),
  (Kind::StrippedAcaciaWood, Kind::AcaciaWood),
  (Kind::StrippedDarkOakWood, Kind::DarkOakWood),
  (Kind::StrippedWarpedHyphae, Kind::WarpedHyphae),
  (Kind::StrippedCrimsonHyphae, Kind::CrimsonHyphae),
];

/// The axes that can restore bark by default.
pub fn axes(ver: BlockVersion) -> impl Iterator<Item = item::Type> {
  AXES.iter().copied().filter(move |axe| axe.exists_in(ver))
}
/// Stripped logs and stems, and the block they turn back into.
pub fn logs(ver: BlockVersion) -> impl Iterator<Item = (Kind, Kind)> { pairs(LOGS, ver) }
/// Stripped woods and hyphae, and the block they turn back into.
pub fn woods(ver: BlockVersion) -> impl Iterator<Item = (Kind, Kind)> { pairs(WOODS, ver) }

fn pairs(list: &'static [(Kind, Kind)], ver: BlockVersion) -> impl Iterator<Item = (Kind, Kind)> {
  list
    .iter()
    .copied()
    .filter(move |(stripped, natural)| stripped.exists_in(ver) && natural.exists_in(ver))
}

/// Generates the config file that is written on first run.
pub fn default_config(ver: BlockVersion) -> String {
  let mut out = String::new();
  out.push_str("# TreeRecovery configuration.\n");
  out.push_str("#\n");
  out.push_str("# Right clicking one of the stripped blocks below while holding one of\n");
  out.push_str("# these axes turns it back into its natural block, and uses up one\n");
  out.push_str("# point of durability. Run `/treerecovery reload` after editing.\n");
  out.push('\n');
  out.push_str("# Axes that can restore bark.\n");
  out.push_str("axes = [\n");
  for axe in axes(ver) {
    // Writing to a string cannot fail.
    let _ = writeln!(out, "  \"{}\",", axe.id());
  }
  out.push_str("]\n");
  write_table(&mut out, "logs", "Stripped logs, and the log they turn back into.", logs(ver));
  write_table(&mut out, "woods", "Stripped woods, and the wood they turn back into.", woods(ver));
  out
}

fn write_table(
  out: &mut String,
  name: &str,
  comment: &str,
  entries: impl Iterator<Item = (Kind, Kind)>,
) {
  let _ = writeln!(out, "\n# {comment}");
  let _ = writeln!(out, "[blocks.{name}]");
  for (stripped, natural) in entries {
    let _ = writeln!(out, "\"{}\" = \"{}\"", stripped.id(), natural.id());
  }
}
