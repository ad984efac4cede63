use crate::{
  host::{Click, EventFlow, Player, World},
  TreeRecovery,
};
use tr_common::util::{GameMode, Hand};

impl TreeRecovery {
  /// Called whenever a player right clicks. If the player clicked a stripped
  /// block with an allowed axe in their main hand, the block is replaced with
  /// its natural block (keeping its axis), and the axe is damaged.
  ///
  /// Returns [`EventFlow::Handled`] if the block was restored, in which case
  /// the server should not do anything else with this click.
  pub fn interact(
    &self,
    world: &dyn World,
    player: &dyn Player,
    hand: Hand,
    click: Click,
  ) -> EventFlow {
    if hand != Hand::Main {
      return EventFlow::Continue;
    }
    let pos = match click {
      Click::Block(click) => click.pos,
      Click::Air => return EventFlow::Continue,
    };
    let ty = match world.get_block(pos) {
      Ok(ty) => ty,
      Err(e) => {
        debug!("ignoring click: {e}");
        return EventFlow::Continue;
      }
    };
    let table = self.table();
    let natural = match table.natural_of(ty.kind()) {
      Some(kind) => kind,
      None => return EventFlow::Continue,
    };
    let mut stack = player.stack_in_hand(hand);
    if stack.is_empty() || !table.is_allowed_axe(stack.item()) {
      return EventFlow::Continue;
    }

    let new_ty = ty.with_kind(natural);
    if let Err(e) = world.set_block(pos, new_ty) {
      warn!("could not restore {ty} for {}: {e}", player.username());
      return EventFlow::Continue;
    }
    debug!("{} restored {ty} to {new_ty} at {pos}", player.username());

    if player.game_mode() != GameMode::Creative {
      if stack.damage(1) {
        player.send_tool_break(hand);
      }
      player.set_stack_in_hand(hand, stack);
    }
    EventFlow::Handled
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    host::{
      mock::{MockPlayer, MockServer, MockWorld},
      Click, EventFlow, Player,
    },
    TreeRecovery,
  };
  use pretty_assertions::assert_eq;
  use tr_common::{
    block::{self, Kind},
    item::{self, Stack},
    math::Pos,
    util::{GameMode, Hand},
    version::BlockVersion,
  };

  const POS: Pos = Pos::new(3, 64, -7);

  fn plugin(version: BlockVersion) -> TreeRecovery {
    // Without `on_server_starting`, nothing is read from disk.
    TreeRecovery::new(&MockServer { run_dir: "/nonexistent".into(), version })
  }
  fn log(kind: Kind, axis: &str) -> block::Type {
    kind.default_type().with_prop("axis", axis).unwrap()
  }
  fn click() -> Click { Click::block(POS) }

  #[test]
  fn restores_log() {
    let tr = plugin(BlockVersion::V1_16);
    let world = MockWorld::new().with_block(POS, log(Kind::StrippedOakLog, "x"));
    let player = MockPlayer::new("macmv").holding(Hand::Main, Stack::new(item::Type::IronAxe));

    assert_eq!(tr.interact(&world, &player, Hand::Main, click()), EventFlow::Handled);
    assert_eq!(world.block(POS), log(Kind::OakLog, "x"));
    let stack = player.stack_in_hand(Hand::Main);
    assert_eq!(stack.item(), item::Type::IronAxe);
    assert_eq!(stack.damage_value(), 1);
    assert!(player.tool_breaks.lock().is_empty());
  }

  #[test]
  fn restores_every_default_pair() {
    let tr = plugin(BlockVersion::latest());
    for (stripped, natural) in tr.table().blocks() {
      for axis in ["x", "y", "z"] {
        let world = MockWorld::new().with_block(POS, log(stripped, axis));
        let player =
          MockPlayer::new("player").holding(Hand::Main, Stack::new(item::Type::NetheriteAxe));
        assert_eq!(tr.interact(&world, &player, Hand::Main, click()), EventFlow::Handled);
        assert_eq!(world.block(POS), log(natural, axis));
      }
    }
  }

  #[test]
  fn tool_breaks() {
    let tr = plugin(BlockVersion::V1_14);
    let world = MockWorld::new().with_block(POS, log(Kind::StrippedBirchWood, "z"));
    let player = MockPlayer::new("player")
      .holding(Hand::Main, Stack::new(item::Type::GoldenAxe).with_damage(31));

    assert_eq!(tr.interact(&world, &player, Hand::Main, click()), EventFlow::Handled);
    assert_eq!(world.block(POS), log(Kind::BirchWood, "z"));
    assert!(player.stack_in_hand(Hand::Main).is_empty());
    assert_eq!(*player.tool_breaks.lock(), vec![Hand::Main]);
  }

  #[test]
  fn creative_does_not_damage() {
    let tr = plugin(BlockVersion::V1_14);
    let world = MockWorld::new().with_block(POS, log(Kind::StrippedSpruceLog, "y"));
    let axe = Stack::new(item::Type::WoodenAxe).with_damage(58);
    let player =
      MockPlayer::new("player").in_mode(GameMode::Creative).holding(Hand::Main, axe.clone());

    assert_eq!(tr.interact(&world, &player, Hand::Main, click()), EventFlow::Handled);
    assert_eq!(world.block(POS), log(Kind::SpruceLog, "y"));
    assert_eq!(player.stack_in_hand(Hand::Main), axe);
    assert!(player.tool_breaks.lock().is_empty());
  }

  #[test]
  fn ignores_off_hand() {
    let tr = plugin(BlockVersion::V1_14);
    let world = MockWorld::new().with_block(POS, log(Kind::StrippedOakLog, "y"));
    let player = MockPlayer::new("player").holding(Hand::Off, Stack::new(item::Type::IronAxe));

    assert_eq!(tr.interact(&world, &player, Hand::Off, click()), EventFlow::Continue);
    assert_eq!(world.block(POS), log(Kind::StrippedOakLog, "y"));
    assert_eq!(player.stack_in_hand(Hand::Off).damage_value(), 0);
  }

  #[test]
  fn ignores_air_clicks() {
    let tr = plugin(BlockVersion::V1_14);
    let world = MockWorld::new();
    let player = MockPlayer::new("player").holding(Hand::Main, Stack::new(item::Type::IronAxe));
    assert_eq!(tr.interact(&world, &player, Hand::Main, Click::Air), EventFlow::Continue);
  }

  #[test]
  fn ignores_other_items() {
    let tr = plugin(BlockVersion::V1_15);
    for stack in [
      Stack::empty(),
      Stack::new(item::Type::Stick),
      Stack::new(item::Type::DiamondPickaxe),
      // Not an allowed axe before 1.16.
      Stack::new(item::Type::NetheriteAxe),
    ] {
      let world = MockWorld::new().with_block(POS, log(Kind::StrippedAcaciaLog, "x"));
      let player = MockPlayer::new("player").holding(Hand::Main, stack.clone());
      assert_eq!(tr.interact(&world, &player, Hand::Main, click()), EventFlow::Continue);
      assert_eq!(world.block(POS), log(Kind::StrippedAcaciaLog, "x"));
      assert_eq!(player.stack_in_hand(Hand::Main), stack);
    }
  }

  #[test]
  fn ignores_other_blocks() {
    let tr = plugin(BlockVersion::V1_15);
    for ty in [
      Kind::Stone.default_type(),
      log(Kind::OakLog, "x"),
      // Not in the table before 1.16.
      log(Kind::StrippedCrimsonStem, "y"),
    ] {
      let world = MockWorld::new().with_block(POS, ty);
      let player = MockPlayer::new("player").holding(Hand::Main, Stack::new(item::Type::IronAxe));
      assert_eq!(tr.interact(&world, &player, Hand::Main, click()), EventFlow::Continue);
      assert_eq!(world.block(POS), ty);
      assert_eq!(player.stack_in_hand(Hand::Main).damage_value(), 0);
    }
  }

  #[test]
  fn listed_items_are_used_as_axes() {
    let dir = tempfile::tempdir().unwrap();
    let tr = TreeRecovery::new(&MockServer {
      run_dir: dir.path().to_path_buf(),
      version: BlockVersion::V1_16,
    });
    let path = tr.config_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "axes = [\"minecraft:shears\"]\n").unwrap();
    tr.on_server_starting();

    let world = MockWorld::new().with_block(POS, log(Kind::StrippedDarkOakLog, "z"));
    let player = MockPlayer::new("player").holding(Hand::Main, Stack::new(item::Type::Shears));
    assert_eq!(tr.interact(&world, &player, Hand::Main, click()), EventFlow::Handled);
    assert_eq!(world.block(POS), log(Kind::DarkOakLog, "z"));
    assert_eq!(player.stack_in_hand(Hand::Main).damage_value(), 1);

    // Axes that are left off the list do nothing.
    let world = MockWorld::new().with_block(POS, log(Kind::StrippedDarkOakLog, "z"));
    let player = MockPlayer::new("player").holding(Hand::Main, Stack::new(item::Type::IronAxe));
    assert_eq!(tr.interact(&world, &player, Hand::Main, click()), EventFlow::Continue);
    assert_eq!(world.block(POS), log(Kind::StrippedDarkOakLog, "z"));
    assert_eq!(player.stack_in_hand(Hand::Main), Stack::new(item::Type::IronAxe));
  }

  #[test]
  fn unloaded_block() {
    let tr = plugin(BlockVersion::V1_16);
    let world = MockWorld::new();
    let player = MockPlayer::new("player").holding(Hand::Main, Stack::new(item::Type::IronAxe));
    let click = Click::block(Pos::new(0, 1000, 0));
    assert_eq!(tr.interact(&world, &player, Hand::Main, click), EventFlow::Continue);
  }

  #[test]
  fn rejected_place_keeps_tool() {
    let tr = plugin(BlockVersion::V1_16);
    let world = MockWorld::new().with_block(POS, log(Kind::StrippedJungleLog, "x")).rejecting();
    let player = MockPlayer::new("player").holding(Hand::Main, Stack::new(item::Type::IronAxe));

    assert_eq!(tr.interact(&world, &player, Hand::Main, click()), EventFlow::Continue);
    assert_eq!(world.block(POS), log(Kind::StrippedJungleLog, "x"));
    assert_eq!(player.stack_in_hand(Hand::Main), Stack::new(item::Type::IronAxe));
  }
}
