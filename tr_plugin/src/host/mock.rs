//! In-memory implementations of the host traits, for tests.

use super::{CommandSender, Player, Server, World, WorldError, OP_LEVEL};
use parking_lot::Mutex;
use std::{
  collections::HashMap,
  path::{Path, PathBuf},
};
use tr_common::{
  block,
  item::Stack,
  math::Pos,
  util::{Chat, GameMode, Hand},
  version::BlockVersion,
};

pub struct MockServer {
  pub run_dir: PathBuf,
  pub version: BlockVersion,
}

impl Server for MockServer {
  fn run_dir(&self) -> &Path { &self.run_dir }
  fn block_version(&self) -> BlockVersion { self.version }
}

#[derive(Default)]
pub struct MockWorld {
  blocks: Mutex<HashMap<Pos, block::Type>>,
  reject: bool,
}

impl MockWorld {
  pub fn new() -> Self { MockWorld::default() }
  pub fn with_block(self, pos: Pos, ty: block::Type) -> Self {
    self.blocks.lock().insert(pos, ty);
    self
  }
  /// Makes every `set_block` call fail.
  pub fn rejecting(mut self) -> Self {
    self.reject = true;
    self
  }
  pub fn block(&self, pos: Pos) -> block::Type {
    self.blocks.lock().get(&pos).copied().unwrap_or_else(block::Type::air)
  }
}

impl World for MockWorld {
  fn get_block(&self, pos: Pos) -> Result<block::Type, WorldError> {
    // Everything above the build limit is unloaded.
    if pos.y() > 320 {
      return Err(WorldError::Unloaded(pos));
    }
    Ok(self.block(pos))
  }
  fn set_block(&self, pos: Pos, ty: block::Type) -> Result<(), WorldError> {
    if self.reject {
      return Err(WorldError::Rejected { pos, reason: "protected region".into() });
    }
    self.blocks.lock().insert(pos, ty);
    Ok(())
  }
}

pub struct MockPlayer {
  pub name:        String,
  pub game_mode:   GameMode,
  pub level:       u8,
  hands:           Mutex<[Stack; 2]>,
  pub messages:    Mutex<Vec<Chat>>,
  pub tool_breaks: Mutex<Vec<Hand>>,
}

impl MockPlayer {
  pub fn new(name: &str) -> Self {
    MockPlayer {
      name:        name.into(),
      game_mode:   GameMode::Survival,
      level:       0,
      hands:       Mutex::new([Stack::empty(), Stack::empty()]),
      messages:    Mutex::new(vec![]),
      tool_breaks: Mutex::new(vec![]),
    }
  }
  pub fn op(mut self) -> Self {
    self.level = OP_LEVEL;
    self
  }
  pub fn holding(self, hand: Hand, stack: Stack) -> Self {
    self.set_stack_in_hand(hand, stack);
    self
  }
  pub fn in_mode(mut self, game_mode: GameMode) -> Self {
    self.game_mode = game_mode;
    self
  }
  pub fn plain_messages(&self) -> Vec<String> {
    self.messages.lock().iter().map(|m| m.to_plain()).collect()
  }
}

impl Player for MockPlayer {
  fn username(&self) -> String { self.name.clone() }
  fn game_mode(&self) -> GameMode { self.game_mode }
  fn permission_level(&self) -> u8 { self.level }
  fn stack_in_hand(&self, hand: Hand) -> Stack { self.hands.lock()[hand.id() as usize].clone() }
  fn set_stack_in_hand(&self, hand: Hand, stack: Stack) {
    self.hands.lock()[hand.id() as usize] = stack;
  }
  fn send_message(&self, msg: Chat) { self.messages.lock().push(msg); }
  fn send_tool_break(&self, hand: Hand) { self.tool_breaks.lock().push(hand); }
}

/// A command sender. This is the console if there is no player.
pub struct MockSender<'a> {
  pub player:   Option<&'a MockPlayer>,
  pub messages: Vec<Chat>,
  pub errors:   Vec<Chat>,
}

impl<'a> MockSender<'a> {
  pub fn console() -> Self { MockSender { player: None, messages: vec![], errors: vec![] } }
  pub fn player(player: &'a MockPlayer) -> Self {
    MockSender { player: Some(player), messages: vec![], errors: vec![] }
  }
  pub fn plain_messages(&self) -> Vec<String> {
    self.messages.iter().map(|m| m.to_plain()).collect()
  }
  pub fn plain_errors(&self) -> Vec<String> { self.errors.iter().map(|m| m.to_plain()).collect() }
}

impl CommandSender for MockSender<'_> {
  fn name(&self) -> String {
    match self.player {
      Some(p) => p.username(),
      None => "Server".into(),
    }
  }
  fn permission_level(&self) -> u8 {
    match self.player {
      Some(p) => p.permission_level(),
      None => OP_LEVEL,
    }
  }
  fn as_player(&self) -> Option<&dyn Player> { self.player.map(|p| p as &dyn Player) }
  fn send_message(&mut self, msg: Chat) { self.messages.push(msg); }
  fn send_error(&mut self, msg: Chat) { self.errors.push(msg); }
}
