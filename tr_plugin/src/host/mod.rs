//! Everything the plugin needs from the server it runs in. The server
//! implements these traits, and passes them into the plugin's hooks.

use std::path::Path;
use thiserror::Error;
use tr_common::{
  block,
  item::Stack,
  math::Pos,
  util::{Chat, GameMode, Hand},
  version::BlockVersion,
};

#[cfg(test)]
pub mod mock;

/// The permission level of server operators. This is the level needed to run
/// admin commands.
pub const OP_LEVEL: u8 = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
  #[error("the chunk containing {0} is not loaded")]
  Unloaded(Pos),
  #[error("cannot change block at {pos}: {reason}")]
  Rejected { pos: Pos, reason: String },
}

/// The server itself. Used when the plugin is created.
pub trait Server {
  /// The directory the server runs in. Plugin configs are stored relative to
  /// this.
  fn run_dir(&self) -> &Path;
  /// The block version of this server. This decides which blocks and items
  /// the plugin can use.
  fn block_version(&self) -> BlockVersion;
}

/// A world, where blocks can be read and changed.
pub trait World {
  fn get_block(&self, pos: Pos) -> Result<block::Type, WorldError>;
  fn set_block(&self, pos: Pos, ty: block::Type) -> Result<(), WorldError>;
}

/// A player on the server.
pub trait Player {
  fn username(&self) -> String;
  fn game_mode(&self) -> GameMode;
  /// The permission level of this player, from 0 to 4. See [`OP_LEVEL`].
  fn permission_level(&self) -> u8;

  /// Returns the item stack in the given hand.
  fn stack_in_hand(&self, hand: Hand) -> Stack;
  /// Replaces the item stack in the given hand.
  fn set_stack_in_hand(&self, hand: Hand, stack: Stack);

  fn send_message(&self, msg: Chat);
  /// Plays the item break animation and sound for the item in the given hand.
  fn send_tool_break(&self, hand: Hand);
}

/// Anyone who can send commands. This could be the server console, a player,
/// a command block, etc.
pub trait CommandSender {
  /// The name shown in logs, like a username, or `Server` for the console.
  fn name(&self) -> String;
  /// The permission level of this sender. The console should return
  /// [`OP_LEVEL`].
  fn permission_level(&self) -> u8;
  /// If this is a player, returns the player.
  fn as_player(&self) -> Option<&dyn Player> { None }

  /// Sends a message to this command sender.
  fn send_message(&mut self, msg: Chat);
  /// Sends an error to this command sender. By default, this is sent as a
  /// normal message.
  fn send_error(&mut self, msg: Chat) { self.send_message(msg) }
}

/// The result of an event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
  /// The event was handled. The server should not do anything else with it.
  Handled,
  /// The event was ignored. The server should keep going as normal.
  Continue,
}

/// What a player clicked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
  Air,
  Block(BlockClick),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockClick {
  /// The block that was clicked.
  pub pos: Pos,
}

impl Click {
  pub fn block(pos: Pos) -> Self { Click::Block(BlockClick { pos }) }
}
