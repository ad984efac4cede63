//! Commands the plugin registers with the server. A [`Command`] declares the
//! literal words a command accepts, and a [`CommandTree`] maps command names to
//! their handlers.
//!
//! # Examples
//!
//! ```
//! # use tr_plugin::command::Command;
//! let mut c = Command::new("treerecovery");
//! c.add_lit("reload");
//! c.add_lit("version");
//! assert_eq!(c.usage(), "/treerecovery <reload|version>");
//! ```

mod treerecovery;

use crate::{host::CommandSender, TreeRecovery};
use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};
use tr_common::util::{chat::Color, Chat};

type Handler = Box<dyn Fn(&mut dyn CommandSender, &[&str]) + Send + Sync>;

/// All of the commands a plugin provides. The server should forward any
/// command it doesn't know about to [`execute`](Self::execute).
pub struct CommandTree {
  commands: Mutex<HashMap<String, (Command, Handler)>>,
}

impl Default for CommandTree {
  fn default() -> Self { CommandTree::new() }
}

impl CommandTree {
  /// Creates an empty command tree.
  pub fn new() -> CommandTree { CommandTree { commands: Mutex::new(HashMap::new()) } }
  /// Adds a new command to the tree. If there was already a command with the
  /// same name, it is replaced.
  pub fn add<F>(&self, c: Command, handler: F)
  where
    F: Fn(&mut dyn CommandSender, &[&str]) + Send + Sync + 'static,
  {
    self.commands.lock().insert(c.name().into(), (c, Box::new(handler)));
  }
  /// Returns true if there is a command with this name.
  pub fn contains(&self, name: &str) -> bool { self.commands.lock().contains_key(name) }
  /// Returns the names of every command, sorted.
  pub fn names(&self) -> Vec<String> {
    let mut names: Vec<_> = self.commands.lock().keys().cloned().collect();
    names.sort();
    names
  }

  /// Runs the given command text. A leading `/` is ignored. The handler is
  /// passed every word after the command name. If the text doesn't match any
  /// command, an error is sent to `sender`, and the handler is not called.
  pub fn execute(&self, sender: &mut dyn CommandSender, text: &str) {
    let text = text.strip_prefix('/').unwrap_or(text);
    let mut words = text.split_whitespace();
    let name = match words.next() {
      Some(v) => v,
      None => return,
    };
    let commands = self.commands.lock();
    let (command, handler) = match commands.get(name) {
      Some(v) => v,
      None => {
        let mut msg = Chat::empty();
        msg.add("Unknown command: ").color(Color::Red);
        msg.add(text);
        sender.send_error(msg);
        return;
      }
    };
    let args: Vec<&str> = words.collect();
    if let Err(node) = command.matches(&args) {
      let mut msg = Chat::empty();
      msg.add("Usage: ").color(Color::Red);
      msg.add(node).color(Color::Red);
      sender.send_error(msg);
      return;
    }
    debug!("{} ran `/{}`", sender.name(), text);
    handler(sender, &args);
  }
}

/// A single command, or a literal word within a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
  name:     String,
  children: Vec<Command>,
}

impl Command {
  /// Creates a new command, with no arguments.
  pub fn new<N: Into<String>>(name: N) -> Self { Command { name: name.into(), children: vec![] } }
  /// Adds a literal word that can follow this one. Returns the new node, so
  /// that nested words can be chained onto it.
  pub fn add_lit<N: Into<String>>(&mut self, name: N) -> &mut Command {
    self.children.push(Command::new(name));
    // We just pushed an element, so this is always `Some`.
    let idx = self.children.len() - 1;
    &mut self.children[idx]
  }
  pub fn name(&self) -> &str { &self.name }
  pub fn children(&self) -> &[Command] { &self.children }

  /// Returns the usage text for this command, like `/name <a|b>`.
  pub fn usage(&self) -> String { self.usage_at(self, &[]) }

  /// Checks that `args` is a full path of literals through this command. On
  /// failure, returns the usage text for the node where matching stopped.
  fn matches(&self, args: &[&str]) -> Result<(), String> {
    let mut node = self;
    for (i, arg) in args.iter().enumerate() {
      match node.children.iter().find(|c| c.name == *arg) {
        Some(child) => node = child,
        None => return Err(self.usage_at(node, &args[..i])),
      }
    }
    if node.children.is_empty() {
      Ok(())
    } else {
      Err(self.usage_at(node, args))
    }
  }

  /// The usage text for `node`, which is reached from this command through the
  /// words in `path`.
  fn usage_at(&self, node: &Command, path: &[&str]) -> String {
    let mut out = format!("/{}", self.name);
    for word in path {
      out.push(' ');
      out.push_str(word);
    }
    if !node.children.is_empty() {
      let names: Vec<&str> = node.children.iter().map(|c| c.name.as_str()).collect();
      out.push_str(&format!(" <{}>", names.join("|")));
    }
    out
  }
}

impl TreeRecovery {
  /// Adds the `/treerecovery` command to the given tree.
  pub fn register_commands(self: &Arc<Self>, commands: &CommandTree) {
    treerecovery::init(self, commands);
  }
}
