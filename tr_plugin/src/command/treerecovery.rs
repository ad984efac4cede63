use super::{Command, CommandTree};
use crate::{
  host::{CommandSender, OP_LEVEL},
  TreeRecovery, VERSION,
};
use std::sync::Arc;
use tr_common::util::{chat::Color, Chat};

pub fn init(plugin: &Arc<TreeRecovery>, commands: &CommandTree) {
  let mut c = Command::new("treerecovery");
  c.add_lit("reload");
  c.add_lit("version");
  let plugin = plugin.clone();
  commands.add(c, move |sender, args| match args.first() {
    Some(&"reload") => reload(&plugin, sender),
    Some(&"version") => version(sender),
    _ => unreachable!(),
  });
}

fn reload(plugin: &TreeRecovery, sender: &mut dyn CommandSender) {
  if sender.permission_level() < OP_LEVEL {
    let mut msg = Chat::empty();
    msg.add("You do not have permission to use this command.").color(Color::Red);
    sender.send_error(msg);
    return;
  }
  let table = plugin.reload();
  info!("{} reloaded the TreeRecovery config", sender.name());
  let mut msg = Chat::new("TreeRecovery configuration reloaded.");
  let axes = count(table.axes_len(), "axe", "axes");
  let blocks = count(table.blocks_len(), "block", "blocks");
  msg.add(format!(" ({axes}, {blocks})")).color(Color::Gray);
  sender.send_message(msg);
}

fn count(n: usize, one: &str, many: &str) -> String {
  if n == 1 {
    format!("1 {one}")
  } else {
    format!("{n} {many}")
  }
}

fn version(sender: &mut dyn CommandSender) {
  sender.send_message(Chat::new(format!("TreeRecovery version {VERSION}")));
}
