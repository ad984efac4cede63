//! Chat messages sent to players and to the console.
//!
//! A chat message is a list of [`Section`]s. Each of these sections has a text
//! component, and a few styling options. To add a section to a chat message,
//! use [`Chat::add`]. This will add a section with the given text, and no
//! styling options.
//!
//! # Example
//!
//! ```rust
//! use tr_common::util::{chat::Color, Chat};
//!
//! let mut msg = Chat::new("Hello! ");
//! msg.add("I am red.").color(Color::Red);
//!
//! assert_eq!(msg.to_plain(), "Hello! I am red.");
//! assert_eq!(msg.to_codes(), "Hello! §cI am red.§r");
//! ```

/// This is a chat message. It has a list of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
  /// Can never be empty, as it causes too many edge cases.
  sections: Vec<Section>,
}

impl Default for Chat {
  fn default() -> Self { Chat::empty() }
}

/// The character used in the old chat codes formatting.
pub const CODE_SEP: char = '§';

impl Chat {
  /// Creates a new Chat message. This will contain a single section, with the
  /// given text set. No formatting will be applied.
  pub fn new<M: Into<String>>(msg: M) -> Self {
    Chat { sections: vec![Section { text: msg.into(), ..Default::default() }] }
  }
  /// Creates a new Chat message, with 1 empty section.
  pub fn empty() -> Self { Chat::new("") }

  /// Adds a new chat section, with the given string. The returned reference is
  /// a reference into self, so it must be dropped before adding another
  /// section.
  pub fn add<M: Into<String>>(&mut self, msg: M) -> &mut Section {
    self.sections.push(Section { text: msg.into(), ..Default::default() });
    // We just pushed, so this can never be empty.
    let idx = self.sections.len() - 1;
    &mut self.sections[idx]
  }

  /// Generates a string for this chat message in plain text (no formatting).
  pub fn to_plain(&self) -> String {
    let mut out = String::new();
    for s in &self.sections {
      out.push_str(&s.text);
    }
    out
  }

  /// Generates a color-coded string for this message. This is what gets
  /// printed for hosts that don't understand sections.
  pub fn to_codes(&self) -> String {
    let mut out = String::new();
    for s in &self.sections {
      s.to_codes(&mut out);
    }
    out
  }

  pub fn sections_len(&self) -> usize { self.sections.len() }
  pub fn get_section(&self, idx: usize) -> Option<&Section> { self.sections.get(idx) }
}

impl From<&str> for Chat {
  fn from(msg: &str) -> Chat { Chat::new(msg) }
}
impl From<String> for Chat {
  fn from(msg: String) -> Chat { Chat::new(msg) }
}

/// A single piece of text in a chat message, with its formatting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Section {
  text:   String,
  bold:  Option<bool>,
  color: Option<Color>,
}

impl Section {
  pub fn text(&self) -> &str { &self.text }
  pub fn get_color(&self) -> Option<Color> { self.color }

  /// Makes this section bold.
  pub fn bold(&mut self) -> &mut Self {
    self.bold = Some(true);
    self
  }
  /// Sets the color of this section.
  pub fn color(&mut self, c: Color) -> &mut Self {
    self.color = Some(c);
    self
  }

  fn to_codes(&self, out: &mut String) {
    let styled = self.color.is_some() || self.bold == Some(true);
    if let Some(c) = self.color {
      out.push(CODE_SEP);
      out.push(c.code());
    }
    if self.bold == Some(true) {
      out.push_str("§l");
    }
    out.push_str(&self.text);
    if styled {
      out.push_str("§r");
    }
  }
}

/// One of the 16 chat colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
  Black,
  DarkBlue,
  DarkGreen,
  DarkAqua,
  DarkRed,
  Purple,
  Gold,
  Gray,
  DarkGray,
  Blue,
  BrightGreen,
  Cyan,
  Red,
  Pink,
  Yellow,
  White,
}

impl Color {
  /// Returns the character after `§` that selects this color.
  pub const fn code(&self) -> char {
    match self {
      Self::Black => '0',
      Self::DarkBlue => '1',
      Self::DarkGreen => '2',
      Self::DarkAqua => '3',
      Self::DarkRed => '4',
      Self::Purple => '5',
      Self::Gold => '6',
      Self::Gray => '7',
      Self::DarkGray => '8',
      Self::Blue => '9',
      Self::BrightGreen => 'a',
      Self::Cyan => 'b',
      Self::Red => 'c',
      Self::Pink => 'd',
      Self::Yellow => 'e',
      Self::White => 'f',
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn plain_text() {
    let mut msg = Chat::new("Unknown command: ");
    msg.add("foo bar").color(Color::Red);
    assert_eq!(msg.sections_len(), 2);
    assert_eq!(msg.to_plain(), "Unknown command: foo bar");
  }

  #[test]
  fn codes() {
    let mut msg = Chat::empty();
    msg.add("no");
    msg.add("permission").color(Color::Red).bold();
    assert_eq!(msg.to_codes(), "no§c§lpermission§r");
    assert_eq!(Chat::new("plain").to_codes(), "plain");
  }

  #[test]
  fn sections() {
    let mut msg = Chat::new("a");
    msg.add("b").color(Color::Gray);
    assert_eq!(msg.get_section(1).unwrap().text(), "b");
    assert_eq!(msg.get_section(1).unwrap().get_color(), Some(Color::Gray));
    assert_eq!(msg.get_section(2), None);
  }
}
