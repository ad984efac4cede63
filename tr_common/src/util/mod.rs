pub mod chat;

pub use chat::Chat;

use std::{error::Error, fmt, str::FromStr};

/// The hand a player used to click something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
  Main,
  Off,
}

impl Default for Hand {
  fn default() -> Self { Hand::Main }
}

impl Hand {
  pub fn id(&self) -> u8 {
    match self {
      Self::Main => 0,
      Self::Off => 1,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GameMode {
  Survival,
  Creative,
  Adventure,
  Spectator,
}

impl Default for GameMode {
  fn default() -> Self { GameMode::Survival }
}

impl fmt::Display for GameMode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Survival => "survival",
        Self::Creative => "creative",
        Self::Adventure => "adventure",
        Self::Spectator => "spectator",
      }
    )
  }
}

#[derive(Debug)]
pub struct InvalidGameMode(String);

impl fmt::Display for InvalidGameMode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "invalid game mode: {}", self.0)
  }
}

impl Error for InvalidGameMode {}

impl FromStr for GameMode {
  type Err = InvalidGameMode;

  fn from_str(s: &str) -> Result<Self, InvalidGameMode> {
    Ok(match s {
      "survival" => GameMode::Survival,
      "creative" => GameMode::Creative,
      "adventure" => GameMode::Adventure,
      "spectator" => GameMode::Spectator,
      _ => return Err(InvalidGameMode(s.into())),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn game_mode_names() {
    for gm in [GameMode::Survival, GameMode::Creative, GameMode::Adventure, GameMode::Spectator] {
      assert_eq!(gm.to_string().parse::<GameMode>().unwrap(), gm);
    }
    assert!("hardcore".parse::<GameMode>().is_err());
  }
}
