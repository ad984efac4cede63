use std::fmt;

/// A block position in a world.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

impl fmt::Display for Pos {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Pos({} {} {})", self.x, self.y, self.z)
  }
}

impl Pos {
  /// Creates a new block position.
  pub const fn new(x: i32, y: i32, z: i32) -> Self { Pos { x, y, z } }
  /// Returns the X value of the position.
  #[inline(always)]
  pub const fn x(&self) -> i32 { self.x }
  /// Returns the Y value of the position.
  #[inline(always)]
  pub const fn y(&self) -> i32 { self.y }
  /// Returns the Z value of the position.
  #[inline(always)]
  pub const fn z(&self) -> i32 { self.z }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accessors() {
    let p = Pos::new(10, 64, -3);
    assert_eq!((p.x(), p.y(), p.z()), (10, 64, -3));
    assert_eq!(Pos::default(), Pos::new(0, 0, 0));
  }

  #[test]
  fn display() {
    assert_eq!(Pos::new(1, -2, 3).to_string(), "Pos(1 -2 3)");
  }
}
