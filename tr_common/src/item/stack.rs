use super::Type;
use std::num::NonZeroU8;

/// An item stack. This is an item type, an amount, and the damage on the item.
/// Only damageable items (see [`Type::is_damageable`]) ever have non-zero
/// damage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
  item:   Type,
  amount: NonZeroU8,
  damage: u32,
}

// This is required for `Stack::empty` to be `const`.
//
// SAFETY: The value must not be zero, so using `1` is safe.
const ONE: NonZeroU8 = unsafe { NonZeroU8::new_unchecked(1) };

impl Default for Stack {
  fn default() -> Self { Stack::empty() }
}

impl Stack {
  /// The empty stack. Useful for array initializers. This is the same as
  /// [`Stack::empty`].
  pub const EMPTY: Stack = Stack::empty();
  /// Creates an empty item stack. This has the type set to air, and the count
  /// set to 0.
  pub const fn empty() -> Self { Stack { item: Type::Air, amount: ONE, damage: 0 } }
  /// Creates an item stack containing a single item with the given type.
  pub fn new(item: Type) -> Self { Stack { item, amount: ONE, damage: 0 } }

  /// Sets the amount in self, and returns the modified self. If the stack is
  /// air, this will do nothing.
  pub fn with_amount(mut self, amount: u8) -> Self {
    self.set_amount(amount);
    self
  }
  /// Sets the amount in the item stack. If the stack is air, this will do
  /// nothing. Setting the amount to zero turns this stack into air.
  pub fn set_amount(&mut self, amount: u8) {
    match NonZeroU8::new(amount) {
      None => *self = Stack::empty(),
      Some(amount) if self.item != Type::Air => self.amount = amount,
      Some(_) => {}
    }
  }

  /// Returns the number of items in this item stack.
  pub fn amount(&self) -> u8 {
    if self.item == Type::Air {
      0
    } else {
      self.amount.get()
    }
  }
  /// Returns the item that is in this item stack.
  pub fn item(&self) -> Type { self.item }

  /// Returns true if this item stack is considered "empty". This is true
  /// whenever the type is Air, or the count is zero.
  pub fn is_empty(&self) -> bool { self.item == Type::Air }

  /// Returns the current damage on the item. A fresh tool has a damage of 0.
  pub fn damage_value(&self) -> u32 { self.damage }
  /// Sets the damage on this item, and returns the modified self. The damage
  /// is clamped to one below the max damage. Items that cannot be damaged are
  /// left unchanged.
  pub fn with_damage(mut self, damage: u32) -> Self {
    let max = self.item.max_damage();
    if max > 0 {
      self.damage = damage.min(max - 1);
    }
    self
  }

  /// Uses up `amount` durability on this item. If the item runs out of
  /// durability, one item is removed from the stack, and the damage is reset
  /// for the next item. Returns `true` if an item broke.
  ///
  /// Items that cannot be damaged are not changed, and this returns `false`.
  pub fn damage(&mut self, amount: u32) -> bool {
    let max = self.item.max_damage();
    if max == 0 || amount == 0 {
      return false;
    }
    self.damage = self.damage.saturating_add(amount);
    if self.damage >= max {
      let left = self.amount() - 1;
      self.set_amount(left);
      self.damage = 0;
      true
    } else {
      false
    }
  }
}
