use std::fmt;

/// A single block property, such as the `axis` of a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prop {
  pub(super) name:    &'static str,
  pub(super) kind:    PropKind,
  /// The index of the default value.
  pub(super) default: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropKind {
  Bool,
  Enum(&'static [&'static str]),
  Int { min: u32, max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropValue<'a> {
  Bool(bool),
  Enum(&'a str),
  Int(u32),
}

impl PropKind {
  pub fn name_at(&self, id: u32) -> String {
    match self {
      Self::Bool => {
        if id == 0 {
          "true".into()
        } else {
          "false".into()
        }
      }
      Self::Enum(names) => names.get(id as usize).copied().unwrap_or("").into(),
      Self::Int { min, .. } => (min + id).to_string(),
    }
  }
}

impl PropValue<'_> {
  /// Returns the index of this value within the given property kind. If this
  /// value doesn't fit the kind, this returns `None`.
  pub fn id(&self, kind: &PropKind) -> Option<u32> {
    match (self, kind) {
      (Self::Bool(v), PropKind::Bool) => Some(if *v { 0 } else { 1 }),
      (Self::Enum(v), PropKind::Enum(variants)) => {
        variants.iter().position(|val| val == v).map(|i| i as u32)
      }
      (Self::Int(v), PropKind::Int { min, max }) if v >= min && v <= max => Some(v - min),
      _ => None,
    }
  }
  pub fn is(&self, kind: &PropKind) -> bool { self.id(kind).is_some() }
}

impl fmt::Display for PropValue<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Bool(v) => write!(f, "{v}"),
      Self::Enum(v) => write!(f, "{v}"),
      Self::Int(v) => write!(f, "{v}"),
    }
  }
}

impl From<bool> for PropValue<'_> {
  fn from(v: bool) -> Self { PropValue::Bool(v) }
}
impl From<u32> for PropValue<'_> {
  fn from(v: u32) -> Self { PropValue::Int(v) }
}
impl<'a> From<&'a str> for PropValue<'a> {
  fn from(v: &'a str) -> Self { PropValue::Enum(v) }
}

impl PartialEq<bool> for PropValue<'_> {
  fn eq(&self, other: &bool) -> bool { matches!(self, PropValue::Bool(v) if v == other) }
}
impl PartialEq<u32> for PropValue<'_> {
  fn eq(&self, other: &u32) -> bool { matches!(self, PropValue::Int(v) if v == other) }
}
impl PartialEq<&str> for PropValue<'_> {
  fn eq(&self, other: &&str) -> bool { matches!(self, PropValue::Enum(v) if v == other) }
}

impl Prop {
  pub fn name(&self) -> &'static str { self.name }
  pub fn kind(&self) -> &PropKind { &self.kind }

  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> u32 {
    match self.kind {
      PropKind::Bool => 2,
      PropKind::Enum(v) => v.len() as u32,
      PropKind::Int { min, max } => max - min + 1,
    }
  }

  /// Returns the value at the given index. Returns `None` if the index is out
  /// of bounds.
  pub fn from_id(&self, id: u32) -> Option<PropValue<'static>> {
    if id >= self.len() {
      return None;
    }
    Some(match self.kind {
      PropKind::Bool => PropValue::Bool(id == 0),
      PropKind::Enum(v) => PropValue::Enum(v[id as usize]),
      PropKind::Int { min, .. } => PropValue::Int(id + min),
    })
  }

  pub fn id_of(&self, val: &PropValue) -> Option<u32> { val.id(&self.kind) }
}
