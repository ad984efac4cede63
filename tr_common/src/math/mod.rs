mod pos;

pub use pos::Pos;
