use serde::{Deserialize, Serialize};

/// Tile coordinate, or an offset between two tiles.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    /// Destination of `delta` applied to `self`, `None` on integer overflow.
    pub fn offset(self, delta: Pos) -> Option<Pos> {
        Some(Pos { y: self.y.checked_add(delta.y)?, x: self.x.checked_add(delta.x)? })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Floor,
    Wall,
}

impl TileKind {
    pub fn glyph(self) -> char {
        match self {
            TileKind::Floor => '.',
            TileKind::Wall => '#',
        }
    }
}
