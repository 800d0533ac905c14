//! Fixed-size wall/floor grid and tile-space helpers.

use std::fmt;

use crate::types::{Pos, TileKind};

/// Moore neighbourhood offsets, row-major, centre excluded.
pub(super) const MOORE_OFFSETS: [Pos; 8] = [
    Pos { y: -1, x: -1 },
    Pos { y: -1, x: 0 },
    Pos { y: -1, x: 1 },
    Pos { y: 0, x: -1 },
    Pos { y: 0, x: 1 },
    Pos { y: 1, x: -1 },
    Pos { y: 1, x: 0 },
    Pos { y: 1, x: 1 },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    /// Parses `#`/`.` rows; handy for fixtures and tooling.
    pub fn parse(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut tiles = Vec::with_capacity(width * height);
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for glyph in row.chars() {
                tiles.push(match glyph {
                    '#' => TileKind::Wall,
                    '.' => TileKind::Floor,
                    _ => return None,
                });
            }
        }
        Some(Self { width, height, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Tile at `pos`; anything outside the grid reads as wall.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn count(&self, tile: TileKind) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    /// All floor tiles in row-major order.
    pub fn floor_positions(&self) -> Vec<Pos> {
        self.positions().filter(|&pos| self.tile_at(pos) == TileKind::Floor).collect()
    }

    /// Every coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos { y, x }))
    }

    /// Moore neighbours that are wall, counting out-of-bounds neighbours as wall.
    pub(super) fn wall_neighbours(&self, pos: Pos) -> usize {
        MOORE_OFFSETS
            .iter()
            .filter(|&&delta| {
                pos.offset(delta).is_none_or(|neighbour| self.tile_at(neighbour) == TileKind::Wall)
            })
            .count()
    }

    pub(super) fn set(&mut self, pos: Pos, tile: TileKind) {
        if self.in_bounds(pos) {
            let index = self.index(pos);
            self.tiles[index] = tile;
        }
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1)) {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
