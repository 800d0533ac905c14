//! The finished level handed to renderers and movement layers.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Pos, TileKind};

use super::grid::Grid;

/// One generated grid with its start and goal. Never mutated after generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    grid: Grid,
    start: Pos,
    goal: Pos,
    depth: u32,
}

impl Level {
    pub(crate) fn new(grid: Grid, start: Pos, goal: Pos, depth: u32) -> Self {
        Self { grid, start, goal, depth }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// 1 for the first level of a run, +1 per goal reached.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        pos == self.goal
    }

    /// In-bounds floor destination check for a single move.
    pub fn is_valid_move(&self, position: Pos, delta: Pos) -> bool {
        position.offset(delta).is_some_and(|destination| {
            self.grid.in_bounds(destination) && self.grid.tile_at(destination) == TileKind::Floor
        })
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.grid.tiles().len() + 28);
        bytes.extend((self.grid.width() as u32).to_le_bytes());
        bytes.extend((self.grid.height() as u32).to_le_bytes());
        for tile in self.grid.tiles() {
            bytes.push(match tile {
                TileKind::Floor => 0,
                TileKind::Wall => 1,
            });
        }
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.goal.y.to_le_bytes());
        bytes.extend(self.goal.x.to_le_bytes());
        bytes.extend(self.depth.to_le_bytes());
        bytes
    }

    /// Stable hash of `canonical_bytes`, for comparing runs.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// Grid glyphs with `S` for start, `G` for goal and `*` where both sit.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.grid.width() + 1) * self.grid.height());
        for pos in self.grid.positions() {
            let glyph = match (pos == self.start, pos == self.goal) {
                (true, true) => '*',
                (true, false) => 'S',
                (false, true) => 'G',
                (false, false) => self.grid.tile_at(pos).glyph(),
            };
            out.push(glyph);
            if pos.x as usize + 1 == self.grid.width() {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Level {
        let grid = Grid::parse(&["#..#", "#.##", "####"]).expect("valid fixture");
        Level::new(grid, Pos::new(1, 0), Pos::new(1, 1), 3)
    }

    #[test]
    fn move_validation_accepts_only_in_bounds_floor() {
        let level = fixture();
        let start = level.start();
        assert!(level.is_valid_move(start, Pos::new(1, 0)), "east is floor");
        assert!(level.is_valid_move(start, Pos::new(0, 1)), "south is floor");
        assert!(!level.is_valid_move(start, Pos::new(-1, 0)), "west is wall");
        assert!(!level.is_valid_move(start, Pos::new(0, -1)), "north leaves the grid");
        assert!(!level.is_valid_move(Pos::new(2, 0), Pos::new(2, 0)), "east edge overshoot");
        assert!(!level.is_valid_move(Pos::new(i32::MAX, 0), Pos::new(1, 0)));
    }

    #[test]
    fn ascii_marks_start_and_goal() {
        assert_eq!(fixture().render_ascii(), "#S.#\n#G##\n####\n");
        let grid = Grid::parse(&["..", ".."]).expect("valid fixture");
        let shared = Level::new(grid, Pos::new(0, 0), Pos::new(0, 0), 1);
        assert_eq!(shared.render_ascii(), "*.\n..\n");
    }

    #[test]
    fn fingerprint_tracks_depth_and_points() {
        let level = fixture();
        let deeper = Level::new(level.grid().clone(), level.start(), level.goal(), 4);
        let swapped = Level::new(level.grid().clone(), level.goal(), level.start(), 3);
        assert_eq!(level.fingerprint(), fixture().fingerprint());
        assert_ne!(level.fingerprint(), deeper.fingerprint());
        assert_ne!(level.fingerprint(), swapped.fingerprint());
    }
}
