use core::fmt;
use serde::{Deserialize, Serialize};

/// A grid coordinate. Rows and columns are 1-indexed, so the top-left cell of a maze is
/// `(1, 1)` and the bottom-right one is `(rows, cols)`.
///
/// Cells order lexicographically by `(row, col)`, which the informed solver relies on as a
/// deterministic last-resort tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The cell one step away in the given direction. The result may lie outside the grid.
    pub fn step(&self, dir: Direction) -> Cell {
        let (dr, dc) = dir.offset();
        Cell::new(self.row + dr, self.col + dc)
    }

    /// Row and column deltas to another cell, as absolute values.
    pub fn abs_delta(&self, other: &Cell) -> (i32, i32) {
        ((self.row - other.row).abs(), (self.col - other.col).abs())
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal directions of a 4-connected grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    South,
    North,
    West,
}

impl Direction {
    /// Expansion order shared by every solver.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::North,
        Direction::West,
    ];

    /// `(row, col)` unit offset.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }

    /// Bit used for this direction in a passage mask.
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Direction::East => 1,
            Direction::South => 1 << 1,
            Direction::North => 1 << 2,
            Direction::West => 1 << 3,
        }
    }

    /// Single-letter label, as used in maze map files.
    pub const fn letter(self) -> char {
        match self {
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::North => 'N',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
