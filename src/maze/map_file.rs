//! Maze maps stored as CSV, one row per cell:
//!
//! ```text
//!   cell  ,E,W,N,S
//! "(1, 1)",1,0,0,0
//! "(1, 2)",0,1,0,1
//! ```
//!
//! Flags are `1` for an open passage and `0` for a wall. The extents are those of the largest
//! row and column present, and every cell of that rectangle must appear.
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use fxhash::FxHashSet;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Direction};
use crate::error::MazeError;
use crate::maze::{GridGraph, Maze};

#[derive(Debug, Deserialize, Serialize)]
struct MazeRecord {
    cell: String,
    #[serde(rename = "E")]
    east: u8,
    #[serde(rename = "W")]
    west: u8,
    #[serde(rename = "N")]
    north: u8,
    #[serde(rename = "S")]
    south: u8,
}

impl MazeRecord {
    fn flags(&self) -> [(Direction, bool); 4] {
        [
            (Direction::East, self.east != 0),
            (Direction::West, self.west != 0),
            (Direction::North, self.north != 0),
            (Direction::South, self.south != 0),
        ]
    }
}

fn parse_cell(label: &str) -> Result<Cell, MazeError> {
    let malformed = || MazeError::MalformedCell(label.to_owned());
    let (row, col) = label
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .and_then(|s| s.split_once(','))
        .ok_or_else(malformed)?;
    let row = row.trim().parse::<i32>().map_err(|_| malformed())?;
    let col = col.trim().parse::<i32>().map_err(|_| malformed())?;
    if row < 1 || col < 1 {
        return Err(malformed());
    }
    Ok(Cell::new(row, col))
}

impl Maze {
    /// Reads a maze map. The goal is not part of the file format and is given separately.
    pub fn from_csv_reader<R: Read>(reader: R, goal: Cell) -> Result<Maze, MazeError> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .has_headers(true)
            .from_reader(reader);
        let mut cells = Vec::new();
        let mut seen = FxHashSet::default();
        for result in csv_reader.deserialize() {
            let record: MazeRecord = result?;
            let cell = parse_cell(&record.cell)?;
            if !seen.insert(cell) {
                return Err(MazeError::DuplicateCell(cell));
            }
            cells.push((cell, record));
        }
        let rows = cells.iter().map(|(c, _)| c.row).max().unwrap_or(0) as usize;
        let cols = cells.iter().map(|(c, _)| c.col).max().unwrap_or(0) as usize;
        if rows == 0 || cols == 0 {
            return Err(MazeError::Invalid("maze map contains no cells".to_owned()));
        }
        let area = rows.checked_mul(cols).ok_or_else(|| {
            MazeError::Invalid(format!("maze extents {rows}x{cols} are too large"))
        })?;
        if seen.len() < area {
            // Among the first `seen.len() + 1` cells in row-major order at least one is absent
            let missing = iproduct!(1..=rows as i32, 1..=cols as i32)
                .map(|(row, col)| Cell::new(row, col))
                .find(|c| !seen.contains(c));
            if let Some(missing) = missing {
                return Err(MazeError::MissingCell(missing));
            }
        }

        let mut maze =
            Maze::new(rows, cols, goal).map_err(|e| MazeError::Invalid(e.to_string()))?;
        for (cell, record) in &cells {
            for (dir, open) in record.flags() {
                maze.set_passage(*cell, dir, open)
                    .map_err(|e| MazeError::Invalid(e.to_string()))?;
            }
        }
        maze.generate_components();
        Ok(maze)
    }

    /// Loads a maze map from a file.
    pub fn load<P: AsRef<Path>>(path: P, goal: Cell) -> Result<Maze, MazeError> {
        Maze::from_csv_reader(File::open(path)?, goal)
    }

    /// Writes the maze map in row-major cell order.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), MazeError> {
        let mut csv_writer = WriterBuilder::new().from_writer(writer);
        for cell in self.cells() {
            let flag = |dir| self.is_passable(&cell, dir) as u8;
            csv_writer.serialize(MazeRecord {
                cell: cell.to_string(),
                east: flag(Direction::East),
                west: flag(Direction::West),
                north: flag(Direction::North),
                south: flag(Direction::South),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Saves the maze map to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MazeError> {
        self.write_csv(File::create(path)?)
    }
}
