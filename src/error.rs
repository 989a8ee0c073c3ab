//! Error types for searching and for loading maze maps.

use crate::cell::{Cell, Direction};

/// Result type alias
pub type Result<T> = std::result::Result<T, SearchError>;

/// Failures of a search or of path reconstruction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The goal was never reached, so no path can be reconstructed.
    #[error("goal {goal} is not reachable from {start}")]
    Unreachable { start: Cell, goal: Cell },

    /// Start, goal, grid extents or a heuristic parameter are unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The graph view reported a passable edge leaving the grid.
    #[error("graph integrity violated at {cell} towards {direction}")]
    GraphIntegrity { cell: Cell, direction: Direction },

    /// A predecessor map whose chain revisits a cell.
    #[error("predecessor chain loops back to {0}")]
    CyclicPredecessors(Cell),
}

/// Failures while reading or writing a maze map.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// CSV layer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cell label that is not of the form `(row, col)`
    #[error("malformed cell label: {0:?}")]
    MalformedCell(String),

    /// The map does not describe every cell of its rectangle
    #[error("maze map is missing cell {0}")]
    MissingCell(Cell),

    /// A cell described by more than one row of the map
    #[error("maze map describes cell {0} twice")]
    DuplicateCell(Cell),

    /// The map is empty or the goal lies outside it
    #[error("invalid maze map: {0}")]
    Invalid(String),
}
