//! # maze_search
//!
//! Uninformed and informed search over rectangular mazes. A maze is a grid of cells with
//! 1-indexed `(row, col)` coordinates and an open or closed passage on each of the four sides
//! of every cell. Three strategies are provided:
//! [breadth-first](solver::bfs::BreadthFirstSolver),
//! [depth-first](solver::dfs::DepthFirstSolver) and
//! [A*](solver::astar::AstarSolver) with a pluggable [distance metric](heuristic).
//!
//! Every search records the order in which it visited cells and the predecessor links it
//! discovered, from which a forward path from start to goal is rebuilt. Connected
//! components of the maze are maintained with a [UnionFind](petgraph::unionfind::UnionFind)
//! so reachability can be answered without searching.
//!
//! ```
//! use maze_search::{BreadthFirstSolver, Cell, GridSolver, Maze};
//!
//! let maze = Maze::open(3, 3, Cell::new(1, 1)).unwrap();
//! let result = BreadthFirstSolver.search(&maze, maze.default_start()).unwrap();
//! assert_eq!(result.path_length(), 5);
//! ```
pub mod cell;
pub mod compare;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod maze;
pub mod path;
pub mod solver;

pub use cell::{Cell, Direction};
pub use compare::{Comparison, Tally};
pub use config::{SearchConfig, Strategy};
pub use error::{MazeError, SearchError};
pub use heuristic::{DistanceMetric, Heuristic};
pub use maze::{GridGraph, Maze};
pub use path::{Exploration, ForwardPath, PredecessorMap, SearchResult};
pub use solver::astar::AstarSolver;
pub use solver::bfs::BreadthFirstSolver;
pub use solver::dfs::DepthFirstSolver;
pub use solver::GridSolver;
