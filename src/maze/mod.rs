//! The grid graph consumed by the solvers, and [Maze], an in-memory implementation of it.
use core::fmt;

use grid_util::{SimpleValueGrid, ValueGrid};
use itertools::{iproduct, Itertools};
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, Direction};
use crate::error::{Result, SearchError};

pub mod map_file;

/// Successors of a single cell; a 4-connected grid has at most four.
pub type Successors = SmallVec<[(Direction, Cell); 4]>;

/// Read-only view of a 4-connected grid: extents, a goal and per-cell passability.
///
/// Passability is queried only from the side of the cell being expanded, so a view does not
/// have to be symmetric. A view that reports a passable edge leading off the grid is malformed;
/// solvers detect this through [successors](Self::successors).
pub trait GridGraph {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn goal(&self) -> Cell;
    /// Whether the edge leaving `cell` towards `dir` can be taken.
    fn is_passable(&self, cell: &Cell, dir: Direction) -> bool;

    fn contains(&self, cell: &Cell) -> bool {
        cell.row >= 1
            && cell.col >= 1
            && cell.row as usize <= self.rows()
            && cell.col as usize <= self.cols()
    }

    /// Passable neighbours of `cell` in `E, S, N, W` order.
    fn successors(&self, cell: &Cell) -> Result<Successors> {
        let mut succ = Successors::new();
        for dir in Direction::ALL {
            if self.is_passable(cell, dir) {
                let next = cell.step(dir);
                if !self.contains(&next) {
                    return Err(SearchError::GraphIntegrity {
                        cell: *cell,
                        direction: dir,
                    });
                }
                succ.push((dir, next));
            }
        }
        Ok(succ)
    }
}

impl<G: GridGraph + ?Sized> GridGraph for &G {
    fn rows(&self) -> usize {
        (**self).rows()
    }
    fn cols(&self) -> usize {
        (**self).cols()
    }
    fn goal(&self) -> Cell {
        (**self).goal()
    }
    fn is_passable(&self, cell: &Cell, dir: Direction) -> bool {
        (**self).is_passable(cell, dir)
    }
}

/// [Maze] stores one passage bitmask per cell (see [Direction]) in a [SimpleValueGrid] and
/// keeps track of connected components with a [UnionFind] structure, so that reachability can
/// be answered without searching.
///
/// Opening a passage joins components directly. Closing one may split a component, in which
/// case the components are flagged as dirty until [update](Self::update) regenerates them.
#[derive(Clone, Debug)]
pub struct Maze {
    rows: usize,
    cols: usize,
    goal: Cell,
    passages: SimpleValueGrid<u8>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Maze {
    /// A maze with every passage closed.
    pub fn new(rows: usize, cols: usize, goal: Cell) -> Result<Maze> {
        if rows == 0 || cols == 0 || rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(SearchError::InvalidInput(format!(
                "maze extents {rows}x{cols} are not usable"
            )));
        }
        let mut maze = Maze {
            rows,
            cols,
            goal: Cell::new(1, 1),
            passages: SimpleValueGrid::new(cols, rows, 0),
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        maze.set_goal(goal)?;
        Ok(maze)
    }

    /// A maze in which every pair of adjacent cells is connected.
    pub fn open(rows: usize, cols: usize, goal: Cell) -> Result<Maze> {
        let mut maze = Maze::new(rows, cols, goal)?;
        for cell in maze.cells().collect::<Vec<_>>() {
            for dir in [Direction::East, Direction::South] {
                if maze.contains(&cell.step(dir)) {
                    maze.carve(cell, dir)?;
                }
            }
        }
        Ok(maze)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        iproduct!(1..=self.rows as i32, 1..=self.cols as i32).map(|(r, c)| Cell::new(r, c))
    }

    /// The start cell used when none is given: the bottom-right corner.
    pub fn default_start(&self) -> Cell {
        Cell::new(self.rows as i32, self.cols as i32)
    }

    pub fn set_goal(&mut self, goal: Cell) -> Result<()> {
        if !self.contains(&goal) {
            return Err(SearchError::InvalidInput(format!(
                "goal {goal} lies outside the {}x{} maze",
                self.rows, self.cols
            )));
        }
        self.goal = goal;
        Ok(())
    }

    /// Raw passage bitmask of a cell.
    pub fn passage_mask(&self, cell: &Cell) -> u8 {
        if self.contains(cell) {
            self.passages.get(cell.col - 1, cell.row - 1)
        } else {
            0
        }
    }

    fn ix(&self, cell: &Cell) -> usize {
        (cell.row as usize - 1) * self.cols + (cell.col as usize - 1)
    }

    fn check_cell(&self, cell: &Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(SearchError::InvalidInput(format!(
                "{cell} lies outside the {}x{} maze",
                self.rows, self.cols
            )))
        }
    }

    /// Sets the passability of one side of a passage only. The neighbour may lie outside the
    /// maze, which makes the maze malformed; this is allowed so that such views can be built.
    pub fn set_passage(&mut self, cell: Cell, dir: Direction, open: bool) -> Result<()> {
        self.check_cell(&cell)?;
        let mask = self.passage_mask(&cell);
        let mask = if open {
            mask | dir.bit()
        } else {
            mask & !dir.bit()
        };
        self.passages.set(cell.col - 1, cell.row - 1, mask);
        let next = cell.step(dir);
        if open {
            if self.contains(&next) {
                let (a, b) = (self.ix(&cell), self.ix(&next));
                self.components.union(a, b);
            }
        } else {
            self.components_dirty = true;
        }
        Ok(())
    }

    /// Opens the passage between `cell` and its neighbour in `dir` from both sides.
    pub fn carve(&mut self, cell: Cell, dir: Direction) -> Result<()> {
        let next = cell.step(dir);
        self.check_cell(&next)?;
        self.set_passage(cell, dir, true)?;
        self.set_passage(next, dir.opposite(), true)
    }

    /// Closes the passage between `cell` and its neighbour in `dir` from both sides.
    pub fn build_wall(&mut self, cell: Cell, dir: Direction) -> Result<()> {
        self.set_passage(cell, dir, false)?;
        let next = cell.step(dir);
        if self.contains(&next) {
            self.set_passage(next, dir.opposite(), false)?;
        }
        Ok(())
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        self.contains(cell).then(|| self.components.find(self.ix(cell)))
    }

    /// Checks if both cells lie on the same component. Only exact after [update](Self::update)
    /// when passages have been closed since the components were last generated.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.contains(start) && self.contains(goal) {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up every open passage. One-sided
    /// passages count as links as well.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for cell in self.cells().collect::<Vec<_>>() {
            let parent_ix = self.ix(&cell);
            for dir in [Direction::East, Direction::South] {
                let next = cell.step(dir);
                if self.contains(&next)
                    && (self.is_passable(&cell, dir) || self.is_passable(&next, dir.opposite()))
                {
                    let ix = self.ix(&next);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl GridGraph for Maze {
    fn rows(&self) -> usize {
        self.rows
    }
    fn cols(&self) -> usize {
        self.cols
    }
    fn goal(&self) -> Cell {
        self.goal
    }
    fn is_passable(&self, cell: &Cell, dir: Direction) -> bool {
        self.passage_mask(cell) & dir.bit() != 0
    }
}

/// Draws the walls with `+`, `-` and `|`; the goal is marked with `G`.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 1..=self.rows as i32 {
            let mut top = String::from("+");
            let mut mid = String::new();
            for col in 1..=self.cols as i32 {
                let cell = Cell::new(row, col);
                top.push_str(if self.is_passable(&cell, Direction::North) {
                    "   +"
                } else {
                    "---+"
                });
                if col == 1 {
                    mid.push(if self.is_passable(&cell, Direction::West) {
                        ' '
                    } else {
                        '|'
                    });
                }
                mid.push_str(if cell == self.goal { " G " } else { "   " });
                mid.push(if self.is_passable(&cell, Direction::East) {
                    ' '
                } else {
                    '|'
                });
            }
            writeln!(f, "{top}")?;
            writeln!(f, "{mid}")?;
        }
        let bottom = (1..=self.cols as i32)
            .map(|col| {
                if self.is_passable(&Cell::new(self.rows as i32, col), Direction::South) {
                    "   "
                } else {
                    "---"
                }
            })
            .join("+");
        writeln!(f, "+{bottom}+")
    }
}
