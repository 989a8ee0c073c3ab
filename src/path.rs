//! Search output: the exploration trace, predecessor links and the reconstructed path.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::cell::Cell;
use crate::error::{Result, SearchError};

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Maps each reached cell to the cell it was reached from. The start cell is never a key.
pub type PredecessorMap = FxIndexMap<Cell, Cell>;

/// Successor links along a found route, from start to goal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForwardPath {
    links: FxIndexMap<Cell, Cell>,
}

impl ForwardPath {
    /// Number of steps on the route.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The cell following `cell` on the route.
    pub fn next(&self, cell: &Cell) -> Option<Cell> {
        self.links.get(cell).copied()
    }

    /// Links in the order they were recorded, which is goal side first.
    pub fn iter(&self) -> impl Iterator<Item = (&Cell, &Cell)> {
        self.links.iter()
    }

    /// Follows the links from `start` until a cell without successor.
    pub fn walk(&self, start: Cell) -> impl Iterator<Item = Cell> + '_ {
        std::iter::successors(Some(start), move |cell| self.next(cell))
    }
}

/// Walks `predecessors` back from `goal` to `start` and records each step forwards.
///
/// `start == goal` gives an empty path. A goal without predecessor, or a chain that runs
/// out before reaching `start`, is [SearchError::Unreachable].
pub fn reconstruct(predecessors: &PredecessorMap, start: Cell, goal: Cell) -> Result<ForwardPath> {
    let mut links = FxIndexMap::default();
    let mut current = goal;
    while current != start {
        let prev = *predecessors
            .get(&current)
            .ok_or(SearchError::Unreachable { start, goal })?;
        if links.insert(prev, current).is_some() {
            return Err(SearchError::CyclicPredecessors(prev));
        }
        current = prev;
    }
    Ok(ForwardPath { links })
}

/// What a solver produces before any path is reconstructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Exploration {
    pub(crate) start: Cell,
    pub(crate) goal: Cell,
    pub(crate) trace: Vec<Cell>,
    pub(crate) predecessors: PredecessorMap,
}

impl Exploration {
    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Cells in the order the solver visited them, start first.
    pub fn trace(&self) -> &[Cell] {
        &self.trace
    }

    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    /// Whether the goal was reached, i.e. whether a path can be reconstructed.
    pub fn reached(&self) -> bool {
        self.start == self.goal || self.predecessors.contains_key(&self.goal)
    }

    pub fn reconstruct(&self) -> Result<ForwardPath> {
        reconstruct(&self.predecessors, self.start, self.goal)
    }

    pub fn into_result(self) -> Result<SearchResult> {
        let forward_path = self.reconstruct()?;
        Ok(SearchResult {
            start: self.start,
            goal: self.goal,
            trace: self.trace,
            predecessors: self.predecessors,
            forward_path,
        })
    }
}

/// The complete outcome of a successful search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    start: Cell,
    goal: Cell,
    trace: Vec<Cell>,
    predecessors: PredecessorMap,
    forward_path: ForwardPath,
}

impl SearchResult {
    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn trace(&self) -> &[Cell] {
        &self.trace
    }

    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    pub fn forward_path(&self) -> &ForwardPath {
        &self.forward_path
    }

    /// Number of visited cells, as reported by consumers.
    pub fn search_length(&self) -> usize {
        self.trace.len()
    }

    /// Number of cells on the route, both ends included.
    pub fn path_length(&self) -> usize {
        self.forward_path.len() + 1
    }

    /// The route as a sequence of cells from start to goal.
    pub fn path(&self) -> Vec<Cell> {
        self.forward_path.walk(self.start).collect()
    }

    pub fn into_parts(self) -> (Vec<Cell>, PredecessorMap, ForwardPath) {
        (self.trace, self.predecessors, self.forward_path)
    }
}
