use fxhash::FxHashSet;
use log::{debug, warn};

use crate::cell::Cell;
use crate::error::{Result, SearchError};
use crate::maze::GridGraph;
use crate::path::{Exploration, PredecessorMap, SearchResult};

pub mod astar;
pub mod bfs;
pub mod dfs;

/// A traversal strategy over a [GridGraph].
///
/// Solvers hold no search state of their own: every call allocates its own frontier, explored
/// set and predecessor map and only reads the graph, so one graph can be searched by several
/// solvers at once.
pub trait GridSolver {
    /// Short name used in logs and comparison reports.
    fn name(&self) -> &'static str;

    /// Runs the strategy from `start` towards the goal of `graph` and returns the visited
    /// cells and predecessor links. Succeeds even if the goal is never reached.
    fn explore<G: GridGraph>(&self, graph: &G, start: Cell) -> Result<Exploration>;

    /// Explores and reconstructs the path to the goal.
    fn search<G: GridGraph>(&self, graph: &G, start: Cell) -> Result<SearchResult> {
        self.explore(graph, start)?.into_result()
    }
}

/// Validates the extents, the start and the goal of a search and returns the goal.
pub(crate) fn check_endpoints<G: GridGraph>(graph: &G, start: &Cell) -> Result<Cell> {
    if graph.rows() == 0 || graph.cols() == 0 {
        return Err(SearchError::InvalidInput("graph has no cells".to_owned()));
    }
    let goal = graph.goal();
    for (what, cell) in [("start", start), ("goal", &goal)] {
        if !graph.contains(cell) {
            return Err(SearchError::InvalidInput(format!(
                "{what} {cell} lies outside the {}x{} grid",
                graph.rows(),
                graph.cols()
            )));
        }
    }
    Ok(goal)
}

/// Drops predecessor links of cells that were discovered but never expanded, so that every
/// cell of the returned map also appears in the trace.
pub(crate) fn retain_expanded(predecessors: &mut PredecessorMap, trace: &[Cell]) {
    let expanded = trace.iter().collect::<FxHashSet<_>>();
    predecessors.retain(|cell, _| expanded.contains(cell));
}

pub(crate) fn finish(
    solver: &str,
    start: Cell,
    goal: Cell,
    trace: Vec<Cell>,
    predecessors: PredecessorMap,
    reached: bool,
) -> Exploration {
    if reached {
        debug!(
            "{solver}: reached {goal} from {start} after visiting {} cells",
            trace.len()
        );
    } else {
        warn!(
            "{solver}: frontier exhausted after {} cells without reaching {goal} from {start}",
            trace.len()
        );
    }
    Exploration {
        start,
        goal,
        trace,
        predecessors,
    }
}
