use fxhash::FxHashSet;

use crate::cell::Cell;
use crate::error::Result;
use crate::maze::GridGraph;
use crate::path::{Exploration, PredecessorMap};
use crate::solver::{check_endpoints, finish, retain_expanded, GridSolver};

/// Uninformed depth-first search with a LIFO frontier.
///
/// Cells enter the trace when they are popped. The found path is whatever the stack order
/// produces; only reachability is guaranteed.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver;

impl DepthFirstSolver {
    /// Explores like [explore](GridSolver::explore) and additionally appends to `branch_cells`
    /// every expanded cell that discovered more than one new neighbour, in expansion order.
    pub fn explore_marking<G: GridGraph>(
        &self,
        graph: &G,
        start: Cell,
        branch_cells: &mut Vec<Cell>,
    ) -> Result<Exploration> {
        let goal = check_endpoints(graph, &start)?;
        let mut frontier = vec![start];
        let mut explored = FxHashSet::default();
        explored.insert(start);
        let mut predecessors = PredecessorMap::default();
        let mut trace = Vec::new();
        let mut reached = false;

        while let Some(current) = frontier.pop() {
            trace.push(current);
            if current == goal {
                reached = true;
                break;
            }
            let mut discovered = 0;
            for (_, next) in graph.successors(&current)? {
                if !explored.insert(next) {
                    continue;
                }
                discovered += 1;
                frontier.push(next);
                predecessors.insert(next, current);
            }
            if discovered > 1 {
                branch_cells.push(current);
            }
        }
        retain_expanded(&mut predecessors, &trace);
        Ok(finish(self.name(), start, goal, trace, predecessors, reached))
    }
}

impl GridSolver for DepthFirstSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn explore<G: GridGraph>(&self, graph: &G, start: Cell) -> Result<Exploration> {
        self.explore_marking(graph, start, &mut Vec::new())
    }
}
