use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::cell::Cell;
use crate::error::Result;
use crate::maze::GridGraph;
use crate::path::{Exploration, PredecessorMap};
use crate::solver::{check_endpoints, finish, GridSolver};

/// Uninformed breadth-first search with a FIFO frontier.
///
/// Cells enter the trace when they are discovered, so the trace is the enqueue order. With
/// unit edge costs the first dequeue of the goal yields a shortest path.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

impl GridSolver for BreadthFirstSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn explore<G: GridGraph>(&self, graph: &G, start: Cell) -> Result<Exploration> {
        let goal = check_endpoints(graph, &start)?;
        let mut frontier = VecDeque::from([start]);
        let mut explored = FxHashSet::default();
        explored.insert(start);
        let mut predecessors = PredecessorMap::default();
        let mut trace = vec![start];
        let mut reached = false;

        while let Some(current) = frontier.pop_front() {
            if current == goal {
                reached = true;
                break;
            }
            for (_, next) in graph.successors(&current)? {
                if !explored.insert(next) {
                    continue;
                }
                frontier.push_back(next);
                predecessors.insert(next, current);
                trace.push(next);
            }
        }
        Ok(finish(self.name(), start, goal, trace, predecessors, reached))
    }
}
