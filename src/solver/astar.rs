use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;

use crate::cell::Cell;
use crate::error::Result;
use crate::heuristic::{DistanceMetric, Heuristic};
use crate::maze::GridGraph;
use crate::path::{Exploration, PredecessorMap};
use crate::solver::{check_endpoints, finish, retain_expanded, GridSolver};

/// Heap entry ordered so that [BinaryHeap] pops the smallest `(f, h, cell)` first. Entries
/// equal on all three keep their insertion order.
struct QueueEntry {
    estimated_cost: f64,
    heuristic: f64,
    cell: Cell,
    index: usize,
}

impl Eq for QueueEntry {}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key: the heap is a max-heap
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.heuristic.total_cmp(&self.heuristic))
            .then_with(|| other.cell.cmp(&self.cell))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Best-first search ordered by `g + h`, i.e. A*.
///
/// Relaxing a cell pushes a new queue entry without removing the old one and no closed set is
/// kept. A superseded entry that is popped later re-expands its cell with the best known cost,
/// which relaxes nothing, and shows up in the trace a second time.
///
/// With an admissible heuristic the path found is a shortest one. Admissibility is the
/// caller's responsibility, see [heuristic](crate::heuristic).
#[derive(Clone, Debug, Default)]
pub struct AstarSolver<H = Heuristic> {
    pub heuristic: H,
}

impl<H: DistanceMetric> AstarSolver<H> {
    pub fn new(heuristic: H) -> AstarSolver<H> {
        AstarSolver { heuristic }
    }
}

impl<H: DistanceMetric> GridSolver for AstarSolver<H> {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn explore<G: GridGraph>(&self, graph: &G, start: Cell) -> Result<Exploration> {
        let goal = check_endpoints(graph, &start)?;
        self.heuristic.validate()?;

        let h_start = self.heuristic.distance(&start, &goal);
        let mut g_score: FxHashMap<Cell, u32> = FxHashMap::default();
        let mut f_score: FxHashMap<Cell, f64> = FxHashMap::default();
        g_score.insert(start, 0);
        f_score.insert(start, h_start);

        let mut to_see = BinaryHeap::new();
        to_see.push(QueueEntry {
            estimated_cost: h_start,
            heuristic: h_start,
            cell: start,
            index: 0,
        });
        let mut pushed = 1;
        let mut predecessors = PredecessorMap::default();
        let mut trace = Vec::new();
        let mut reached = false;

        while let Some(QueueEntry { cell: current, .. }) = to_see.pop() {
            trace.push(current);
            if current == goal {
                reached = true;
                break;
            }
            let Some(&cost) = g_score.get(&current) else {
                continue;
            };
            for (_, next) in graph.successors(&current)? {
                let new_cost = cost + 1;
                let h = self.heuristic.distance(&next, &goal);
                let estimated_cost = new_cost as f64 + h;
                if f_score.get(&next).map_or(true, |&f| estimated_cost < f) {
                    predecessors.insert(next, current);
                    g_score.insert(next, new_cost);
                    f_score.insert(next, estimated_cost);
                    to_see.push(QueueEntry {
                        estimated_cost,
                        heuristic: h,
                        cell: next,
                        index: pushed,
                    });
                    pushed += 1;
                }
            }
        }
        retain_expanded(&mut predecessors, &trace);
        Ok(finish(self.name(), start, goal, trace, predecessors, reached))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Direction;
    use crate::error::SearchError;
    use crate::heuristic::{Euclidean, Manhattan, Minkowski};
    use crate::maze::Maze;
    use crate::solver::bfs::BreadthFirstSolver;

    #[test]
    fn heap_pops_smallest_key() {
        let mut heap = BinaryHeap::new();
        let entry = |f: f64, h: f64, cell: (i32, i32), index| QueueEntry {
            estimated_cost: f,
            heuristic: h,
            cell: Cell::from(cell),
            index,
        };
        heap.push(entry(5.0, 1.0, (1, 1), 0));
        heap.push(entry(4.0, 3.0, (2, 2), 1));
        heap.push(entry(4.0, 2.0, (3, 3), 2));
        heap.push(entry(4.0, 2.0, (1, 3), 3));
        let order = std::iter::from_fn(|| heap.pop().map(|e| e.cell)).collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                Cell::new(1, 3),
                Cell::new(3, 3),
                Cell::new(2, 2),
                Cell::new(1, 1)
            ]
        );
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let maze = Maze::open(1, 1, Cell::new(1, 1)).unwrap();
        let result = AstarSolver::new(Manhattan)
            .search(&maze, Cell::new(1, 1))
            .unwrap();
        assert_eq!(result.trace(), &[Cell::new(1, 1)]);
        assert!(result.predecessors().is_empty());
        assert_eq!(result.path_length(), 1);
    }

    /// Asserts that the optimal 4 step solution is found around a blocked centre.
    #[test]
    fn solve_simple_problem() {
        // +---+---+---+
        // |         G |
        // +   +---+   +
        // |   |   |   |
        // +   +---+   +
        // | S         |
        // +---+---+---+
        let mut maze = Maze::open(3, 3, Cell::new(1, 3)).unwrap();
        for dir in Direction::ALL {
            maze.build_wall(Cell::new(2, 2), dir).unwrap();
        }
        for h in [Heuristic::Manhattan, Heuristic::Euclidean] {
            let result = AstarSolver::new(h).search(&maze, Cell::new(3, 1)).unwrap();
            assert_eq!(result.path_length(), 5);
            assert!(!result.path().contains(&Cell::new(2, 2)));
        }
    }

    /// Straight towards the goal on an open grid, expanding nothing else.
    #[test]
    fn heads_straight_for_the_goal() {
        let maze = Maze::open(5, 5, Cell::new(1, 1)).unwrap();
        let result = AstarSolver::new(Manhattan)
            .search(&maze, Cell::new(1, 5))
            .unwrap();
        assert_eq!(result.path_length(), 5);
        assert_eq!(result.search_length(), 5);
    }

    #[test]
    fn matches_bfs_on_open_grid() {
        let maze = Maze::open(6, 7, Cell::new(2, 3)).unwrap();
        let bfs = BreadthFirstSolver.search(&maze, Cell::new(6, 7)).unwrap();
        for result in [
            AstarSolver::new(Heuristic::Manhattan).search(&maze, Cell::new(6, 7)),
            AstarSolver::new(Heuristic::Euclidean).search(&maze, Cell::new(6, 7)),
            AstarSolver::new(Heuristic::Chebyshev).search(&maze, Cell::new(6, 7)),
        ] {
            assert_eq!(result.unwrap().path_length(), bfs.path_length());
        }
        let manhattan = AstarSolver::new(Manhattan)
            .search(&maze, Cell::new(6, 7))
            .unwrap();
        let minkowski = AstarSolver::new(Minkowski::new(1.0).unwrap())
            .search(&maze, Cell::new(6, 7))
            .unwrap();
        assert_eq!(manhattan, minkowski);
        let euclid = AstarSolver::new(Euclidean)
            .search(&maze, Cell::new(6, 7))
            .unwrap();
        assert_eq!(euclid.path_length(), bfs.path_length());
    }

    #[test]
    fn trace_covers_predecessors() {
        let mut maze = Maze::open(5, 5, Cell::new(1, 1)).unwrap();
        maze.build_wall(Cell::new(2, 1), Direction::North).unwrap();
        maze.build_wall(Cell::new(2, 2), Direction::North).unwrap();
        let exploration = AstarSolver::new(Manhattan)
            .explore(&maze, Cell::new(5, 5))
            .unwrap();
        for (cell, prev) in exploration.predecessors() {
            assert!(exploration.trace().contains(cell));
            assert!(exploration.trace().contains(prev));
        }
        assert_eq!(exploration.into_result().unwrap().path_length(), 9);
    }

    /// A very large Minkowski order must not turn the estimate into infinity.
    #[test]
    fn steep_minkowski_order_finds_corridor_path() {
        let maze = Maze::open(1, 20, Cell::new(1, 1)).unwrap();
        for p in [400.0, 1e-4] {
            let result = AstarSolver::new(Minkowski::new(p).unwrap())
                .search(&maze, Cell::new(1, 20))
                .unwrap();
            assert_eq!(result.path_length(), 20);
            assert_eq!(result.path().last(), Some(&Cell::new(1, 1)));
        }
    }

    /// An overestimating metric lets stale queue entries re-expand cells. The trace then holds
    /// repeats while the predecessor links and the path stay consistent.
    #[test]
    fn stale_entries_reexpand_cells() {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(0);
        let solver = AstarSolver::new(Heuristic::Minkowski { p: 0.5 });
        let mut reexpanded = 0;
        for _ in 0..300 {
            let mut maze = Maze::new(8, 8, Cell::new(1, 1)).unwrap();
            for cell in maze.cells().collect::<Vec<_>>() {
                for dir in [Direction::East, Direction::South] {
                    if maze.contains(&cell.step(dir)) && rng.gen_bool(0.7) {
                        maze.carve(cell, dir).unwrap();
                    }
                }
            }
            let start = maze.default_start();
            let exploration = solver.explore(&maze, start).unwrap();
            let mut seen = exploration.trace().to_vec();
            seen.sort();
            seen.dedup();
            if seen.len() == exploration.trace().len() {
                continue;
            }
            reexpanded += 1;
            for (cell, prev) in exploration.predecessors() {
                assert!(exploration.trace().contains(cell));
                assert!(exploration.trace().contains(prev));
            }
            if !exploration.reached() {
                continue;
            }
            let path = exploration.into_result().unwrap().path();
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&Cell::new(1, 1)));
            for pair in path.windows(2) {
                assert!(maze
                    .successors(&pair[0])
                    .unwrap()
                    .iter()
                    .any(|(_, next)| *next == pair[1]));
            }
        }
        assert!(reexpanded > 0);
    }

    #[test]
    fn invalid_minkowski_order_is_rejected() {
        let maze = Maze::open(2, 2, Cell::new(1, 1)).unwrap();
        let solver = AstarSolver::new(Heuristic::Minkowski { p: -1.0 });
        assert!(matches!(
            solver.search(&maze, Cell::new(2, 2)),
            Err(SearchError::InvalidInput(_))
        ));
    }

    #[test]
    fn unreachable_goal() {
        let maze = Maze::new(2, 2, Cell::new(1, 1)).unwrap();
        let exploration = AstarSolver::<Heuristic>::default()
            .explore(&maze, Cell::new(2, 2))
            .unwrap();
        assert!(!exploration.reached());
        assert!(matches!(
            exploration.reconstruct(),
            Err(SearchError::Unreachable { .. })
        ));
    }
}
