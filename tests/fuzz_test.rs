/// Fuzzes the solvers over many random mazes, checking them against each other, against the
/// connected components of the maze and against a brute-force Dijkstra from petgraph.
use maze_search::{
    AstarSolver, BreadthFirstSolver, Cell, DepthFirstSolver, Direction, Exploration, GridGraph,
    GridSolver, Heuristic, Maze, SearchConfig, SearchError, Strategy,
};
use petgraph::algo::dijkstra;
use petgraph::graphmap::DiGraphMap;
use rand::prelude::*;

fn random_maze(rows: usize, cols: usize, rng: &mut StdRng, density: f64) -> Maze {
    let mut maze = Maze::new(rows, cols, Cell::new(1, 1)).unwrap();
    for cell in maze.cells().collect::<Vec<_>>() {
        for dir in [Direction::East, Direction::South] {
            if maze.contains(&cell.step(dir)) && rng.gen_bool(density) {
                maze.carve(cell, dir).unwrap();
            }
        }
    }
    maze
}

/// Number of cells on a shortest path, as found by Dijkstra on the explicit graph.
fn reference_path_length(maze: &Maze, start: Cell) -> Option<usize> {
    let mut graph: DiGraphMap<Cell, ()> = DiGraphMap::new();
    for cell in maze.cells() {
        graph.add_node(cell);
        for (_, next) in maze.successors(&cell).unwrap() {
            graph.add_edge(cell, next, ());
        }
    }
    let costs = dijkstra(&graph, start, Some(maze.goal()), |_| 1usize);
    costs.get(&maze.goal()).map(|cost| cost + 1)
}

fn assert_trace_complete(exploration: &Exploration) {
    for (cell, prev) in exploration.predecessors() {
        assert!(exploration.trace().contains(cell), "{cell} not in trace");
        assert!(exploration.trace().contains(prev), "{prev} not in trace");
    }
}

fn visualize(maze: &Maze, start: &Cell) {
    println!("start {start}, goal {}\n{maze}", maze.goal());
}

#[test]
fn fuzz() {
    const N: usize = 8;
    const N_MAZES: usize = 500;
    let mut rng = StdRng::seed_from_u64(0);
    let solvers = [Strategy::BreadthFirst, Strategy::DepthFirst, Strategy::Astar]
        .map(|strategy| SearchConfig::new(strategy, Heuristic::Manhattan));
    for _ in 0..N_MAZES {
        let maze = random_maze(N, N, &mut rng, 0.55);
        let start = maze.default_start();
        let reachable = maze.reachable(&start, &maze.goal());
        for solver in &solvers {
            let exploration = solver.explore(&maze, start).unwrap();
            if exploration.reached() != reachable {
                println!("{solver}");
                visualize(&maze, &start);
            }
            assert_eq!(exploration.reached(), reachable);
            assert_trace_complete(&exploration);
            assert_eq!(exploration.trace()[0], start);
            match exploration.into_result() {
                Ok(result) => {
                    let path = result.path();
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&maze.goal()));
                    let walked = result.forward_path().walk(start).collect::<Vec<_>>();
                    assert_eq!(walked, path);
                    for pair in path.windows(2) {
                        let (a, b) = (pair[0], pair[1]);
                        assert!(maze
                            .successors(&a)
                            .unwrap()
                            .iter()
                            .any(|(_, next)| *next == b));
                    }
                }
                Err(err) => assert!(matches!(err, SearchError::Unreachable { .. })),
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 6;
    const N_MAZES: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_MAZES {
        let maze = random_maze(N, N + 1, &mut rng, 0.7);
        let start = maze.default_start();
        let reference = reference_path_length(&maze, start);
        let bfs = BreadthFirstSolver.search(&maze, start).ok();
        if bfs.as_ref().map(|r| r.path_length()) != reference {
            visualize(&maze, &start);
        }
        assert_eq!(bfs.as_ref().map(|r| r.path_length()), reference);
        let Some(bfs) = bfs else {
            continue;
        };
        for heuristic in [
            Heuristic::Manhattan,
            Heuristic::Euclidean,
            Heuristic::Chebyshev,
            Heuristic::Minkowski { p: 3.0 },
        ] {
            let astar = AstarSolver::new(heuristic).search(&maze, start).unwrap();
            assert_eq!(astar.path_length(), bfs.path_length(), "{heuristic}");
        }
        let dfs = DepthFirstSolver.search(&maze, start).unwrap();
        assert!(dfs.path_length() >= bfs.path_length());
    }
}

#[test]
fn searches_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let maze = random_maze(12, 12, &mut rng, 0.6);
    let start = maze.default_start();
    assert_eq!(
        BreadthFirstSolver.explore(&maze, start).unwrap(),
        BreadthFirstSolver.explore(&maze, start).unwrap()
    );
    assert_eq!(
        DepthFirstSolver.explore(&maze, start).unwrap(),
        DepthFirstSolver.explore(&maze, start).unwrap()
    );
    let astar = AstarSolver::new(Heuristic::Euclidean);
    assert_eq!(
        astar.explore(&maze, start).unwrap(),
        astar.explore(&maze, start).unwrap()
    );
}

#[test]
fn concurrent_searches_share_the_maze() {
    let mut rng = StdRng::seed_from_u64(3);
    let maze = random_maze(16, 16, &mut rng, 0.8);
    let start = maze.default_start();
    let expected = BreadthFirstSolver.search(&maze, start).ok();
    let results = std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| BreadthFirstSolver.search(&maze, start).ok()))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });
    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn closed_maze_is_unreachable() {
    let maze = Maze::new(2, 2, Cell::new(1, 1)).unwrap();
    let start = maze.default_start();
    assert!(maze.unreachable(&start, &maze.goal()));
    for result in [
        BreadthFirstSolver.search(&maze, start),
        DepthFirstSolver.search(&maze, start),
        AstarSolver::new(Heuristic::Manhattan).search(&maze, start),
    ] {
        assert_eq!(
            result,
            Err(SearchError::Unreachable {
                start,
                goal: Cell::new(1, 1)
            })
        );
    }
}
