use maze_search::{
    AstarSolver, BreadthFirstSolver, Cell, Comparison, Direction, GridGraph, Heuristic, Maze,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

// Compares BFS with A* over a number of random 20x20 mazes whose goal is reachable and
// prints how often either found the shorter path or searched fewer cells.

const N: usize = 20;
const TRIALS: usize = 100;

fn random_maze(rng: &mut StdRng) -> Maze {
    loop {
        let mut maze = Maze::new(N, N, Cell::new(1, 1)).unwrap();
        for cell in maze.cells().collect::<Vec<_>>() {
            for dir in [Direction::East, Direction::South] {
                if maze.contains(&cell.step(dir)) && rng.gen_bool(0.65) {
                    maze.carve(cell, dir).unwrap();
                }
            }
        }
        if maze.reachable(&maze.default_start(), &maze.goal()) {
            return maze;
        }
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let comparison = Comparison::run(
        TRIALS,
        |_| {
            let maze = random_maze(&mut rng);
            let start = maze.default_start();
            (maze, start)
        },
        &BreadthFirstSolver,
        &AstarSolver::new(Heuristic::Euclidean),
    )
    .unwrap();
    print!("{comparison}");
}
