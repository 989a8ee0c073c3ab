use maze_search::{AstarSolver, Cell, Direction, GridSolver, Heuristic, Maze};

// In this example a path is found on a 3x3 maze with shape
// +---+---+---+
// |         G |
// +   +---+   +
// |   |   |   |
// +   +---+   +
// | S         |
// +---+---+---+
// where the centre cell is walled off on every side.

fn main() {
    let mut maze = Maze::open(3, 3, Cell::new(1, 3)).unwrap();
    for dir in Direction::ALL {
        maze.build_wall(Cell::new(2, 2), dir).unwrap();
    }
    maze.update();
    println!("{maze}");
    let result = AstarSolver::new(Heuristic::Manhattan)
        .search(&maze, Cell::new(3, 1))
        .unwrap();
    println!("Search order:");
    for cell in result.trace() {
        println!("{cell}");
    }
    println!("Path:");
    for cell in result.path() {
        println!("{cell}");
    }
}
