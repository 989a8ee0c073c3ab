//! Strategy selection as plain data, so a search can be described in a config file.
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{Result, SearchError};
use crate::heuristic::Heuristic;
use crate::maze::GridGraph;
use crate::path::{Exploration, SearchResult};
use crate::solver::astar::AstarSolver;
use crate::solver::bfs::BreadthFirstSolver;
use crate::solver::dfs::DepthFirstSolver;
use crate::solver::GridSolver;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    #[default]
    #[serde(alias = "a*")]
    Astar,
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Strategy> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "astar" | "a*" => Ok(Strategy::Astar),
            other => Err(SearchError::InvalidInput(format!(
                "unknown strategy {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "breadth-first"),
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::Astar => write!(f, "astar"),
        }
    }
}

/// A strategy and, for A*, the heuristic it uses. The heuristic is ignored by the
/// uninformed strategies.
///
/// ```
/// # use maze_search::config::{SearchConfig, Strategy};
/// # use maze_search::heuristic::Heuristic;
/// let config = SearchConfig::new(Strategy::Astar, Heuristic::Euclidean);
/// assert_eq!(config.to_string(), "astar (euclidean)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub heuristic: Heuristic,
}

impl SearchConfig {
    pub fn new(strategy: Strategy, heuristic: Heuristic) -> SearchConfig {
        SearchConfig {
            strategy,
            heuristic,
        }
    }

    /// Searches `graph` from `start` with the configured strategy.
    pub fn run<G: GridGraph>(&self, graph: &G, start: Cell) -> Result<SearchResult> {
        self.search(graph, start)
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.strategy {
            Strategy::Astar => write!(f, "{} ({})", self.strategy, self.heuristic),
            _ => write!(f, "{}", self.strategy),
        }
    }
}

impl GridSolver for SearchConfig {
    fn name(&self) -> &'static str {
        match self.strategy {
            Strategy::BreadthFirst => BreadthFirstSolver.name(),
            Strategy::DepthFirst => DepthFirstSolver.name(),
            Strategy::Astar => "A*",
        }
    }

    fn explore<G: GridGraph>(&self, graph: &G, start: Cell) -> Result<Exploration> {
        match self.strategy {
            Strategy::BreadthFirst => BreadthFirstSolver.explore(graph, start),
            Strategy::DepthFirst => DepthFirstSolver.explore(graph, start),
            Strategy::Astar => AstarSolver::new(self.heuristic).explore(graph, start),
        }
    }
}
