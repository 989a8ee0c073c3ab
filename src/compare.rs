//! Tallies how two strategies fare against each other over the same graphs.
use core::cmp::Ordering;
use core::fmt;

use log::info;

use crate::cell::Cell;
use crate::error::Result;
use crate::maze::GridGraph;
use crate::path::SearchResult;
use crate::solver::GridSolver;

/// Counts of ties and of wins for either side, where the smaller value wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub ties: usize,
    pub first: usize,
    pub second: usize,
}

impl Tally {
    pub fn record(&mut self, first: usize, second: usize) {
        match first.cmp(&second) {
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.first += 1,
            Ordering::Greater => self.second += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.ties + self.first + self.second
    }
}

/// Path-length and search-length tallies of two named strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub first_name: String,
    pub second_name: String,
    pub path: Tally,
    pub search: Tally,
}

impl Comparison {
    pub fn new(first_name: &str, second_name: &str) -> Comparison {
        Comparison {
            first_name: first_name.to_owned(),
            second_name: second_name.to_owned(),
            path: Tally::default(),
            search: Tally::default(),
        }
    }

    pub fn record(&mut self, first: &SearchResult, second: &SearchResult) {
        self.path.record(first.path_length(), second.path_length());
        self.search
            .record(first.search_length(), second.search_length());
    }

    /// Searches `graph` from `start` with both solvers and records the outcome.
    pub fn record_search<G, A, B>(
        &mut self,
        graph: &G,
        start: Cell,
        first: &A,
        second: &B,
    ) -> Result<()>
    where
        G: GridGraph,
        A: GridSolver,
        B: GridSolver,
    {
        let a = first.search(graph, start)?;
        let b = second.search(graph, start)?;
        self.record(&a, &b);
        Ok(())
    }

    /// Runs `trials` comparisons, each on a fresh graph and start cell from `make_graph`.
    pub fn run<G, A, B, F>(trials: usize, mut make_graph: F, first: &A, second: &B) -> Result<Comparison>
    where
        G: GridGraph,
        A: GridSolver,
        B: GridSolver,
        F: FnMut(usize) -> (G, Cell),
    {
        let mut comparison = Comparison::new(first.name(), second.name());
        for trial in 0..trials {
            let (graph, start) = make_graph(trial);
            comparison.record_search(&graph, start, first, second)?;
        }
        info!(
            "Compared {} and {} over {trials} trials",
            comparison.first_name, comparison.second_name
        );
        Ok(comparison)
    }

    fn write_tally(&self, f: &mut fmt::Formatter, label: &str, tally: &Tally) -> fmt::Result {
        writeln!(f, "{label} Comparison Result")?;
        writeln!(f, "Both have same {label} length for {} times.", tally.ties)?;
        writeln!(
            f,
            "{} has lesser {label} length for {} times.",
            self.first_name, tally.first
        )?;
        writeln!(
            f,
            "{} has lesser {label} length for {} times.",
            self.second_name, tally.second
        )
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_tally(f, "Final Path", &self.path)?;
        writeln!(f, "--------------------------------------------")?;
        self.write_tally(f, "Search Path", &self.search)
    }
}
