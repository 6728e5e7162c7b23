use crate::grid::Grid;
use crate::search::{traverse, Frontier};
use core::fmt;
use grid_util::point::Point;
use log::info;
use std::str::FromStr;

pub mod breadth_first;
pub mod depth_first;

pub use breadth_first::BreadthFirstSolver;
pub use depth_first::DepthFirstSolver;

/// The outcome of one search. Created fresh per run and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TraversalResult {
    visited: Vec<Point>,
    path: Vec<Point>,
    found: bool,
}

impl TraversalResult {
    pub(crate) fn new(visited: Vec<Point>, path: Vec<Point>, found: bool) -> TraversalResult {
        TraversalResult {
            visited,
            path,
            found,
        }
    }

    /// Cells in the order they were first discovered, excluding the start cell.
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }

    /// Start to end inclusive if found, empty otherwise.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn found(&self) -> bool {
        self.found
    }

    /// Number of steps along the path.
    pub fn edge_count(&self) -> Option<usize> {
        self.found.then(|| self.path.len() - 1)
    }

    pub fn outcome(&self) -> Outcome {
        match self.edge_count() {
            Some(edge_count) => Outcome::Found { edge_count },
            None => Outcome::NoPath,
        }
    }
}

/// Summary of a run. An unreachable end is a valid outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Found { edge_count: usize },
    NoPath,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Found { edge_count } => write!(f, "Path found! Length: {}", edge_count),
            Outcome::NoPath => write!(f, "No path found!"),
        }
    }
}

pub trait GridSolver {
    /// Determines the expansion order: FIFO gives breadth-first, LIFO depth-first.
    type Frontier: Frontier;

    /// Searches from `start` to `end`, treating walls as impassable. Both coordinates must lie on
    /// the grid. Results are fully determined by the grid contents and the endpoints.
    fn solve(&self, grid: &Grid, start: Point, end: Point) -> TraversalResult {
        traverse::<Self::Frontier>(grid, start, end)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    BreadthFirst,
    DepthFirst,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::BreadthFirst => write!(f, "breadth-first"),
            Algorithm::DepthFirst => write!(f, "depth-first"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?}, expected \"breadth-first\" or \"depth-first\"")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth-first" | "bfs" => Ok(Algorithm::BreadthFirst),
            "depth-first" | "dfs" => Ok(Algorithm::DepthFirst),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Runs the chosen algorithm on a snapshot of the grid.
pub fn run_traversal(
    grid: &Grid,
    start: Point,
    end: Point,
    algorithm: Algorithm,
) -> TraversalResult {
    info!("Running {} search from {} to {}", algorithm, start, end);
    let result = match algorithm {
        Algorithm::BreadthFirst => BreadthFirstSolver.solve(grid, start, end),
        Algorithm::DepthFirst => DepthFirstSolver.solve(grid, start, end),
    };
    info!(
        "{} search discovered {} cells: {}",
        algorithm,
        result.visited().len(),
        result.outcome()
    );
    result
}
