//! # grid_traversal
//!
//! The engine behind an interactive grid pathfinding visualizer. A [Grid] of cells is edited by
//! clicking (placing a start, an end and toggling walls, see [mode]), searched with
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search) or
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search) search, and the search is
//! replayed step by step through a [Playback] so a renderer can animate the discovered cells
//! followed by the path.
//!
//! Movement is restricted to the four orthogonal directions and every step has the same cost, so
//! breadth-first search returns a shortest path. Depth-first search returns *a* path, which is
//! usually considerably longer; this is expected behaviour.
//!
//! Both searches are deterministic: neighbours are always expanded east, south, west, north.
//! Cells are addressed by [Point](grid_util::point::Point) with rows along `y` and columns
//! along `x`; [RowCol] builds points from a row and a column.
//!
//! ```
//! use grid_traversal::{run_traversal, Algorithm, Grid, RowCol};
//! use grid_util::point::Point;
//!
//! let grid = Grid::new(5, 5);
//! let result = run_traversal(&grid, Point::at(0, 0), Point::at(0, 4), Algorithm::BreadthFirst);
//! assert!(result.found());
//! assert_eq!(result.edge_count(), Some(4));
//! ```
pub mod config;
pub mod coord;
pub mod grid;
pub mod mode;
pub mod playback;
mod search;
pub mod session;
pub mod solver;

pub use config::VisualizerConfig;
pub use coord::{RowCol, EXPANSION_ORDER};
pub use grid::{CellType, Components, Dimensions, Grid, ParseGridError};
pub use mode::{apply_click, edit_cell, ClickResult, Endpoints, Mode};
pub use playback::{
    replay, Clock, NoDelay, Playback, PlaybackDelays, PlaybackObserver, PlaybackStep, ThreadClock,
};
pub use search::Frontier;
pub use session::{Session, SessionError};
pub use solver::{
    run_traversal, Algorithm, BreadthFirstSolver, DepthFirstSolver, GridSolver, Outcome,
    ParseAlgorithmError, TraversalResult,
};

pub const MIN_ROWS: usize = 5;
pub const MAX_ROWS: usize = 30;
pub const MIN_COLS: usize = 5;
pub const MAX_COLS: usize = 40;

/// Pause after each discovered cell, in milliseconds.
pub const DEFAULT_VISITED_DELAY_MS: u64 = 20;
/// Pause after each path cell, in milliseconds.
pub const DEFAULT_PATH_DELAY_MS: u64 = 50;
