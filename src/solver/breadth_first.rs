use std::collections::VecDeque;

use crate::solver::GridSolver;

/// Expands cells in discovery order. The returned path always has the fewest possible steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

impl GridSolver for BreadthFirstSolver {
    type Frontier = VecDeque<usize>;
}
