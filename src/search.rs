//! Uninformed graph search over a [Grid], shared by the breadth-first and depth-first solvers.
//! The only difference between the two is which end of the frontier is popped.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::debug;
use std::collections::VecDeque;

use crate::grid::{CellType, Grid};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use crate::solver::TraversalResult;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Working set of discovered but not yet expanded nodes, stored as indices into the discovery map.
pub trait Frontier: Default {
    fn push(&mut self, index: usize);
    fn pop(&mut self) -> Option<usize>;
}

/// First-in-first-out.
impl Frontier for VecDeque<usize> {
    fn push(&mut self, index: usize) {
        self.push_back(index);
    }
    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Last-in-first-out.
impl Frontier for Vec<usize> {
    fn push(&mut self, index: usize) {
        Vec::push(self, index);
    }
    fn pop(&mut self) -> Option<usize> {
        Vec::pop(self)
    }
}

fn reverse_path(parents: &FxIndexMap<Point, usize>, start: usize) -> Vec<Point> {
    let mut path: Vec<Point> =
        std::iter::successors(Some(start), |&i| parents.get_index(i).map(|(_, &p)| p))
            .map_while(|i| parents.get_index(i).map(|(node, _)| *node))
            .collect();
    path.reverse();
    path
}

/// Searches from `start` until `end` is popped from the frontier or the frontier runs dry.
///
/// `parents` maps every discovered point to the index of the node it was discovered from,
/// so its insertion order is the discovery order and following parent indices from `end`
/// recovers the path. Each cell enters the map at most once, keeping the search
/// O(rows * cols).
pub fn traverse<Q: Frontier>(grid: &Grid, start: Point, end: Point) -> TraversalResult {
    assert!(
        grid.is_valid_coordinate(start) && grid.is_valid_coordinate(end),
        "search endpoints {} and {} must lie on the grid",
        start,
        end
    );
    let mut frontier = Q::default();
    let mut parents: FxIndexMap<Point, usize> = FxIndexMap::default();
    parents.insert(start, usize::MAX);
    frontier.push(0);
    while let Some(index) = frontier.pop() {
        let Some((&node, _)) = parents.get_index(index) else {
            continue;
        };
        if node == end {
            let path = reverse_path(&parents, index);
            debug!(
                "Reached {} after discovering {} cells",
                end,
                parents.len() - 1
            );
            return TraversalResult::new(discovery_order(&parents), path, true);
        }
        for neighbor in grid.neighbors(node) {
            if grid.get_point(neighbor) == CellType::Wall {
                continue;
            }
            if let Vacant(e) = parents.entry(neighbor) {
                let n = e.index();
                e.insert(index);
                frontier.push(n);
            }
        }
    }
    debug!("Frontier exhausted without reaching {}", end);
    TraversalResult::new(discovery_order(&parents), Vec::new(), false)
}

/// Every discovered cell except the start, which always sits at index 0.
fn discovery_order(parents: &FxIndexMap<Point, usize>) -> Vec<Point> {
    parents.keys().skip(1).copied().collect()
}
