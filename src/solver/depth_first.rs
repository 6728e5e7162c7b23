use crate::solver::GridSolver;

/// Always expands the most recently discovered cell. Finds a path whenever one exists, but that
/// path is generally not the shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver;

impl GridSolver for DepthFirstSolver {
    type Frontier = Vec<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::RowCol;
    use grid_util::point::Point;
    use crate::grid::Grid;
    use crate::solver::BreadthFirstSolver;

    /// On an empty grid the search dives south first, then snakes back up, producing a much
    /// longer path than breadth-first search.
    #[test]
    fn path_is_not_optimal() {
        let grid = Grid::new(5, 5);
        let (start, end) = (Point::at(0, 0), Point::at(0, 4));
        let result = DepthFirstSolver.solve(&grid, start, end);
        let expected = [
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (4, 1),
            (4, 2),
            (3, 2),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 3),
            (0, 4),
        ]
        .map(|(row, col)| Point::at(row, col));
        assert!(result.found());
        assert_eq!(result.path(), &expected);
        assert_eq!(result.edge_count(), Some(12));
        assert_eq!(result.visited().len(), 20);
        assert_eq!(
            &result.visited()[..3],
            &[Point::at(0, 1), Point::at(1, 0), Point::at(1, 1)]
        );

        let shortest = BreadthFirstSolver.solve(&grid, start, end);
        assert!(result.edge_count() > shortest.edge_count());
    }

    #[test]
    fn enclosed_end() {
        // |S.#|
        // |###|
        // |E..|
        let grid: Grid = "S.#\n###\nE..".parse().unwrap();
        let result = DepthFirstSolver.solve(&grid, Point::at(0, 0), Point::at(2, 0));
        assert!(!result.found());
        assert!(result.path().is_empty());
        assert_eq!(result.visited(), &[Point::at(0, 1)]);
    }
}
