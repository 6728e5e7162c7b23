//! Row/column addressing on top of [Point]. Rows run along `y` and columns along `x`, so the
//! cell in row `r`, column `c` is `Point::new(c, r)`.
use grid_util::point::Point;

/// `(dx, dy)` offsets of the orthogonal neighbours in expansion order: east, south, west, north.
/// Changing the order changes every visited list and, for depth-first search, the returned
/// paths.
pub const EXPANSION_ORDER: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Row/column view of a [Point].
pub trait RowCol {
    fn at(row: i32, col: i32) -> Self;
    fn row(&self) -> i32;
    fn col(&self) -> i32;
}

impl RowCol for Point {
    fn at(row: i32, col: i32) -> Point {
        Point::new(col, row)
    }
    fn row(&self) -> i32 {
        self.y
    }
    fn col(&self) -> i32 {
        self.x
    }
}

/// The four orthogonally adjacent points in [EXPANSION_ORDER], without any bounds filtering.
pub fn neumann_neighborhood(point: &Point) -> [Point; 4] {
    EXPANSION_ORDER.map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
}
