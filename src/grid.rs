use crate::coord::{neumann_neighborhood, RowCol};
use crate::{MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
use core::fmt;
use grid_util::grid::{SimpleValueGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::warn;
use petgraph::unionfind::UnionFind;
use std::str::FromStr;

/// The state of a single cell. `Path` and `Visited` are the overlay left behind by a playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellType {
    #[default]
    Empty,
    Start,
    End,
    Wall,
    Path,
    Visited,
}

impl CellType {
    pub fn is_overlay(&self) -> bool {
        matches!(self, CellType::Path | CellType::Visited)
    }

    pub fn is_endpoint(&self) -> bool {
        matches!(self, CellType::Start | CellType::End)
    }

    pub fn symbol(&self) -> char {
        match self {
            CellType::Empty => '.',
            CellType::Start => 'S',
            CellType::End => 'E',
            CellType::Wall => '#',
            CellType::Path => '*',
            CellType::Visited => 'o',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<CellType> {
        match symbol {
            '.' => Some(CellType::Empty),
            'S' => Some(CellType::Start),
            'E' => Some(CellType::End),
            '#' => Some(CellType::Wall),
            '*' => Some(CellType::Path),
            'o' => Some(CellType::Visited),
            _ => None,
        }
    }
}

/// Grid dimensions, always within `MIN_ROWS..=MAX_ROWS` and `MIN_COLS..=MAX_COLS` when built
/// through [Dimensions::clamped].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    /// Clamps the requested size to the nearest supported bound instead of rejecting it.
    pub fn clamped(rows: usize, cols: usize) -> Dimensions {
        let clamped = Dimensions {
            rows: rows.clamp(MIN_ROWS, MAX_ROWS),
            cols: cols.clamp(MIN_COLS, MAX_COLS),
        };
        if clamped.rows != rows || clamped.cols != cols {
            warn!(
                "Requested {}x{} grid is out of range, using {}x{}",
                rows, cols, clamped.rows, clamped.cols
            );
        }
        clamped
    }
}

impl Default for Dimensions {
    fn default() -> Dimensions {
        Dimensions { rows: 15, cols: 20 }
    }
}

/// Matrix of [CellType]s addressed by [Point], with rows along `y` and columns along `x`. Every
/// point in `[0, cols) x [0, rows)` maps to exactly one cell; accessing any other point is a
/// caller bug and panics.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleValueGrid<CellType>,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::from_dimensions(Dimensions::default())
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .coords()
                .all(|p| self.get_point(p) == other.get_point(p))
    }
}

impl Eq for Grid {}

impl Grid {
    /// Creates a grid with every cell empty. Dimensions are clamped to the supported range.
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid::from_dimensions(Dimensions::clamped(rows, cols))
    }

    pub fn from_dimensions(dimensions: Dimensions) -> Grid {
        ValueGrid::new(dimensions.cols, dimensions.rows, CellType::Empty)
    }

    pub fn rows(&self) -> usize {
        self.height()
    }

    pub fn cols(&self) -> usize {
        self.width()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    fn check_bounds(&self, x: i32, y: i32) {
        assert!(
            self.index_in_bounds(x, y),
            "point {} is outside of the {}x{} grid",
            Point::new(x, y),
            self.rows(),
            self.cols()
        );
    }

    pub fn is_valid_coordinate(&self, point: Point) -> bool {
        self.point_in_bounds(point)
    }

    pub fn try_get(&self, point: Point) -> Option<CellType> {
        self.point_in_bounds(point).then(|| self.get_point(point))
    }

    /// In-bounds and not a wall.
    pub fn is_passable(&self, point: Point) -> bool {
        self.try_get(point)
            .is_some_and(|cell_type| cell_type != CellType::Wall)
    }

    /// In-bounds orthogonal neighbours in [EXPANSION_ORDER](crate::coord::EXPANSION_ORDER).
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        neumann_neighborhood(&point)
            .into_iter()
            .filter(|n| self.point_in_bounds(*n))
    }

    /// All points in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.rows() as i32, 0..self.cols() as i32)
            .map(|(row, col)| Point::at(row, col))
    }

    pub fn count(&self, cell_type: CellType) -> usize {
        self.coords()
            .filter(|p| self.get_point(*p) == cell_type)
            .count()
    }

    /// Resets every cell matching `pred` to [CellType::Empty], in place.
    pub(crate) fn reset_where<F>(&mut self, pred: F)
    where
        F: Fn(CellType) -> bool,
    {
        for point in self.coords().collect::<Vec<_>>() {
            if pred(self.get_point(point)) {
                self.set_point(point, CellType::Empty);
            }
        }
    }

    /// Resets every `path`/`visited` cell to empty. Start, end and walls are untouched.
    pub fn clear_path(mut self) -> Grid {
        self.reset_where(|c| c.is_overlay());
        self
    }

    /// Resets every wall to empty. All other cell types are untouched.
    pub fn clear_walls(mut self) -> Grid {
        self.reset_where(|c| c == CellType::Wall);
        self
    }

    /// Builds the 4-connected components of the non-wall cells. Walls each form a singleton
    /// component.
    pub fn components(&self) -> Components {
        let mut components = Components {
            rows: self.rows(),
            cols: self.cols(),
            components: UnionFind::new(self.rows() * self.cols()),
        };
        for point in self.coords() {
            if !self.is_passable(point) {
                continue;
            }
            // Linking to the east and south neighbour covers every edge exactly once
            for n in [Point::new(point.x + 1, point.y), Point::new(point.x, point.y + 1)] {
                if let (Some(p_ix), Some(n_ix)) = (components.ix(point), components.ix(n)) {
                    if self.is_passable(n) {
                        components.components.union(p_ix, n_ix);
                    }
                }
            }
        }
        components
    }
}

/// Cell storage goes through the value grid; out-of-bounds access panics instead of aliasing
/// another cell.
impl ValueGrid<CellType> for Grid {
    fn new(width: usize, height: usize, default_value: CellType) -> Self {
        Grid {
            cells: SimpleValueGrid::new(width, height, default_value),
        }
    }
    fn get(&self, x: i32, y: i32) -> CellType {
        self.check_bounds(x, y);
        self.cells.get(x, y)
    }
    fn set(&mut self, x: i32, y: i32, cell_type: CellType) {
        self.check_bounds(x, y);
        self.cells.set(x, y, cell_type);
    }
    fn width(&self) -> usize {
        self.cells.width()
    }
    fn height(&self) -> usize {
        self.cells.height()
    }
}

/// Connected components of a [Grid] snapshot, see [Grid::components].
#[derive(Clone, Debug)]
pub struct Components {
    rows: usize,
    cols: usize,
    components: UnionFind<usize>,
}

impl Components {
    fn ix(&self, point: Point) -> Option<usize> {
        (point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.cols
            && (point.y as usize) < self.rows)
            .then(|| point.y as usize * self.cols + point.x as usize)
    }

    /// Checks if a wall-free path between both points exists. Out-of-bounds points are never
    /// reachable.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        match (self.ix(*a), self.ix(*b)) {
            (Some(a_ix), Some(b_ix)) => self.components.equiv(a_ix, b_ix),
            _ => false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() as i32 {
            let line = (0..self.cols() as i32)
                .map(|col| self.get_point(Point::at(row, col)).symbol())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("grid contains more than one {0:?} cell")]
    DuplicateEndpoint(CellType),
}

/// Parses the format produced by [Display](fmt::Display), one row per line. Blank lines and
/// surrounding whitespace are ignored. Dimensions are taken as-is, without clamping.
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Grid, ParseGridError> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let cols = lines.first().ok_or(ParseGridError::Empty)?.chars().count();
        let mut grid: Grid = ValueGrid::new(cols, lines.len(), CellType::Empty);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(ParseGridError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell_type = CellType::from_symbol(symbol)
                    .ok_or(ParseGridError::UnknownSymbol { symbol, row, col })?;
                grid.set_point(Point::at(row as i32, col as i32), cell_type);
            }
        }
        for endpoint in [CellType::Start, CellType::End] {
            if grid.count(endpoint) > 1 {
                return Err(ParseGridError::DuplicateEndpoint(endpoint));
            }
        }
        Ok(grid)
    }
}
