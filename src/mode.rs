//! How a click on a cell edits the grid, depending on the current [Mode].
use crate::grid::{CellType, Grid};
use core::fmt;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use log::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    PlacingStart,
    PlacingEnd,
    EditingWalls,
}

impl Mode {
    /// The mode entered after a successful click. Wall editing never advances on its own.
    pub fn next(&self) -> Mode {
        match self {
            Mode::PlacingStart => Mode::PlacingEnd,
            Mode::PlacingEnd | Mode::EditingWalls => Mode::EditingWalls,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::PlacingStart => write!(f, "placing-start"),
            Mode::PlacingEnd => write!(f, "placing-end"),
            Mode::EditingWalls => write!(f, "editing-walls"),
        }
    }
}

/// The currently designated start and end cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Endpoints {
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Endpoints {
    /// Both endpoints, if both are set.
    pub fn both(&self) -> Option<(Point, Point)> {
        self.start.zip(self.end)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickResult {
    pub grid: Grid,
    pub mode: Mode,
    pub endpoints: Endpoints,
}

/// Moves the `role` endpoint (start or end) to `coord`, clearing its previous cell. Clicking the
/// other endpoint leaves everything unchanged.
fn place_endpoint(
    grid: &mut Grid,
    mode: Mode,
    endpoints: &mut Endpoints,
    coord: Point,
    role: CellType,
) -> Mode {
    let other = if role == CellType::Start {
        CellType::End
    } else {
        CellType::Start
    };
    if grid.get_point(coord) == other {
        debug!("{} is the {:?} cell, ignoring click", coord, other);
        return mode;
    }
    let slot = if role == CellType::Start {
        &mut endpoints.start
    } else {
        &mut endpoints.end
    };
    if let Some(previous) = slot.replace(coord) {
        grid.set_point(previous, CellType::Empty);
    }
    grid.set_point(coord, role);
    debug!("Placed {:?} at {}", role, coord);
    mode.next()
}

/// Applies a click on `coord` in place and returns the mode to continue in. `coord` must lie on
/// the grid.
pub fn edit_cell(grid: &mut Grid, mode: Mode, endpoints: &mut Endpoints, coord: Point) -> Mode {
    match mode {
        Mode::PlacingStart => place_endpoint(grid, mode, endpoints, coord, CellType::Start),
        Mode::PlacingEnd => place_endpoint(grid, mode, endpoints, coord, CellType::End),
        Mode::EditingWalls => {
            match grid.get_point(coord) {
                CellType::Start | CellType::End => {}
                CellType::Wall => grid.set_point(coord, CellType::Empty),
                _ => grid.set_point(coord, CellType::Wall),
            }
            mode
        }
    }
}

/// Applies a click on `coord` to the grid. Takes the grid by value and hands back the edited
/// one, see [edit_cell] for the in-place variant. `coord` must lie on the grid.
pub fn apply_click(
    mut grid: Grid,
    mode: Mode,
    mut endpoints: Endpoints,
    coord: Point,
) -> ClickResult {
    let mode = edit_cell(&mut grid, mode, &mut endpoints, coord);
    ClickResult {
        grid,
        mode,
        endpoints,
    }
}
