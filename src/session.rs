//! Session-scoped editing and playback state. A session is driven from a single thread: the
//! caller alternates between forwarding user input and advancing the active playback with
//! [Session::step], waiting out each step's delay in between.
use crate::config::VisualizerConfig;
use crate::grid::{CellType, Dimensions, Grid};
use crate::mode::{edit_cell, Endpoints, Mode};
use crate::playback::{deliver, Clock, Playback, PlaybackDelays, PlaybackObserver, PlaybackStep};
use crate::solver::{run_traversal, Algorithm, Outcome};
use grid_util::point::Point;
use log::{debug, info, log_enabled, warn, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Please set both start and end points")]
    MissingEndpoints,

    #[error("a visualization is already running")]
    Busy,
}

#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    mode: Mode,
    endpoints: Endpoints,
    config: VisualizerConfig,
    running: bool,
    playback: Option<Playback>,
    message: Option<String>,
}

impl Default for Session {
    fn default() -> Session {
        Session::new(VisualizerConfig::default())
    }
}

impl Session {
    pub fn new(config: VisualizerConfig) -> Session {
        Session {
            grid: Grid::from_dimensions(config.dimensions),
            mode: Mode::default(),
            endpoints: Endpoints::default(),
            config,
            running: false,
            playback: None,
            message: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The last user-facing status: the outcome of the latest run, or why it could not start.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn ensure_idle(&self, action: &str) -> Result<(), SessionError> {
        if self.running {
            warn!("Ignoring {} while a visualization is running", action);
            Err(SessionError::Busy)
        } else {
            Ok(())
        }
    }

    /// Forwards a click on a cell to the editor. `coord` must lie on the grid.
    pub fn click(&mut self, coord: Point) -> Result<(), SessionError> {
        self.ensure_idle("click")?;
        let mode = edit_cell(&mut self.grid, self.mode, &mut self.endpoints, coord);
        debug!("Click on {} in mode {} -> {}", coord, self.mode, mode);
        self.mode = mode;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<(), SessionError> {
        self.ensure_idle("mode change")?;
        self.mode = mode;
        Ok(())
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), SessionError> {
        self.ensure_idle("algorithm change")?;
        self.config.algorithm = algorithm;
        Ok(())
    }

    pub fn set_delays(&mut self, delays: PlaybackDelays) -> Result<(), SessionError> {
        self.ensure_idle("delay change")?;
        self.config.delays = delays;
        Ok(())
    }

    /// Replaces the grid with an empty one of the (clamped) requested size. Start and end are
    /// forgotten, so editing starts over with placing the start.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), SessionError> {
        self.ensure_idle("resize")?;
        self.config.dimensions = Dimensions::clamped(rows, cols);
        self.grid = Grid::from_dimensions(self.config.dimensions);
        self.endpoints = Endpoints::default();
        self.mode = Mode::default();
        info!(
            "Reinitialized grid to {}x{}",
            self.config.dimensions.rows, self.config.dimensions.cols
        );
        Ok(())
    }

    pub fn clear_path(&mut self) -> Result<(), SessionError> {
        self.ensure_idle("clear path")?;
        self.grid.reset_where(|c| c.is_overlay());
        Ok(())
    }

    pub fn clear_walls(&mut self) -> Result<(), SessionError> {
        self.ensure_idle("clear walls")?;
        self.grid.reset_where(|c| c == CellType::Wall);
        Ok(())
    }

    /// Runs the configured algorithm and arms the playback of its result. The overlay of any
    /// earlier run is cleared first. Until the playback completes every other mutation is
    /// rejected with [SessionError::Busy].
    pub fn visualize(&mut self) -> Result<(), SessionError> {
        self.ensure_idle("visualize")?;
        let Some((start, end)) = self.endpoints.both() else {
            let err = SessionError::MissingEndpoints;
            warn!("{}", err);
            self.message = Some(err.to_string());
            return Err(err);
        };
        self.running = true;
        self.message = None;
        self.grid.reset_where(|c| c.is_overlay());
        if log_enabled!(Level::Debug) {
            let reachable = self.grid.components().reachable(&start, &end);
            debug!("{} reachable from {}: {}", end, start, reachable);
        }
        let result = run_traversal(&self.grid, start, end, self.config.algorithm);
        self.playback = Some(Playback::new(result, self.config.delays));
        Ok(())
    }

    /// Advances the active playback by one step and applies it to the grid. Stale visited steps
    /// are skipped. Returns `None` when nothing is playing.
    ///
    /// The session stays running while the caller handles the [PlaybackStep::Complete] step.
    /// The flag is cleared by the following call, which returns `None`, so edits are only
    /// accepted again once completion has been delivered.
    pub fn step(&mut self) -> Option<PlaybackStep> {
        let playback = self.playback.as_mut()?;
        loop {
            let Some(step) = playback.next() else {
                self.playback = None;
                self.running = false;
                return None;
            };
            if !step.apply_to(&mut self.grid) {
                continue;
            }
            if let PlaybackStep::Complete(outcome) = step {
                self.message = Some(outcome.to_string());
            }
            return Some(step);
        }
    }

    /// Drives the active playback to the end, notifying `observer` and pacing with `clock`.
    pub fn run_to_completion<O, C>(&mut self, observer: &mut O, clock: &mut C) -> Option<Outcome>
    where
        O: PlaybackObserver + ?Sized,
        C: Clock + ?Sized,
    {
        let mut outcome = None;
        while let Some(step) = self.step() {
            deliver(&step, observer, clock);
            if let PlaybackStep::Complete(o) = step {
                outcome = Some(o);
            }
        }
        outcome
    }
}
