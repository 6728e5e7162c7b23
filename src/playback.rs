//! Turns a [TraversalResult] into a paced sequence of cell updates for rendering: first every
//! discovered cell in discovery order, then the path from start to end.
use crate::grid::{CellType, Grid};
use crate::solver::{Outcome, TraversalResult};
use crate::{DEFAULT_PATH_DELAY_MS, DEFAULT_VISITED_DELAY_MS};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use log::{debug, info};
use std::iter::FusedIterator;
use std::time::Duration;

/// Time between consecutive steps of each phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaybackDelays {
    pub visited: Duration,
    pub path: Duration,
}

impl Default for PlaybackDelays {
    fn default() -> PlaybackDelays {
        PlaybackDelays {
            visited: Duration::from_millis(DEFAULT_VISITED_DELAY_MS),
            path: Duration::from_millis(DEFAULT_PATH_DELAY_MS),
        }
    }
}

impl PlaybackDelays {
    /// No pacing at all, useful for headless runs.
    pub const ZERO: PlaybackDelays = PlaybackDelays {
        visited: Duration::ZERO,
        path: Duration::ZERO,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackStep {
    Visited { coord: Point, delay: Duration },
    Path { coord: Point, delay: Duration },
    Complete(Outcome),
}

impl PlaybackStep {
    /// How long to wait after this step was emitted.
    pub fn delay(&self) -> Duration {
        match self {
            PlaybackStep::Visited { delay, .. } | PlaybackStep::Path { delay, .. } => *delay,
            PlaybackStep::Complete(_) => Duration::ZERO,
        }
    }

    /// Applies the step to the live grid. Returns `false` if the step is stale and must be
    /// skipped: a visited step only ever paints a cell that is still empty.
    pub fn apply_to(&self, grid: &mut Grid) -> bool {
        match *self {
            PlaybackStep::Visited { coord, .. } => {
                if grid.get_point(coord) != CellType::Empty {
                    return false;
                }
                grid.set_point(coord, CellType::Visited);
                true
            }
            PlaybackStep::Path { coord, .. } => {
                grid.set_point(coord, CellType::Path);
                true
            }
            PlaybackStep::Complete(_) => true,
        }
    }
}

/// A lazy, finite, non-restartable script of [PlaybackStep]s. Owns the result it replays; the
/// only state is a cursor into it.
#[derive(Clone, Debug)]
pub struct Playback {
    result: TraversalResult,
    delays: PlaybackDelays,
    cursor: usize,
}

impl Playback {
    pub fn new(result: TraversalResult, delays: PlaybackDelays) -> Playback {
        Playback {
            result,
            delays,
            cursor: 0,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.result.outcome()
    }

    /// Interior path cells; start and end are never repainted.
    fn path_interior(&self) -> &[Point] {
        match self.result.path() {
            [_, interior @ .., _] if self.result.found() => interior,
            _ => &[],
        }
    }

    fn step_count(&self) -> usize {
        self.result.visited().len() + self.path_interior().len() + 1
    }
}

impl Iterator for Playback {
    type Item = PlaybackStep;

    fn next(&mut self) -> Option<PlaybackStep> {
        let n_visited = self.result.visited().len();
        let interior = self.path_interior();
        let step = if self.cursor < n_visited {
            PlaybackStep::Visited {
                coord: self.result.visited()[self.cursor],
                delay: self.delays.visited,
            }
        } else if self.cursor < n_visited + interior.len() {
            PlaybackStep::Path {
                coord: interior[self.cursor - n_visited],
                delay: self.delays.path,
            }
        } else if self.cursor == n_visited + interior.len() {
            PlaybackStep::Complete(self.outcome())
        } else {
            return None;
        };
        self.cursor += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.step_count().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Playback {}

impl FusedIterator for Playback {}

/// Receives the steps of a replay. All methods default to doing nothing.
pub trait PlaybackObserver {
    fn on_visited_step(&mut self, _coord: Point) {}
    fn on_path_step(&mut self, _coord: Point) {}
    fn on_complete(&mut self, _outcome: &Outcome) {}
}

impl PlaybackObserver for () {}

/// Source of the pause between steps.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Clock for NoDelay {
    fn sleep(&mut self, _duration: Duration) {}
}

/// Notifies the observer of an already applied step and waits out its delay.
pub fn deliver<O, C>(step: &PlaybackStep, observer: &mut O, clock: &mut C)
where
    O: PlaybackObserver + ?Sized,
    C: Clock + ?Sized,
{
    match step {
        PlaybackStep::Visited { coord, .. } => observer.on_visited_step(*coord),
        PlaybackStep::Path { coord, .. } => observer.on_path_step(*coord),
        PlaybackStep::Complete(outcome) => {
            info!("{}", outcome);
            observer.on_complete(outcome);
        }
    }
    clock.sleep(step.delay());
}

/// Replays `result` onto `live_grid`. Any overlay from an earlier run is cleared first. Visited
/// steps whose cell is no longer empty are dropped without notification or delay.
pub fn replay<O, C>(
    result: TraversalResult,
    live_grid: &mut Grid,
    observer: &mut O,
    clock: &mut C,
    delays: PlaybackDelays,
) -> Outcome
where
    O: PlaybackObserver + ?Sized,
    C: Clock + ?Sized,
{
    live_grid.reset_where(|c| c.is_overlay());
    let outcome = result.outcome();
    for step in Playback::new(result, delays) {
        if !step.apply_to(live_grid) {
            debug!("Skipping stale step {:?}", step);
            continue;
        }
        deliver(&step, observer, clock);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::RowCol;
    use crate::solver::{run_traversal, Algorithm};

    #[derive(Default)]
    struct Recorder {
        visited: Vec<Point>,
        path: Vec<Point>,
        complete: Vec<Outcome>,
    }

    impl PlaybackObserver for Recorder {
        fn on_visited_step(&mut self, coord: Point) {
            self.visited.push(coord);
        }
        fn on_path_step(&mut self, coord: Point) {
            self.path.push(coord);
        }
        fn on_complete(&mut self, outcome: &Outcome) {
            self.complete.push(*outcome);
        }
    }

    #[derive(Default)]
    struct RecordingClock(Vec<Duration>);

    impl Clock for RecordingClock {
        fn sleep(&mut self, duration: Duration) {
            self.0.push(duration);
        }
    }

    #[test]
    fn script_order_and_length() {
        let result = TraversalResult::new(
            vec![Point::at(0, 1), Point::at(1, 0), Point::at(0, 2)],
            vec![Point::at(0, 0), Point::at(0, 1), Point::at(0, 2)],
            true,
        );
        let playback = Playback::new(result, PlaybackDelays::default());
        assert_eq!(playback.len(), 5);
        let steps = playback.collect::<Vec<_>>();
        let visited = Duration::from_millis(DEFAULT_VISITED_DELAY_MS);
        assert_eq!(
            steps,
            vec![
                PlaybackStep::Visited {
                    coord: Point::at(0, 1),
                    delay: visited
                },
                PlaybackStep::Visited {
                    coord: Point::at(1, 0),
                    delay: visited
                },
                PlaybackStep::Visited {
                    coord: Point::at(0, 2),
                    delay: visited
                },
                PlaybackStep::Path {
                    coord: Point::at(0, 1),
                    delay: Duration::from_millis(DEFAULT_PATH_DELAY_MS)
                },
                PlaybackStep::Complete(Outcome::Found { edge_count: 2 }),
            ]
        );
    }

    #[test]
    fn playback_is_not_restartable() {
        let result = TraversalResult::new(vec![], vec![], false);
        let mut playback = Playback::new(result, PlaybackDelays::ZERO);
        assert_eq!(playback.next(), Some(PlaybackStep::Complete(Outcome::NoPath)));
        assert_eq!(playback.next(), None);
        assert_eq!(playback.next(), None);
    }

    /// Replays a breadth-first search on
    ///  ___
    /// |S.E|
    /// |...|
    ///  ___
    /// The end cell is discovered but never repainted.
    #[test]
    fn replay_paints_overlay() {
        let mut grid: Grid = "S.E\n...".parse().unwrap();
        let result = run_traversal(
            &grid,
            Point::at(0, 0),
            Point::at(0, 2),
            Algorithm::BreadthFirst,
        );
        assert_eq!(
            result.visited(),
            &[Point::at(0, 1), Point::at(1, 0), Point::at(0, 2), Point::at(1, 1)]
        );
        let mut recorder = Recorder::default();
        let mut clock = RecordingClock::default();
        let outcome = replay(
            result,
            &mut grid,
            &mut recorder,
            &mut clock,
            PlaybackDelays::default(),
        );
        assert_eq!(outcome, Outcome::Found { edge_count: 2 });
        assert_eq!(
            recorder.visited,
            vec![Point::at(0, 1), Point::at(1, 0), Point::at(1, 1)]
        );
        assert_eq!(recorder.path, vec![Point::at(0, 1)]);
        assert_eq!(recorder.complete, vec![outcome]);
        assert_eq!(grid.to_string(), "S*E\noo.\n");
        assert_eq!(
            clock.0,
            vec![
                Duration::from_millis(20),
                Duration::from_millis(20),
                Duration::from_millis(20),
                Duration::from_millis(50),
                Duration::ZERO,
            ]
        );
    }

    #[test]
    fn replay_clears_previous_overlay() {
        let mut grid: Grid = "S#.\n.#.\noo*\n.#E".parse().unwrap();
        let result = run_traversal(&grid, Point::at(0, 0), Point::at(3, 2), Algorithm::DepthFirst);
        let mut recorder = Recorder::default();
        let outcome = replay(
            result,
            &mut grid,
            &mut recorder,
            &mut NoDelay,
            PlaybackDelays::ZERO,
        );
        assert_eq!(outcome, Outcome::Found { edge_count: 5 });
        assert_eq!(grid.count(CellType::Path), 4);
        assert_eq!(grid.count(CellType::Start), 1);
        assert_eq!(grid.count(CellType::End), 1);
    }

    #[test]
    fn unreachable_replay_reports_no_path() {
        let mut grid: Grid = "S#E\n##.".parse().unwrap();
        let result = run_traversal(
            &grid,
            Point::at(0, 0),
            Point::at(0, 2),
            Algorithm::BreadthFirst,
        );
        let mut recorder = Recorder::default();
        let outcome = replay(
            result,
            &mut grid,
            &mut recorder,
            &mut NoDelay,
            PlaybackDelays::ZERO,
        );
        assert_eq!(outcome, Outcome::NoPath);
        assert_eq!(outcome.to_string(), "No path found!");
        assert!(recorder.visited.is_empty());
        assert!(recorder.path.is_empty());
        assert_eq!(recorder.complete, vec![Outcome::NoPath]);
    }
}
