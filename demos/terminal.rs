use grid_traversal::{
    Algorithm, Mode, Outcome, PlaybackObserver, RowCol, Session, ThreadClock, VisualizerConfig,
};
use grid_util::point::Point;
use std::env;

// In this example a 10x16 grid is edited through the same clicks a user would make:
// first the start, then the end, then a wall with a single gap. The search is then
// replayed in the terminal, redrawing the grid after every step.
//
// Run with `cargo run --example terminal -- dfs` to use depth-first search.

struct TerminalRenderer {
    frame: usize,
}

impl TerminalRenderer {
    fn redraw(&mut self, session_grid: &str) {
        self.frame += 1;
        // Clears the screen and moves the cursor home
        print!("\x1b[2J\x1b[H{}", session_grid);
    }
}

impl PlaybackObserver for TerminalRenderer {
    fn on_complete(&mut self, outcome: &Outcome) {
        println!("{} ({} frames)", outcome, self.frame);
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let algorithm = env::args()
        .nth(1)
        .map(|arg| arg.parse::<Algorithm>())
        .transpose()
        .unwrap_or_else(|err| {
            eprintln!("{err}");
            std::process::exit(2);
        })
        .unwrap_or_default();

    let config = VisualizerConfig::default()
        .with_dimensions(10, 16)
        .with_algorithm(algorithm);
    let mut session = Session::new(config);
    session.click(Point::at(1, 1)).unwrap();
    session.click(Point::at(8, 14)).unwrap();
    assert_eq!(session.mode(), Mode::EditingWalls);
    for row in 0..10 {
        if row != 7 {
            session.click(Point::at(row, 8)).unwrap();
        }
    }

    session.visualize().unwrap();
    let mut renderer = TerminalRenderer { frame: 0 };
    let mut clock = ThreadClock;
    while let Some(step) = session.step() {
        renderer.redraw(&session.grid().to_string());
        grid_traversal::playback::deliver(&step, &mut renderer, &mut clock);
    }
}
