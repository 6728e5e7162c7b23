use crate::grid::Dimensions;
use crate::playback::PlaybackDelays;
use crate::solver::Algorithm;

/// Settings chosen by the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub dimensions: Dimensions,
    pub algorithm: Algorithm,
    pub delays: PlaybackDelays,
}

impl VisualizerConfig {
    /// Requested dimensions are clamped to the supported range.
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> VisualizerConfig {
        self.dimensions = Dimensions::clamped(rows, cols);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> VisualizerConfig {
        self.algorithm = algorithm;
        self
    }

    pub fn with_delays(mut self, delays: PlaybackDelays) -> VisualizerConfig {
        self.delays = delays;
        self
    }
}
