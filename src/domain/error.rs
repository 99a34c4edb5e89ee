use thiserror::Error;

/// Errors reported by board operations.
/// None of these are fatal: callers log them and keep running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("unknown pattern {0:?}")]
    InvalidPatternName(String),

    #[error("{pattern} does not fit on the board when anchored at ({row}, {col})")]
    PatternOutOfBounds {
        pattern: &'static str,
        row: usize,
        col: usize,
    },

    #[error("probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),

    #[error("cannot single-step while the simulation is running")]
    StepWhileRunning,
}
