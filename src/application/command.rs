use crate::domain::Preset;

/// Everything the front end can ask the simulation to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Step,
    Reset,
    Randomize,
    SpeedUp,
    SlowDown,
    Toggle { row: usize, col: usize },
    Stamp { preset: Preset, row: usize, col: usize },
    Quit,
}

/// What the caller should do after a command has been handled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
