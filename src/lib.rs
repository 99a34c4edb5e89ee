// Domain layer - board, rule engine, presets
pub mod domain;

// Application layer - simulation driver, commands, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{BoardError, CellState, Grid, Preset};
pub use application::{Command, Flow, Simulation, SimulationConfig};
pub use ui::Button;
