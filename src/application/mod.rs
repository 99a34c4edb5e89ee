pub mod command;
pub mod config;
mod simulation;

pub use command::{Command, Flow};
pub use config::{ConfigError, SimulationConfig};
pub use simulation::{RunState, Simulation};
