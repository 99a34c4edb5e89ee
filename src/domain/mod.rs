mod cell;
mod error;
mod grid;
pub mod patterns;
pub mod rules;

pub use cell::CellState;
pub use error::BoardError;
pub use grid::Grid;
pub use patterns::Preset;
pub use rules::{count_active_neighbors, next_generation, next_generation_parallel};
