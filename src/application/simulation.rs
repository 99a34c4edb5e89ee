use super::command::{Command, Flow};
use super::config::{ConfigError, SPEED_STEP_MS, SimulationConfig};
use crate::domain::{BoardError, CellState, Grid, Preset, rules};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// Simulation owns the board and drives it forward.
/// The front end holds one of these and feeds it commands and frame times.
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    state: RunState,
    generation: u64,
    interval: Duration,
    update_timer: Duration,
    rng: StdRng,
    /// Wall time spent computing the last generation
    pub last_evolution_time_ms: f32,
}

impl Simulation {
    /// Create a stopped simulation with an empty board.
    /// The config is validated first, so a bad one never reaches the timer.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Same as [`Simulation::new`] but with a fixed seed for randomize
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimulationConfig, rng: StdRng) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        Ok(Self {
            grid: Grid::new(config.size),
            state: RunState::Stopped,
            generation: 0,
            interval: config.clamp_interval(config.interval),
            update_timer: Duration::ZERO,
            rng,
            last_evolution_time_ms: 0.0,
            config,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        self.grid.get(row, col)
    }

    pub fn set_state(&mut self, row: usize, col: usize, value: CellState) -> Result<(), BoardError> {
        self.grid.set(row, col, value)
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<CellState, BoardError> {
        self.grid.toggle(row, col)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Begin periodic advances
    pub fn start(&mut self) {
        if self.state == RunState::Stopped {
            info!("simulation started at generation {}", self.generation);
            self.state = RunState::Running;
            self.update_timer = Duration::ZERO;
        }
    }

    /// Halt periodic advances. Time accumulated toward the next tick is dropped.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            info!("simulation stopped at generation {}", self.generation);
            self.state = RunState::Stopped;
        }
        self.update_timer = Duration::ZERO;
    }

    /// Advance exactly one generation; only allowed while stopped
    pub fn step(&mut self) -> Result<(), BoardError> {
        if self.is_running() {
            return Err(BoardError::StepWhileRunning);
        }
        self.advance();
        Ok(())
    }

    /// Clear the board, zero the generation counter and stop
    pub fn reset(&mut self) {
        self.stop();
        self.grid.reset();
        self.generation = 0;
        info!("board reset");
    }

    /// Activate each cell with `probability`, leaving active cells alone
    pub fn randomize(&mut self, probability: f64) -> Result<(), BoardError> {
        self.grid.randomize(probability, &mut self.rng)?;
        info!(
            "board randomized with p={probability:.4}, population {}",
            self.grid.population()
        );
        Ok(())
    }

    /// Randomize using the configured probability
    pub fn randomize_default(&mut self) -> Result<(), BoardError> {
        self.randomize(self.config.fill_probability)
    }

    pub fn stamp(&mut self, preset: Preset, row: usize, col: usize) -> Result<(), BoardError> {
        preset.stamp(&mut self.grid, row, col)?;
        info!("stamped {preset} at ({row}, {col})");
        Ok(())
    }

    pub fn stamp_pattern(&mut self, name: &str, row: usize, col: usize) -> Result<(), BoardError> {
        self.stamp(name.parse()?, row, col)
    }

    /// Compute the next generation into a fresh buffer and swap it in
    pub fn advance(&mut self) {
        let start = Instant::now();
        self.grid = rules::advance(&self.grid);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        debug!(
            "generation {} population {}",
            self.generation,
            self.grid.population()
        );
    }

    /// Set the tick interval, clamped to the configured range
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = self.config.clamp_interval(interval);
    }

    /// Shift the tick interval by `delta_ms`; negative is faster
    pub fn adjust_speed(&mut self, delta_ms: i64) {
        let current = self.interval.as_millis() as i64;
        let requested = current.saturating_add(delta_ms).max(0) as u64;
        self.set_interval(Duration::from_millis(requested));
        debug!("tick interval now {:?}", self.interval);
    }

    /// Feed elapsed frame time; performs at most one advance.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.is_running() {
            return false;
        }

        self.update_timer += elapsed;
        if self.update_timer >= self.interval {
            self.advance();
            self.update_timer = Duration::ZERO;
            return true;
        }
        false
    }

    /// Apply one command from the front end
    pub fn dispatch(&mut self, command: Command) -> Result<Flow, BoardError> {
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Step => self.step()?,
            Command::Reset => self.reset(),
            Command::Randomize => self.randomize_default()?,
            Command::SpeedUp => self.adjust_speed(-(SPEED_STEP_MS as i64)),
            Command::SlowDown => self.adjust_speed(SPEED_STEP_MS as i64),
            Command::Toggle { row, col } => {
                self.toggle_cell(row, col)?;
            }
            Command::Stamp { preset, row, col } => self.stamp(preset, row, col)?,
            Command::Quit => {
                info!("quit requested");
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }
}
