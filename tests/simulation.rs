use life_board::domain::rules::{PARALLEL_THRESHOLD, next_generation};
use life_board::{BoardError, CellState, Command, Flow, Grid, Preset, Simulation, SimulationConfig};

fn sim(size: usize) -> Simulation {
    Simulation::with_seed(SimulationConfig::default().with_size(size), 2016).unwrap()
}

fn active_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter_cells()
        .filter(|(_, _, s)| s.is_active())
        .map(|(r, c, _)| (r, c))
        .collect()
}

#[test]
fn empty_board_stays_empty() {
    let mut sim = sim(30);
    for _ in 0..3 {
        sim.advance();
    }
    assert_eq!(sim.population(), 0);
    assert_eq!(sim.generation(), 3);
}

#[test]
fn isolated_cell_dies() {
    let mut sim = sim(10);
    sim.set_state(4, 4, CellState::Active).unwrap();
    sim.advance();
    assert_eq!(sim.state(4, 4), Ok(CellState::Inactive));
}

#[test]
fn block_is_a_still_life() {
    let mut sim = sim(10);
    for (r, c) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
        sim.set_state(r, c, CellState::Active).unwrap();
    }
    let before = sim.grid().clone();
    for _ in 0..10 {
        sim.advance();
        assert_eq!(sim.grid(), &before);
    }
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let mut sim = sim(25);
    sim.stamp_pattern("Glider", 10, 10).unwrap();
    let start = active_cells(sim.grid());

    for _ in 0..4 {
        sim.step().unwrap();
    }

    let shifted: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(active_cells(sim.grid()), shifted);
    assert_eq!(sim.generation(), 4);
}

#[test]
fn glider_dies_into_a_block_at_the_corner() {
    // No wraparound: a glider running into the corner settles as a still life
    let mut sim = sim(8);
    sim.stamp(Preset::Glider, 1, 1).unwrap();
    for _ in 0..40 {
        sim.advance();
    }
    let settled = sim.grid().clone();
    sim.advance();
    assert_eq!(sim.grid(), &settled);
    assert_eq!(sim.population(), 4);
}

#[test]
fn stamp_is_all_or_nothing() {
    let mut sim = sim(20);
    sim.set_state(0, 0, CellState::Active).unwrap();
    let before = sim.grid().clone();

    let err = sim.stamp(Preset::Tumbler, 18, 10).unwrap_err();
    assert!(matches!(err, BoardError::PatternOutOfBounds { pattern: "Tumbler", .. }));
    assert_eq!(sim.grid(), &before);

    sim.stamp(Preset::Tumbler, 10, 10).unwrap();
    assert_eq!(sim.population(), 1 + 22);
}

#[test]
fn every_preset_fits_on_a_large_board() {
    for preset in Preset::ALL {
        let mut sim = sim(60);
        sim.stamp(preset, 30, 30).unwrap();
        assert_eq!(sim.population(), preset.offsets().len(), "{preset}");
    }
}

#[test]
fn reset_clears_board_and_counter() {
    let mut sim = sim(15);
    sim.randomize(0.5).unwrap();
    sim.dispatch(Command::Start).unwrap();
    sim.advance();
    sim.dispatch(Command::Reset).unwrap();

    assert_eq!(sim.generation(), 0);
    assert!(!sim.is_running());
    for r in 0..15 {
        for c in 0..15 {
            assert_eq!(sim.state(r, c), Ok(CellState::Inactive));
        }
    }
}

#[test]
fn randomize_probability_bounds() {
    let mut sim = sim(12);
    sim.randomize(0.0).unwrap();
    assert_eq!(sim.population(), 0);
    sim.randomize(1.0).unwrap();
    assert_eq!(sim.population(), 144);
    assert_eq!(sim.randomize(2.0), Err(BoardError::InvalidProbability(2.0)));
}

#[test]
fn out_of_bounds_access_is_reported() {
    let mut sim = sim(12);
    assert_eq!(
        sim.state(12, 0),
        Err(BoardError::OutOfBounds { row: 12, col: 0, size: 12 })
    );
    assert!(sim.set_state(0, 12, CellState::Active).is_err());
    assert_eq!(sim.population(), 0);
}

#[test]
fn quit_ends_the_session() {
    let mut sim = sim(5);
    assert_eq!(sim.dispatch(Command::Randomize), Ok(Flow::Continue));
    assert_eq!(sim.dispatch(Command::Quit), Ok(Flow::Quit));
}

#[test]
fn large_boards_advance_like_the_serial_engine() {
    let mut sim = sim(PARALLEL_THRESHOLD);
    sim.randomize(0.3).unwrap();
    for _ in 0..3 {
        let expected = next_generation(sim.grid());
        sim.advance();
        assert_eq!(sim.grid(), &expected);
    }
    assert_eq!(sim.generation(), 3);
}
