use clap::Parser;
use life_board::{
    Flow, Preset, Simulation, SimulationConfig,
    application::config::{
        DEFAULT_FILL_ONE_IN, DEFAULT_INTERVAL_MS, DEFAULT_SIZE, MAX_INTERVAL_MS, MIN_INTERVAL_MS,
    },
    input, rendering,
    ui::{self, BoardLayout, Dropdown},
};
use log::{error, info, warn};
use macroquad::prelude::*;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "life_board", about = "Conway's Game of Life on a bounded square board")]
struct Args {
    /// Side length of the board in tiles
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Randomize activates each tile with probability 1/K
    #[arg(long, value_name = "K", default_value_t = DEFAULT_FILL_ONE_IN)]
    fill_one_in: u32,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    #[arg(long, default_value_t = MIN_INTERVAL_MS)]
    min_interval_ms: u64,

    #[arg(long, default_value_t = MAX_INTERVAL_MS)]
    max_interval_ms: u64,
}

impl Args {
    fn into_config(self) -> Result<SimulationConfig, life_board::application::ConfigError> {
        SimulationConfig::default()
            .with_size(self.size)
            .with_fill_one_in(self.fill_one_in)?
            .with_interval(Duration::from_millis(self.interval_ms))
            .with_interval_bounds(
                Duration::from_millis(self.min_interval_ms),
                Duration::from_millis(self.max_interval_ms),
            )
            .validate()
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 860,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut sim = match Args::parse().into_config().and_then(Simulation::new) {
        Ok(sim) => sim,
        Err(err) => {
            error!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };
    let config = sim.config();
    info!(
        "starting {n}x{n} board, tick {:?}, fill probability {:.4}",
        config.interval,
        config.fill_probability,
        n = config.size
    );

    let preset_names: Vec<String> = Preset::ALL.iter().map(|p| p.name().to_string()).collect();
    let mut dropdown = Dropdown::new(ui::panel_x() + 10.0, 40.0, ui::PANEL_WIDTH - 20.0, "Preset", preset_names);
    let mut pending: Option<Preset> = None;

    loop {
        let mouse_pos = mouse_position();
        let layout = BoardLayout::current(sim.size());
        dropdown.set_position(ui::panel_x() + 10.0, 40.0);
        let buttons = ui::create_buttons();

        // Clicks inside the open list belong to the dropdown, not the buttons under it
        let dropdown_had_focus = dropdown.is_open() || dropdown.contains(mouse_pos);
        if let Some(idx) = dropdown.update(mouse_pos) {
            pending = Some(Preset::ALL[idx]);
            info!("armed {} for placement", Preset::ALL[idx]);
        }

        if pending.is_some() && input::cancel_placement() {
            pending = None;
            dropdown.close();
        }

        let mut commands = Vec::new();
        if !dropdown_had_focus {
            commands.extend(input::process_button_clicks(&buttons, mouse_pos));
            if let Some(command) = input::board_click(&layout, mouse_pos, pending) {
                if matches!(command, life_board::Command::Stamp { .. }) {
                    pending = None;
                }
                commands.push(command);
            }
        }
        commands.extend(input::process_keyboard_input(sim.is_running()));

        for command in commands {
            match sim.dispatch(command) {
                Ok(Flow::Quit) => return,
                Ok(Flow::Continue) => {}
                Err(err) => warn!("{command:?} ignored: {err}"),
            }
        }

        sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_board(sim.grid(), &layout);
        if let Some(preset) = pending {
            rendering::draw_pattern_preview(preset, &layout, mouse_pos);
        }
        rendering::draw_controls(&sim, &buttons, &dropdown, pending, mouse_pos);

        next_frame().await;
    }
}
