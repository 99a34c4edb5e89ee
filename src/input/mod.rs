//! Turns mouse and keyboard events into simulation commands.

use macroquad::prelude::*;
use crate::application::Command;
use crate::domain::Preset;
use crate::ui::{BoardLayout, Button};

/// Commands for buttons clicked this frame
pub fn process_button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(Button::command)
        .collect()
}

/// Commands for keys pressed this frame.
/// Space flips between start and stop depending on `running`.
pub fn process_keyboard_input(running: bool) -> Vec<Command> {
    let play_pause = if running { Command::Stop } else { Command::Start };
    let bindings = [
        (KeyCode::Space, play_pause),
        (KeyCode::S, Command::Step),
        (KeyCode::R, Command::Randomize),
        (KeyCode::C, Command::Reset),
        (KeyCode::Up, Command::SpeedUp),
        (KeyCode::Down, Command::SlowDown),
        (KeyCode::Q, Command::Quit),
    ];

    bindings
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| command)
        .collect()
}

/// A left click on the board either stamps the armed preset or toggles the tile
pub fn board_click(
    layout: &BoardLayout,
    mouse_pos: (f32, f32),
    pending: Option<Preset>,
) -> Option<Command> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    let (row, col) = layout.screen_to_cell(mouse_pos.0, mouse_pos.1)?;
    Some(match pending {
        Some(preset) => Command::Stamp { preset, row, col },
        None => Command::Toggle { row, col },
    })
}

/// Right click or Escape drops the armed preset
pub fn cancel_placement() -> bool {
    is_mouse_button_pressed(MouseButton::Right) || is_key_pressed(KeyCode::Escape)
}
