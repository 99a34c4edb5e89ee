mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use crate::application::Command;
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 34.0;
pub const BOARD_MARGIN: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Where the board sits on screen and how large each tile is
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub cells: usize,
}

impl BoardLayout {
    /// Fit an `cells`x`cells` board into the given area, keeping tiles square
    pub fn fit(area_width: f32, area_height: f32, cells: usize) -> Self {
        let usable = (area_width.min(area_height) - 2.0 * BOARD_MARGIN).max(0.0);
        let cell_size = if cells == 0 { 0.0 } else { (usable / cells as f32).floor().max(1.0) };
        let board = cell_size * cells as f32;
        Self {
            origin_x: ((area_width - board) / 2.0).max(0.0),
            origin_y: ((area_height - board) / 2.0).max(0.0),
            cell_size,
            cells,
        }
    }

    /// Layout for the current window
    pub fn current(cells: usize) -> Self {
        Self::fit(screen_width() - PANEL_WIDTH, screen_height(), cells)
    }

    /// Convert a screen position to (row, col), if it lands on the board
    pub fn screen_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let col = ((x - self.origin_x) / self.cell_size).floor();
        let row = ((y - self.origin_y) / self.cell_size).floor();
        let n = self.cells as f32;
        (row >= 0.0 && col >= 0.0 && row < n && col < n).then(|| (row as usize, col as usize))
    }

    /// Top-left screen corner of a tile
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }
}

/// Create the control buttons, one per command, stacked in the side panel
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    let labelled = [
        ("Start", Command::Start),
        ("Stop", Command::Stop),
        ("Step", Command::Step),
        ("Random", Command::Randomize),
        ("Speed +", Command::SpeedUp),
        ("Speed -", Command::SlowDown),
        ("Reset", Command::Reset),
        ("Quit", Command::Quit),
    ];
    labelled
        .into_iter()
        .enumerate()
        .map(|(i, (text, command))| {
            let y = 90.0 + i as f32 * (BUTTON_HEIGHT + 8.0);
            Button::new(px, y, width, BUTTON_HEIGHT, text, command)
        })
        .collect()
}
