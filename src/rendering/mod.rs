use macroquad::prelude::*;
use crate::application::{Command, Simulation};
use crate::domain::{Grid, Preset};
use crate::ui::{BoardLayout, Button, Dropdown, PANEL_WIDTH, panel_x};

const ACTIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const INACTIVE_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every tile of the board
pub fn draw_board(grid: &Grid, layout: &BoardLayout) {
    let size = layout.cell_size;
    let draw_lines = size >= 4.0;

    for (row, col, state) in grid.iter_cells() {
        let (x, y) = layout.cell_to_screen(row, col);
        let color = if state.is_active() { ACTIVE_COLOR } else { INACTIVE_COLOR };
        draw_rectangle(x, y, size, size, color);
        if draw_lines {
            draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Ghost of the armed preset under the cursor.
/// Green when the stamp would fit, red when it would be rejected.
pub fn draw_pattern_preview(preset: Preset, layout: &BoardLayout, mouse_pos: (f32, f32)) {
    let Some((row, col)) = layout.screen_to_cell(mouse_pos.0, mouse_pos.1) else {
        return;
    };
    let fits = preset.cells_at(row, col, layout.cells).is_some();
    let (fill, outline) = if fits {
        (Color::from_rgba(0, 255, 150, 120), Color::from_rgba(0, 255, 150, 200))
    } else {
        (Color::from_rgba(255, 60, 60, 120), Color::from_rgba(255, 60, 60, 200))
    };

    let size = layout.cell_size;
    let n = layout.cells as isize;
    for &(dx, dy) in preset.offsets() {
        let r = row as isize + dy;
        let c = col as isize + dx;
        if (0..n).contains(&r) && (0..n).contains(&c) {
            let (x, y) = layout.cell_to_screen(r as usize, c as usize);
            draw_rectangle(x, y, size, size, fill);
            draw_rectangle_lines(x, y, size, size, 1.5, outline);
        }
    }
}

/// Side panel: buttons, preset picker and run statistics
pub fn draw_controls(
    sim: &Simulation,
    buttons: &[Button],
    dropdown: &Dropdown,
    pending: Option<Preset>,
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let running = sim.is_running();
    for btn in buttons {
        let enabled = match btn.command() {
            Command::Start | Command::Step => !running,
            Command::Stop => running,
            _ => true,
        };
        btn.draw(mouse_pos, enabled);
    }

    let text_x = px + 10.0;
    let stats_y = 90.0 + buttons.len() as f32 * 42.0 + 20.0;
    let (status, status_color) = if running {
        ("Running", GREEN)
    } else {
        ("Stopped", ORANGE)
    };
    let lines = [
        (format!("Generation: {}", sim.generation()), WHITE),
        (format!("Population: {}", sim.population()), WHITE),
        (format!("Tick: {} ms", sim.interval().as_millis()), LIGHTGRAY),
        (format!("Evolve: {:.2} ms", sim.last_evolution_time_ms), LIGHTGRAY),
        (status.to_string(), status_color),
    ];
    for (i, (text, color)) in lines.iter().enumerate() {
        draw_text(text, text_x, stats_y + i as f32 * 20.0, 16.0, *color);
    }

    if let Some(preset) = pending {
        let hint_y = stats_y + lines.len() as f32 * 20.0 + 10.0;
        draw_text(&format!("Placing: {preset}"), text_x, hint_y, 14.0, YELLOW);
        draw_text("RMB/Esc: cancel", text_x, hint_y + 16.0, 12.0, GRAY);
    }

    // Dropdown last so its open list covers the buttons below it
    dropdown.draw(mouse_pos);
}
