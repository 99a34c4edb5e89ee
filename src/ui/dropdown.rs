use macroquad::prelude::*;

const ITEM_HEIGHT: f32 = 28.0;
const FONT_SIZE: f32 = 16.0;

/// Dropdown list used to pick a preset.
/// Picking an item arms it even if it was already selected.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether the point is over the header or, when open, over the list
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        let list_height = if self.is_open { self.items.len() as f32 * ITEM_HEIGHT } else { 0.0 };
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + ITEM_HEIGHT + list_height
    }

    fn item_at(&self, pos: (f32, f32)) -> Option<usize> {
        if !self.is_open || pos.0 < self.x || pos.0 > self.x + self.width {
            return None;
        }
        let offset = pos.1 - (self.y + ITEM_HEIGHT);
        if offset < 0.0 {
            return None;
        }
        let idx = (offset / ITEM_HEIGHT) as usize;
        (idx < self.items.len()).then_some(idx)
    }

    /// Handle a click; returns the index of the item picked this frame
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }

        let on_header = mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + ITEM_HEIGHT;
        if on_header {
            self.is_open = !self.is_open;
            return None;
        }

        let picked = self.item_at(mouse_pos);
        if let Some(idx) = picked {
            self.selected = idx;
        }
        self.is_open = false;
        picked
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header_color = if self.contains(mouse_pos) && self.item_at(mouse_pos).is_none() {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, header_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, WHITE);
        let title = fit_text(&self.items[self.selected], self.width - 30.0);
        draw_text(&title, self.x + 5.0, self.y + 20.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 16.0, self.y + 20.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let hovered = self.item_at(mouse_pos);
        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + ITEM_HEIGHT * (i + 1) as f32;
            let color = if hovered == Some(i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, color);
            draw_rectangle_lines(self.x, item_y, self.width, ITEM_HEIGHT, 1.0, DARKGRAY);
            draw_text(&fit_text(item, self.width - 10.0), self.x + 5.0, item_y + 20.0, FONT_SIZE, WHITE);
        }
    }
}

/// Truncate with an ellipsis so the text fits in `max_width` pixels
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_string();
    }
    let mut truncated = text.to_string();
    while !truncated.is_empty() && width(&format!("{truncated}...")) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}
