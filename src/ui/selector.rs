use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 28.0;

fn hit(x: f32, y: f32, w: f32, h: f32, pos: (f32, f32)) -> bool {
    pos.0 >= x && pos.0 <= x + w && pos.1 >= y && pos.1 <= y + h
}

/// Labelled drop-down selector for the control panel.
///
/// Only one selector should be open at a time; the driver closes the
/// others when one opens.
#[derive(Clone)]
pub struct Selector {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    items: Vec<String>,
    selected: usize,
    open: bool,
}

impl Selector {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            items,
            selected: 0,
            open: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn row_y(&self, index: usize) -> f32 {
        self.y + ROW_HEIGHT * (index + 1) as f32
    }

    /// Handle clicks; returns true when the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }
        if hit(self.x, self.y, self.width, ROW_HEIGHT, mouse_pos) {
            self.open = !self.open;
            return false;
        }
        if !self.open {
            return false;
        }
        self.open = false;
        for index in 0..self.items.len() {
            if hit(self.x, self.row_y(index), self.width, ROW_HEIGHT, mouse_pos) {
                let changed = self.selected != index;
                self.selected = index;
                return changed;
            }
        }
        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 4.0, 14.0, GRAY);

        let head = if hit(self.x, self.y, self.width, ROW_HEIGHT, mouse_pos) {
            Color::from_rgba(80, 80, 95, 255)
        } else {
            Color::from_rgba(55, 55, 65, 255)
        };
        draw_rectangle(self.x, self.y, self.width, ROW_HEIGHT, head);
        draw_rectangle_lines(self.x, self.y, self.width, ROW_HEIGHT, 2.0, GRAY);
        draw_text(
            &clip_to_width(&self.items[self.selected], self.width - 26.0),
            self.x + 5.0,
            self.y + 19.0,
            16.0,
            WHITE,
        );
        draw_text("v", self.x + self.width - 15.0, self.y + 19.0, 14.0, GRAY);

        if !self.open {
            return;
        }
        for (index, item) in self.items.iter().enumerate() {
            let y = self.row_y(index);
            let fill = if hit(self.x, y, self.width, ROW_HEIGHT, mouse_pos) {
                Color::from_rgba(80, 80, 95, 255)
            } else if index == self.selected {
                Color::from_rgba(60, 75, 95, 255)
            } else {
                Color::from_rgba(35, 35, 40, 255)
            };
            draw_rectangle(self.x, y, self.width, ROW_HEIGHT, fill);
            draw_text(
                &clip_to_width(item, self.width - 10.0),
                self.x + 5.0,
                y + 19.0,
                16.0,
                WHITE,
            );
        }
        draw_rectangle_lines(
            self.x,
            self.y + ROW_HEIGHT,
            self.width,
            ROW_HEIGHT * self.items.len() as f32,
            2.0,
            WHITE,
        );
    }
}

/// Trim text with an ellipsis so it fits the given pixel width
fn clip_to_width(text: &str, max_width: f32) -> String {
    if measure_text(text, None, 16, 1.0).width <= max_width {
        return text.to_owned();
    }
    let mut clipped: String = text.to_owned();
    while !clipped.is_empty()
        && measure_text(&format!("{clipped}…"), None, 16, 1.0).width > max_width
    {
        clipped.pop();
    }
    format!("{clipped}…")
}
