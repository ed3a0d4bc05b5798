use macroquad::prelude::*;

/// Panel button with hover feedback and an optional lit state for toggles
/// like Wrap and Fade.
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        self.draw_toggle(mouse_pos, false);
    }

    /// Draw, lit up when the toggle it controls is on
    pub fn draw_toggle(&self, mouse_pos: (f32, f32), lit: bool) {
        let fill = if lit {
            Color::from_rgba(60, 110, 70, 255)
        } else if self.is_hovered(mouse_pos) {
            Color::from_rgba(80, 80, 95, 255)
        } else {
            Color::from_rgba(55, 55, 65, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, GRAY);

        let size = measure_text(&self.label, None, 18, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - size.width) / 2.0,
            self.y + (self.height + size.height) / 2.0,
            18.0,
            WHITE,
        );
    }
}
