mod button;
mod selector;

pub use button::Button;
pub use selector::Selector;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 190.0;
pub const BUTTON_HEIGHT: f32 = 32.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Side length of the square world viewport, left of the panel
pub fn world_side() -> f32 {
    (screen_width() - PANEL_WIDTH).min(screen_height())
}

/// Grid size options
pub const GRID_SIZES: &[(usize, &str)] = &[
    (24, "24×24"),
    (36, "36×36"),
    (50, "50×50"),
    (75, "75×75"),
    (100, "100×100"),
    (150, "150×150"),
];

/// Button indices, matching the order of `create_buttons`
pub mod buttons {
    pub const RUN: usize = 0;
    pub const STEP: usize = 1;
    pub const BACK: usize = 2;
    pub const CLEAR: usize = 3;
    pub const SEED_A: usize = 4;
    pub const SEED_B: usize = 5;
    pub const SEED_BOTH: usize = 6;
    pub const WRAP: usize = 7;
    pub const FADE: usize = 8;
}

/// Create the control buttons in panel order
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 5.0;
    let w = PANEL_WIDTH - 10.0;
    let half = (w - 5.0) / 2.0;
    let row = BUTTON_HEIGHT + 6.0;
    let top = 240.0;
    vec![
        Button::new(px, top, w, BUTTON_HEIGHT, "Start / Stop"),
        Button::new(px, top + row, half, BUTTON_HEIGHT, "Step"),
        Button::new(px + half + 5.0, top + row, half, BUTTON_HEIGHT, "Back"),
        Button::new(px, top + 2.0 * row, w, BUTTON_HEIGHT, "Clear"),
        Button::new(px, top + 3.0 * row, half, BUTTON_HEIGHT, "Seed A"),
        Button::new(px + half + 5.0, top + 3.0 * row, half, BUTTON_HEIGHT, "Seed B"),
        Button::new(px, top + 4.0 * row, w, BUTTON_HEIGHT, "Seed Both"),
        Button::new(px, top + 5.0 * row, half, BUTTON_HEIGHT, "Wrap"),
        Button::new(px + half + 5.0, top + 5.0 * row, half, BUTTON_HEIGHT, "Fade"),
    ]
}
