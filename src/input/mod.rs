use macroquad::prelude::*;

use crate::application::SimState;
use crate::domain::{Cell, Species};
use crate::ui::{self, Button};

/// Drag-paint state. The value chosen at press is painted for the whole
/// drag, so a stroke lays down one state instead of cycling under the
/// cursor.
#[derive(Default)]
pub struct PaintBrush {
    value: Option<Cell>,
}

/// Convert a mouse position to grid coordinates, if inside the world view
pub fn mouse_cell(state: &SimState, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    let side = ui::world_side();
    if mouse_pos.0 < 0.0 || mouse_pos.1 < 0.0 || mouse_pos.0 >= side || mouse_pos.1 >= side {
        return None;
    }
    let size = state.grid().size();
    let cell = side / size as f32;
    let row = (mouse_pos.1 / cell) as usize;
    let col = (mouse_pos.0 / cell) as usize;
    (row < size && col < size).then_some((row, col))
}

/// Mouse painting: pressing a cell advances it one paint state
/// (Empty -> A -> B -> Empty), dragging spreads that state.
pub fn handle_mouse_paint(state: &mut SimState, brush: &mut PaintBrush, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Left) {
        brush.value = None;
        return;
    }
    let Some((row, col)) = mouse_cell(state, mouse_pos) else {
        return;
    };
    let value = match brush.value {
        Some(value) => value,
        None => {
            let value = state.cell_at(row, col).unwrap_or(Cell::Empty).cycle();
            brush.value = Some(value);
            value
        }
    };
    if state.cell_at(row, col) != Some(value) {
        state.paint(row, col, value);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard(state: &mut SimState) {
    type KeyAction = (KeyCode, fn(&mut SimState));

    let actions: [KeyAction; 11] = [
        (KeyCode::Space, |s| s.is_running = !s.is_running),
        (KeyCode::N, SimState::step),
        (KeyCode::B, SimState::step_back),
        (KeyCode::C, SimState::clear_grid),
        (KeyCode::Key1, |s| s.randomize(Some(Species::A))),
        (KeyCode::Key2, |s| s.randomize(Some(Species::B))),
        (KeyCode::Key3, |s| s.randomize(None)),
        (KeyCode::W, |s| s.wrap_edges = !s.wrap_edges),
        (KeyCode::F, |s| s.fade_mode = !s.fade_mode),
        (KeyCode::Up, |s| s.adjust_interval(-10.0)),
        (KeyCode::Down, |s| s.adjust_interval(10.0)),
    ];

    for (key, action) in actions {
        if is_key_pressed(key) {
            action(state);
        }
    }
}

/// Dispatch panel button clicks
pub fn process_button_clicks(state: &mut SimState, buttons: &[Button], mouse_pos: (f32, f32)) {
    for (index, button) in buttons.iter().enumerate() {
        if !button.is_clicked(mouse_pos) {
            continue;
        }
        match index {
            ui::buttons::RUN => state.is_running = !state.is_running,
            ui::buttons::STEP => state.step(),
            ui::buttons::BACK => state.step_back(),
            ui::buttons::CLEAR => state.clear_grid(),
            ui::buttons::SEED_A => state.randomize(Some(Species::A)),
            ui::buttons::SEED_B => state.randomize(Some(Species::B)),
            ui::buttons::SEED_BOTH => state.randomize(None),
            ui::buttons::WRAP => state.wrap_edges = !state.wrap_edges,
            ui::buttons::FADE => state.fade_mode = !state.fade_mode,
            _ => {}
        }
    }
}
