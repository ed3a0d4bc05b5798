use macroquad::prelude::*;

use crate::application::SimState;
use crate::domain::Cell;
use crate::ui::{self, Button, PANEL_WIDTH, Selector, buttons};

fn cell_color(cell: Cell, opacity: f32) -> Color {
    let (r, g, b) = match cell {
        Cell::SpeciesA => (60, 220, 130),
        Cell::SpeciesB => (230, 80, 90),
        // empty but still fading out: neutral remnant
        Cell::Empty => (160, 160, 160),
    };
    Color::from_rgba(r, g, b, (opacity * 255.0) as u8)
}

/// Draw the world: cells at their fade opacity (or discrete 0/1 when fade
/// display is off), then gridlines with a bold pair of center axes.
pub fn draw_world(state: &SimState) {
    let side = ui::world_side();
    let size = state.grid().size();
    let cell = side / size as f32;

    for (row, col, value) in state.grid().iter_cells() {
        let opacity = if state.fade_mode {
            state.fade().get(row, col)
        } else if value.is_occupied() {
            1.0
        } else {
            0.0
        };
        if opacity <= 0.0 {
            continue;
        }
        draw_rectangle(
            col as f32 * cell,
            row as f32 * cell,
            cell,
            cell,
            cell_color(value, opacity),
        );
    }

    let line_color = Color::from_rgba(68, 68, 68, 255);
    let mid = size / 2;
    for i in 0..=size {
        let p = i as f32 * cell;
        let thickness = if i == mid { 2.0 } else { 1.0 };
        draw_line(0.0, p, side, p, thickness, line_color);
        draw_line(p, 0.0, p, side, thickness, line_color);
    }
}

fn panel_background() {
    draw_rectangle(
        ui::panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel: buttons, status readouts, and selectors
/// (open selector last, so its menu overlays everything).
pub fn draw_panel(
    state: &SimState,
    panel_buttons: &[Button],
    selectors: &[Selector],
    mouse_pos: (f32, f32),
) {
    panel_background();

    for (index, button) in panel_buttons.iter().enumerate() {
        match index {
            buttons::RUN => button.draw_toggle(mouse_pos, state.is_running),
            buttons::WRAP => button.draw_toggle(mouse_pos, state.wrap_edges),
            buttons::FADE => button.draw_toggle(mouse_pos, state.fade_mode),
            _ => button.draw(mouse_pos),
        }
    }

    let px = ui::panel_x() + 5.0;
    let (pop_a, pop_b) = state.grid().population();
    let status = if state.is_running { "Running" } else { "Paused" };
    let status_color = if state.is_running {
        Color::from_rgba(60, 220, 130, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    draw_text(status, px, 490.0, 18.0, status_color);
    draw_text(
        &format!("Generation: {}", state.generation),
        px,
        512.0,
        15.0,
        WHITE,
    );
    draw_text(
        &format!("Interval: {:.0} ms", state.interval_ms()),
        px,
        530.0,
        15.0,
        WHITE,
    );
    draw_text(
        &format!("Tie: {}", state.tie_mode.name()),
        px,
        548.0,
        15.0,
        WHITE,
    );
    draw_text(
        &format!("A: {pop_a}"),
        px,
        570.0,
        16.0,
        cell_color(Cell::SpeciesA, 1.0),
    );
    draw_text(
        &format!("B: {pop_b}"),
        px + 70.0,
        570.0,
        16.0,
        cell_color(Cell::SpeciesB, 1.0),
    );
    draw_text(
        &format!("Undo depth: {}", state.history_len()),
        px,
        590.0,
        14.0,
        GRAY,
    );

    let help = [
        "LMB: paint (cycles)",
        "Space: run  N: step",
        "B: back  C: clear",
        "1/2/3: seed A/B/both",
        "W: wrap  F: fade",
        "Up/Down: speed",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_text(line, px, 620.0 + i as f32 * 15.0, 13.0, GRAY);
    }

    let mut open_selector: Option<&Selector> = None;
    for selector in selectors {
        if selector.is_open() {
            open_selector = Some(selector);
        } else {
            selector.draw(mouse_pos);
        }
    }
    if let Some(selector) = open_selector {
        selector.draw(mouse_pos);
    }
}
