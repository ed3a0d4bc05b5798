use log::{info, warn};
use macroquad::prelude::*;

use dual_life::{
    SimConfig, SimError, SimState, Species, TieMode,
    domain::{Genome, parse_bundle},
    input::{self, PaintBrush},
    rendering,
    ui::{self, GRID_SIZES, Selector},
};

const CONFIG_PATH: &str = "dual_life.json";
const BUNDLE_PATH: &str = "genomes.json";

fn window_conf() -> Conf {
    Conf {
        window_title: "Dual Life - Two-Species Cellular Automaton".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Load the optional config file; a missing file is not an error
fn load_config() -> SimConfig {
    match SimConfig::from_file(CONFIG_PATH) {
        Ok(config) => {
            info!("loaded {CONFIG_PATH}");
            config
        }
        Err(SimError::Io(_)) => SimConfig::default(),
        Err(err) => {
            warn!("ignoring {CONFIG_PATH}: {err}");
            SimConfig::default()
        }
    }
}

/// Load the optional genome bundle next to the executable
fn load_bundle() -> Vec<Genome> {
    let Ok(json) = std::fs::read_to_string(BUNDLE_PATH) else {
        return Vec::new();
    };
    match parse_bundle(&json) {
        Ok(bundle) => {
            info!("loaded {} genomes from {BUNDLE_PATH}", bundle.len());
            bundle
        }
        Err(err) => {
            warn!("ignoring {BUNDLE_PATH}: {err}");
            Vec::new()
        }
    }
}

/// Apply a rule selector choice: entry 0 is classic Life, the rest are
/// bundle genomes
fn apply_rule_choice(state: &mut SimState, species: Species, choice: usize, genomes: &[Genome]) {
    if choice == 0 {
        state.set_legacy_rules(species, "3", "2,3", 0, 0);
    } else if let Some(genome) = genomes.get(choice - 1) {
        if let Err(err) = state.assign_genome(species, genome) {
            warn!("genome '{}' rejected: {err}", genome.id);
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = load_config();
    let mut state = SimState::from_config(&config).unwrap_or_else(|err| {
        warn!("config rejected ({err}), using defaults");
        SimState::from_config(&SimConfig::default()).expect("default config is valid")
    });
    let genomes = load_bundle();

    let px = ui::panel_x() + 5.0;
    let w = ui::PANEL_WIDTH - 10.0;

    let size_items: Vec<String> = GRID_SIZES.iter().map(|(_, name)| name.to_string()).collect();
    let mut size_selector = Selector::new(px, 30.0, w, "Grid Size", size_items);
    if let Some(index) = GRID_SIZES
        .iter()
        .position(|(size, _)| *size == state.grid().size())
    {
        size_selector.set_selected(index);
    }

    let tie_items: Vec<String> = TieMode::all().iter().map(|m| m.name().to_string()).collect();
    let mut tie_selector = Selector::new(px, 80.0, w, "Tie Mode", tie_items);
    if let Some(index) = TieMode::all().iter().position(|m| *m == state.tie_mode) {
        tie_selector.set_selected(index);
    }

    let rule_items: Vec<String> = std::iter::once("Classic B3/S23".to_owned())
        .chain(genomes.iter().map(|g| g.id.clone()))
        .collect();
    let mut rule_a_selector = Selector::new(px, 130.0, w, "Species A Rule", rule_items.clone());
    let mut rule_b_selector = Selector::new(px, 180.0, w, "Species B Rule", rule_items);

    let mut brush = PaintBrush::default();

    loop {
        let mouse_pos = mouse_position();

        // Reposition UI for responsiveness
        let px = ui::panel_x() + 5.0;
        size_selector.set_position(px, 30.0);
        tie_selector.set_position(px, 80.0);
        rule_a_selector.set_position(px, 130.0);
        rule_b_selector.set_position(px, 180.0);
        let buttons = ui::create_buttons();

        let menu_was_open = size_selector.is_open()
            || tie_selector.is_open()
            || rule_a_selector.is_open()
            || rule_b_selector.is_open();

        // Selector updates; only one menu open at a time
        if size_selector.update(mouse_pos) {
            let (size, _) = GRID_SIZES[size_selector.selected()];
            if let Err(err) = state.resize(size) {
                warn!("resize rejected: {err}");
            }
        }
        if size_selector.is_open() {
            tie_selector.close();
            rule_a_selector.close();
            rule_b_selector.close();
        }

        if tie_selector.update(mouse_pos) {
            state.tie_mode = TieMode::all()[tie_selector.selected()];
        }
        if tie_selector.is_open() {
            size_selector.close();
            rule_a_selector.close();
            rule_b_selector.close();
        }

        if rule_a_selector.update(mouse_pos) {
            apply_rule_choice(&mut state, Species::A, rule_a_selector.selected(), &genomes);
        }
        if rule_a_selector.is_open() {
            size_selector.close();
            tie_selector.close();
            rule_b_selector.close();
        }

        if rule_b_selector.update(mouse_pos) {
            apply_rule_choice(&mut state, Species::B, rule_b_selector.selected(), &genomes);
        }
        if rule_b_selector.is_open() {
            size_selector.close();
            tie_selector.close();
            rule_a_selector.close();
        }

        // A click that opened, used, or closed a menu must not leak through
        // to the buttons or the grid underneath
        let menu_open = menu_was_open
            || size_selector.is_open()
            || tie_selector.is_open()
            || rule_a_selector.is_open()
            || rule_b_selector.is_open();

        if !menu_open {
            input::process_button_clicks(&mut state, &buttons, mouse_pos);
            input::handle_mouse_paint(&mut state, &mut brush, mouse_pos);
        }
        input::process_keyboard(&mut state);

        // Generation clock and render clock run independently: the fade
        // field advances every frame even while the simulation is paused
        let dt = get_frame_time();
        state.tick(dt);
        state.advance_fade(dt * 1000.0);

        clear_background(BLACK);
        rendering::draw_world(&state);
        let selectors = [
            size_selector.clone(),
            tie_selector.clone(),
            rule_a_selector.clone(),
            rule_b_selector.clone(),
        ];
        rendering::draw_panel(&state, &buttons, &selectors, mouse_pos);

        next_frame().await;
    }
}
