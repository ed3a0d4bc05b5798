use log::{info, warn};

use crate::domain::{
    Cell, CountSet, FadeField, Genome, Grid, HistoryBuffer, RuleSet, Species, TieMode, engine,
};
use crate::error::SimError;

/// Bounds for the generation interval, milliseconds.
pub const MIN_INTERVAL_MS: f32 = 50.0;
pub const MAX_INTERVAL_MS: f32 = 1000.0;

type GenerationHook = Box<dyn FnMut(u64, &Grid)>;

/// SimState owns the whole simulation: the double-buffered grid, the fade
/// field, active rules, history, and the tick clock. This is the
/// application layer that coordinates domain logic; nothing in it draws.
pub struct SimState {
    grid: Grid,
    scratch: Grid,
    fade: FadeField,
    history: HistoryBuffer,
    interval_ms: f32,
    update_timer: f32,
    generation_hook: Option<GenerationHook>,
    pub rules: RuleSet,
    pub tie_mode: TieMode,
    pub wrap_edges: bool,
    pub fade_mode: bool,
    pub use_parallel: bool,
    pub is_running: bool,
    pub generation: u64,
}

impl SimState {
    /// Create a paused world of side `size` with classic rules
    pub fn new(size: usize) -> Result<Self, SimError> {
        Ok(Self {
            grid: Grid::new(size)?,
            scratch: Grid::new(size)?,
            fade: FadeField::new(size),
            history: HistoryBuffer::new(),
            interval_ms: 120.0,
            update_timer: 0.0,
            generation_hook: None,
            rules: RuleSet::classic(),
            tie_mode: TieMode::default(),
            wrap_edges: true,
            fade_mode: false,
            use_parallel: false,
            is_running: false,
            generation: 0,
        })
    }

    /// Read-only view of the current generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only view of the fade field
    pub fn fade(&self) -> &FadeField {
        &self.fade
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }

    /// Set the generation interval, clamped to the supported range
    pub fn set_interval_ms(&mut self, ms: f32) {
        self.interval_ms = ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
    }

    pub fn adjust_interval(&mut self, delta_ms: f32) {
        self.set_interval_ms(self.interval_ms + delta_ms);
    }

    /// Install a callback invoked once per forward step with the new
    /// generation number and a read-only view of the updated grid
    pub fn set_generation_hook(&mut self, hook: impl FnMut(u64, &Grid) + 'static) {
        self.generation_hook = Some(Box::new(hook));
    }

    /// Advance exactly one generation.
    ///
    /// Snapshots the current grid for step-back, computes the next
    /// generation into the scratch buffer, then exchanges buffer ownership.
    pub fn step(&mut self) {
        self.history.push(&self.grid);
        if self.use_parallel {
            engine::step_parallel_into(
                &self.grid,
                &mut self.scratch,
                &self.rules,
                self.tie_mode,
                self.wrap_edges,
            );
        } else {
            engine::step_into(
                &self.grid,
                &mut self.scratch,
                &self.rules,
                self.tie_mode,
                self.wrap_edges,
                &mut rand::rng(),
            );
        }
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        if let Some(hook) = &mut self.generation_hook {
            hook(self.generation, &self.grid);
        }
    }

    /// Restore the previous generation, if any.
    ///
    /// The restored state appears instantly: the scratch buffer is zeroed
    /// and the fade field snaps to the restored cells.
    pub fn step_back(&mut self) {
        let Some(snapshot) = self.history.pop() else {
            return;
        };
        self.grid = snapshot;
        self.scratch.clear();
        self.fade.snap(&self.grid);
        self.generation = self.generation.saturating_sub(1);
    }

    /// Accumulate frame time and step when the interval elapses.
    /// Does nothing while paused.
    pub fn tick(&mut self, delta_seconds: f32) {
        if !self.is_running {
            return;
        }
        self.update_timer += delta_seconds * 1000.0;
        if self.update_timer >= self.interval_ms {
            self.step();
            self.update_timer = 0.0;
        }
    }

    /// Advance the fade field on the render clock. Runs every frame,
    /// whether or not the simulation is ticking.
    pub fn advance_fade(&mut self, elapsed_ms: f32) {
        self.fade.advance(&self.grid, elapsed_ms);
    }

    /// Reallocate all buffers for a new grid size.
    ///
    /// Stop-the-world: halts the tick clock, drops history, resets the
    /// generation counter.
    pub fn resize(&mut self, size: usize) -> Result<(), SimError> {
        let grid = Grid::new(size)?;
        self.is_running = false;
        self.update_timer = 0.0;
        self.grid = grid;
        self.scratch = Grid::new(size)?;
        self.fade = FadeField::new(size);
        self.history.clear();
        self.generation = 0;
        info!("grid resized to {size}x{size}");
        Ok(())
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    /// Paint one cell. The painted cell fades in from zero, and history is
    /// dropped since stored snapshots no longer lead back to this grid.
    pub fn paint(&mut self, row: usize, col: usize, cell: Cell) {
        if self.grid.get(row, col).is_none() {
            return;
        }
        self.grid.set(row, col, cell);
        self.fade.reset(row, col);
        self.history.clear();
    }

    /// Empty the grid and pause
    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.fade.clear();
        self.history.clear();
        self.generation = 0;
        self.is_running = false;
    }

    /// Scatter one species over the current grid, or reseed both
    pub fn randomize(&mut self, species: Option<Species>) {
        let mut rng = rand::rng();
        match species {
            Some(species) => self.grid.seed_species(species, 0.2, &mut rng),
            None => self.grid.seed_both(&mut rng),
        }
        self.fade.clear();
        self.history.clear();
        self.generation = 0;
        self.is_running = false;
    }

    /// Decode a bundle record and make it the species' active rule
    pub fn assign_genome(&mut self, species: Species, genome: &Genome) -> Result<(), SimError> {
        self.rules.assign_genome(species, genome)?;
        info!("species {} now runs genome '{}'", species.name(), genome.id);
        Ok(())
    }

    /// Switch the species to legacy count-set rules
    pub fn set_legacy_rules(
        &mut self,
        species: Species,
        birth: &str,
        survival: &str,
        birth_threshold: u8,
        survival_threshold: u8,
    ) {
        let birth = CountSet::parse(birth);
        let survival = CountSet::parse(survival);
        if birth.is_empty() && survival.is_empty() {
            warn!("species {} has empty rule sets", species.name());
        }
        self.rules
            .set_legacy(species, birth, survival, birth_threshold, survival_threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn blinker_world() -> SimState {
        let mut state = SimState::new(9).unwrap();
        for col in 3..6 {
            state.paint(4, col, Cell::SpeciesA);
        }
        state
    }

    #[test]
    fn test_step_back_restores_bitwise() {
        let mut state = blinker_world();
        let origin = state.grid().clone();

        for _ in 0..7 {
            state.step();
        }
        assert_eq!(state.generation, 7);
        for _ in 0..7 {
            state.step_back();
        }
        assert_eq!(state.generation, 0);
        assert_eq!(*state.grid(), origin);
    }

    #[test]
    fn test_step_back_on_empty_history_is_noop() {
        let mut state = blinker_world();
        let before = state.grid().clone();
        state.step_back();
        assert_eq!(*state.grid(), before);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_step_back_snaps_fade() {
        let mut state = blinker_world();
        state.step();
        state.advance_fade(50.0);
        state.step_back();
        // restored cells show at full opacity, empty ones at zero
        assert_eq!(state.fade().get(4, 3), 1.0);
        assert_eq!(state.fade().get(0, 0), 0.0);
    }

    #[test]
    fn test_paint_invalidates_history() {
        let mut state = blinker_world();
        state.step();
        assert_eq!(state.history_len(), 1);
        state.paint(0, 0, Cell::SpeciesB);
        assert_eq!(state.history_len(), 0);
        // fade restarts for the painted cell
        assert_eq!(state.fade().get(0, 0), 0.0);
    }

    #[test]
    fn test_resize_is_stop_the_world() {
        let mut state = blinker_world();
        state.is_running = true;
        state.step();

        state.resize(12).unwrap();
        assert!(!state.is_running);
        assert_eq!(state.grid().size(), 12);
        assert_eq!(state.history_len(), 0);
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid().population(), (0, 0));
    }

    #[test]
    fn test_resize_rejects_tiny_and_keeps_world() {
        let mut state = blinker_world();
        assert!(state.resize(3).is_err());
        assert_eq!(state.grid().size(), 9);
        assert_eq!(state.grid().population(), (3, 0));
    }

    #[test]
    fn test_interval_clamping() {
        let mut state = blinker_world();
        state.set_interval_ms(10.0);
        assert_eq!(state.interval_ms(), MIN_INTERVAL_MS);
        state.set_interval_ms(5000.0);
        assert_eq!(state.interval_ms(), MAX_INTERVAL_MS);
        state.set_interval_ms(120.0);
        assert_eq!(state.interval_ms(), 120.0);
    }

    #[test]
    fn test_tick_respects_interval_and_pause() {
        let mut state = blinker_world();
        state.set_interval_ms(100.0);

        // paused: no stepping no matter how much time passes
        state.tick(1.0);
        assert_eq!(state.generation, 0);

        state.is_running = true;
        state.tick(0.05);
        assert_eq!(state.generation, 0);
        state.tick(0.06);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_generation_hook_sees_each_step() {
        let seen: Rc<RefCell<Vec<u64>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut state = blinker_world();
        state.set_generation_hook(move |generation, grid| {
            assert_eq!(grid.population().0, 3);
            sink.borrow_mut().push(generation);
        });
        state.step();
        state.step();
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_clear_grid_resets_everything_visible() {
        let mut state = blinker_world();
        state.step();
        state.clear_grid();
        assert_eq!(state.grid().population(), (0, 0));
        assert_eq!(state.history_len(), 0);
        assert_eq!(state.fade().get(4, 3), 0.0);
    }

    #[test]
    fn test_randomize_species_and_both() {
        let mut state = SimState::new(20).unwrap();
        state.randomize(Some(Species::A));
        let (a, b) = state.grid().population();
        assert!(a > 0);
        assert_eq!(b, 0);

        state.randomize(None);
        let (a, b) = state.grid().population();
        assert!(a > 0);
        assert!(b > 0);
    }

    #[test]
    fn test_deep_history_round_trip() {
        // forward and back across a longer run stays bitwise exact
        let mut state = SimState::new(16).unwrap();
        state.randomize(None);
        let origin = state.grid().clone();

        let steps = 60;
        for _ in 0..steps {
            state.step();
        }
        for _ in 0..steps {
            state.step_back();
        }
        assert_eq!(*state.grid(), origin);
    }
}
