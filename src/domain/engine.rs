use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Species};
use super::grid::Grid;
use super::rules::RuleSet;

/// Policy for an empty cell both species qualify to colonize in the same
/// generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieMode {
    /// Contested cell stays empty
    #[default]
    NoBirth,
    /// Species A always wins
    FavorA,
    /// Species B always wins
    FavorB,
    /// Uniformly random winner per contested cell
    Random,
}

impl TieMode {
    /// All modes, in selector order
    pub fn all() -> Vec<TieMode> {
        vec![
            TieMode::NoBirth,
            TieMode::FavorA,
            TieMode::FavorB,
            TieMode::Random,
        ]
    }

    /// Display name for UI
    pub const fn name(&self) -> &'static str {
        match self {
            TieMode::NoBirth => "No birth",
            TieMode::FavorA => "Favor A",
            TieMode::FavorB => "Favor B",
            TieMode::Random => "Random",
        }
    }
}

/// Compute one synchronous generation from `current` into `scratch`.
///
/// Reads only `current`, writes only `scratch`; the caller swaps the two
/// buffers afterwards. Both grids must have the same size.
pub fn step_into<R: Rng>(
    current: &Grid,
    scratch: &mut Grid,
    rules: &RuleSet,
    tie_mode: TieMode,
    wrap: bool,
    rng: &mut R,
) {
    debug_assert_eq!(current.size(), scratch.size());
    let size = current.size();
    for row in 0..size {
        for col in 0..size {
            let next = next_cell(current, row, col, rules, tie_mode, wrap, rng);
            scratch.set(row, col, next);
        }
    }
}

/// Row-parallel variant of [`step_into`].
///
/// Cells only read `current` and write disjoint rows of `scratch`, so rows
/// parallelize without synchronization. Identical to the serial pass for
/// non-random tie modes; under [`TieMode::Random`] each worker draws from
/// its thread-local generator.
pub fn step_parallel_into(
    current: &Grid,
    scratch: &mut Grid,
    rules: &RuleSet,
    tie_mode: TieMode,
    wrap: bool,
) {
    debug_assert_eq!(current.size(), scratch.size());
    let size = current.size();
    scratch
        .cells_mut()
        .par_chunks_mut(size)
        .enumerate()
        .for_each(|(row, out)| {
            let mut rng = rand::rng();
            for (col, slot) in out.iter_mut().enumerate() {
                *slot = next_cell(current, row, col, rules, tie_mode, wrap, &mut rng);
            }
        });
}

/// Next-state decision for a single cell.
fn next_cell<R: Rng>(
    current: &Grid,
    row: usize,
    col: usize,
    rules: &RuleSet,
    tie_mode: TieMode,
    wrap: bool,
    rng: &mut R,
) -> Cell {
    let n_a = current.count_neighbors(row, col, Species::A, wrap);
    let n_b = current.count_neighbors(row, col, Species::B, wrap);

    match current.cells()[row * current.size() + col] {
        Cell::SpeciesA => {
            if rules.permits_survival(Species::A, n_a, n_b) {
                Cell::SpeciesA
            } else {
                Cell::Empty
            }
        }
        Cell::SpeciesB => {
            if rules.permits_survival(Species::B, n_b, n_a) {
                Cell::SpeciesB
            } else {
                Cell::Empty
            }
        }
        Cell::Empty => {
            let a_ok = rules.permits_birth(Species::A, n_a, n_b);
            let b_ok = rules.permits_birth(Species::B, n_b, n_a);
            match (a_ok, b_ok) {
                (true, false) => Cell::SpeciesA,
                (false, true) => Cell::SpeciesB,
                (false, false) => Cell::Empty,
                (true, true) => resolve_tie(tie_mode, rng),
            }
        }
    }
}

fn resolve_tie<R: Rng>(tie_mode: TieMode, rng: &mut R) -> Cell {
    match tie_mode {
        TieMode::NoBirth => Cell::Empty,
        TieMode::FavorA => Cell::SpeciesA,
        TieMode::FavorB => Cell::SpeciesB,
        TieMode::Random => {
            if rng.random::<bool>() {
                Cell::SpeciesA
            } else {
                Cell::SpeciesB
            }
        }
    }
}
