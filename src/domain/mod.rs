mod cell;
pub mod engine;
mod fade;
mod genome;
mod grid;
mod history;
mod rules;

pub use cell::{Cell, Species};
pub use engine::TieMode;
pub use fade::{FADE_DURATION_MS, FadeField};
pub use genome::{Code, GENOME_BITS, Genome, decode_genome, encode_genome, parse_bundle};
pub use grid::{Grid, MIN_GRID_SIZE};
pub use history::{HISTORY_CAPACITY, HistoryBuffer};
pub use rules::{CountSet, RuleSet, RuleSpec, codes_from_counts};
