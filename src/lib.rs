// Domain layer - core simulation logic
pub mod domain;

// Application layer - simulation state and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

pub mod error;

// Re-exports for convenience
pub use application::{RuleConfig, SimConfig, SimState};
pub use domain::{Cell, Genome, Grid, RuleSet, RuleSpec, Species, TieMode};
pub use error::SimError;
