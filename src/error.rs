use thiserror::Error;

use crate::domain::MIN_GRID_SIZE;

/// Errors raised while configuring the simulation.
///
/// All of these surface synchronously at configuration time (genome
/// assignment, rule rebuild, grid resize, file loading). A generation pass
/// itself never fails: a species without a valid rule representation simply
/// gets no births and no survivals.
#[derive(Error, Debug)]
pub enum SimError {
    /// Genome bit string is not exactly 16 binary characters
    #[error("invalid genome format: {reason}")]
    InvalidGenomeFormat { reason: String },

    /// Species index outside {1, 2}
    #[error("invalid species index {0}, expected 1 or 2")]
    InvalidSpeciesIndex(usize),

    /// Grid side length below the supported minimum
    #[error("invalid grid size {0}, minimum is {MIN_GRID_SIZE}")]
    InvalidGridSize(usize),

    /// Malformed genome bundle or config file
    #[error("malformed bundle or config: {0}")]
    BundleFormat(#[from] serde_json::Error),

    /// IO error while reading or writing a bundle or config file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
