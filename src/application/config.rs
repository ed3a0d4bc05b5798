use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{CountSet, RuleSpec, Species, TieMode, decode_genome};
use crate::error::SimError;

use super::sim::SimState;

/// Rule input for one species, as stored in a config file.
///
/// Mirrors the two run-time representations: classic count lists with
/// cross-species thresholds, or a genome bundle record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleConfig {
    Classic {
        /// Count list like "3" or "2-3,6"
        birth: String,
        survival: String,
        #[serde(default)]
        birth_threshold: u8,
        #[serde(default)]
        survival_threshold: u8,
    },
    Genome {
        id: String,
        birth: String,
        survival: String,
    },
}

impl RuleConfig {
    /// Validate and convert into a run-time rule representation
    pub fn to_spec(&self) -> Result<RuleSpec, SimError> {
        match self {
            RuleConfig::Classic {
                birth,
                survival,
                birth_threshold,
                survival_threshold,
            } => Ok(RuleSpec::Legacy {
                birth: CountSet::parse(birth),
                survival: CountSet::parse(survival),
                birth_threshold: *birth_threshold,
                survival_threshold: *survival_threshold,
            }),
            RuleConfig::Genome {
                birth, survival, ..
            } => Ok(RuleSpec::Genome {
                birth: decode_genome(birth)?,
                survival: decode_genome(survival)?,
            }),
        }
    }
}

/// Startup configuration loaded from and saved to JSON.
///
/// The generation interval is the driver's timer setting; the core clamps
/// it to the supported range when applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub grid_size: usize,
    pub wrap_edges: bool,
    pub tie_mode: TieMode,
    pub interval_ms: f32,
    pub species_a: Option<RuleConfig>,
    pub species_b: Option<RuleConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        let classic = RuleConfig::Classic {
            birth: "3".to_owned(),
            survival: "2,3".to_owned(),
            birth_threshold: 0,
            survival_threshold: 0,
        };
        Self {
            grid_size: 36,
            wrap_edges: true,
            tie_mode: TieMode::NoBirth,
            interval_ms: 120.0,
            species_a: Some(classic.clone()),
            species_b: Some(classic),
        }
    }
}

impl SimConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl SimState {
    /// Build a fresh simulation from a validated configuration
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        let mut state = SimState::new(config.grid_size)?;
        state.wrap_edges = config.wrap_edges;
        state.tie_mode = config.tie_mode;
        state.set_interval_ms(config.interval_ms);

        state.rules = crate::domain::RuleSet::new();
        if let Some(rule) = &config.species_a {
            state.rules.assign(Species::A, rule.to_spec()?);
        }
        if let Some(rule) = &config.species_b {
            state.rules.assign(Species::B, rule.to_spec()?);
        }
        Ok(state)
    }
}
