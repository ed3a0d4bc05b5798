mod config;
mod sim;

pub use config::{RuleConfig, SimConfig};
pub use sim::{MAX_INTERVAL_MS, MIN_INTERVAL_MS, SimState};
