pub mod reconstruction_config;
pub mod timeline_config;

use serde::{Deserialize, Serialize};

use crate::errors::TemporaResult;

pub use reconstruction_config::ReconstructionConfig;
pub use timeline_config::TimelineConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemporaConfig {
    pub timeline: TimelineConfig,
    pub reconstruction: ReconstructionConfig,
}

impl TemporaConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    /// Parse failures surface as `TemporaError::ConfigError`.
    pub fn from_toml(toml_str: &str) -> TemporaResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}
