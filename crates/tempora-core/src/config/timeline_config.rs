//! Timeline engine configuration.

use serde::{Deserialize, Serialize};

use crate::models::TimeUnit;

/// Configuration shared by the single-axis and bitemporal engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Every instant handed to an engine is truncated to this unit before
    /// it is read or written.
    pub precision: TimeUnit,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            precision: TimeUnit::Nanoseconds,
        }
    }
}
