//! Bulk reconstruction configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the timeline reconstructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionConfig {
    /// Emit a progress line every N replayed records. 0 disables.
    pub progress_log_interval: usize,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            progress_log_interval: 10_000,
        }
    }
}
