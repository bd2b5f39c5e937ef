//! Configuration type definitions

use crate::graph::types::{WeightedOptions, DEFAULT_DISPLAY_CUT};
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WayfindConfig {
    /// Weighted search behaviour
    #[serde(default)]
    pub weighted: WeightedOptions,

    /// Path rendering
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Configuration for rendering paths as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Vertices shown at each end of a long path before eliding the middle
    #[serde(default = "default_path_cut")]
    pub path_cut: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            path_cut: default_path_cut(),
        }
    }
}

fn default_path_cut() -> usize {
    DEFAULT_DISPLAY_CUT
}
