//! Engine configuration for wayfind
//!
//! Configuration is plain TOML, e.g.
//!
//! ```toml
//! [weighted]
//! relaxation = "relaxing"
//! selection = "heap"
//!
//! [display]
//! path_cut = 5
//! ```

pub mod types;

use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::error::{Result, WayfindError};
use crate::graph::{
    dijkstra_shortest_path_with, NeighborProvider, Path as GraphPath, Vertex,
};

pub use types::{DisplayConfig, WayfindConfig};

impl WayfindConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WayfindConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WayfindError::failed_operation("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        if self.display.path_cut == 0 {
            crate::bail_invalid!("display.path_cut", self.display.path_cut);
        }
        Ok(())
    }

    /// Weighted shortest path using the configured relaxation and selection
    pub fn shortest_path<V, P, W>(
        &self,
        provider: &P,
        start: &V,
        target: &V,
        weight: W,
    ) -> std::result::Result<Option<GraphPath<V>>, P::Error>
    where
        V: Vertex,
        P: NeighborProvider<V> + ?Sized,
        W: Fn(&V, &V) -> f64,
    {
        dijkstra_shortest_path_with(provider, start, target, weight, &self.weighted)
    }

    /// Render a path with the configured elision
    pub fn render_path<V: Display>(&self, path: &GraphPath<V>) -> String {
        path.display_with_cut(self.display.path_cut)
    }
}
