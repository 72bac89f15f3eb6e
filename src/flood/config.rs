//! Flood-fill configuration.

use crate::grid::Connectivity;

/// Configuration for a region fill.
///
/// Defaults to the four-way neighborhood, so regions touching only at
/// a corner stay separate.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloodConfig {
    /// Neighborhood defining region connectedness.
    pub connectivity: Connectivity,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::FourWay,
        }
    }
}

impl FloodConfig {
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}
