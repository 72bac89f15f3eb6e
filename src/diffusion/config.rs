//! Diffusion configuration.

use crate::grid::Connectivity;

/// Configuration for a diffusion run.
///
/// # Examples
///
/// ```
/// use u_gridflow::diffusion::DiffusionConfig;
/// use u_gridflow::grid::Connectivity;
///
/// let config = DiffusionConfig::default().with_connectivity(Connectivity::FourWay);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffusionConfig {
    /// Neighborhood used when expanding the wavefront.
    pub connectivity: Connectivity,
}

impl DiffusionConfig {
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}
