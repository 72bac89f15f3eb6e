//! Coverage configuration.

use crate::grid::Connectivity;

/// Configuration for a coverage run.
///
/// Defaults to the four-way neighborhood: a covered cell updates its
/// orthogonal neighbors, not its diagonal ones.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageConfig {
    /// Neighborhood a covered cell updates each day.
    pub connectivity: Connectivity,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::FourWay,
        }
    }
}

impl CoverageConfig {
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_four_way() {
        assert_eq!(
            CoverageConfig::default().connectivity,
            Connectivity::FourWay
        );
    }
}
