//! Placement execution.

use super::config::{FallbackSeed, PlacementConfig};
use crate::diffusion::{DiffusionRunner, PropagationStats};
use crate::grid::{Cell, CellTime, DistanceField, Grid, GridError};

/// Result of a placement run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementResult {
    /// Maximum committed time after the final propagation: the
    /// worst-case distance to the nearest source once the placement
    /// cell is added (for a sourceless grid, to the fallback seed
    /// alone).
    pub worst_distance: u32,

    /// The cell the final propagation was seeded from — the cell
    /// worst served by the original sources, or the fallback seed of a
    /// sourceless grid.
    pub placement: Cell,

    /// Whether the fallback seed was used (no sources in the input).
    pub used_fallback: bool,

    /// Number of source cells in the input grid.
    pub sources: usize,

    /// Counters of the initial multi-source phase (all zero when the
    /// fallback was used).
    pub survey_stats: PropagationStats,

    /// Counters of the final single-seed phase.
    pub reseed_stats: PropagationStats,
}

/// Executes two-phase farthest-point placement.
pub struct PlacementRunner;

impl PlacementRunner {
    /// Runs placement over `grid` and reports the worst-case distance
    /// once the placement cell is added to the source set.
    ///
    /// With sources present, phase 1 diffuses from all of them, the
    /// farthest cell (row-major first maximum) becomes the placement,
    /// and phase 2 re-diffuses from it at time 0 **over the phase-1
    /// field**. Only the placement is re-enqueued, but the committed
    /// phase-1 times stand and can only improve, so the final field is
    /// the pointwise minimum of "distance to the original sources" and
    /// "distance to the placement". Without sources, the fallback cell
    /// is seeded into a fresh field and a single propagation decides
    /// the answer.
    ///
    /// The only error is a [`FallbackSeed::Cell`] outside the grid.
    pub fn run(grid: &Grid, config: &PlacementConfig) -> Result<PlacementResult, GridError> {
        let mut frontier = DiffusionRunner::seed(grid);
        let sources = frontier.len();
        let mut field = DistanceField::for_grid(grid);

        let used_fallback = frontier.is_empty();
        let mut survey_stats = PropagationStats::default();

        let placement = if used_fallback {
            match config.fallback {
                FallbackSeed::GridCenter => grid.center(),
                FallbackSeed::Cell(cell) => {
                    if !grid.contains(cell) {
                        return Err(GridError::OutOfBounds {
                            cell,
                            rows: grid.rows(),
                            cols: grid.cols(),
                        });
                    }
                    cell
                }
            }
        } else {
            survey_stats = DiffusionRunner::propagate(&mut field, &mut frontier, config.connectivity);
            field
                .farthest()
                .expect("seeded propagation commits at least one cell")
                .cell
        };

        frontier.push(CellTime::new(placement, 0));
        let reseed_stats = DiffusionRunner::propagate(&mut field, &mut frontier, config.connectivity);

        let worst = field
            .farthest()
            .expect("field holds at least the committed seed");

        Ok(PlacementResult {
            worst_distance: worst.time,
            placement,
            used_fallback,
            sources,
            survey_stats,
            reseed_stats,
        })
    }
}
