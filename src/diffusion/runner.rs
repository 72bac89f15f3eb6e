//! Diffusion execution loop.

use super::config::DiffusionConfig;
use super::types::{Frontier, PropagationStats};
use crate::grid::{CellTime, Connectivity, DistanceField, Grid};

/// Result of a diffusion run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffusionResult {
    /// Committed time per cell: the minimum hop-distance to the
    /// nearest source.
    pub field: DistanceField,

    /// Number of source cells found in the input grid.
    pub sources: usize,

    /// Propagation counters.
    pub stats: PropagationStats,
}

/// Executes multi-source BFS diffusion.
pub struct DiffusionRunner;

impl DiffusionRunner {
    /// Runs diffusion over `grid`: seed every source at time 0, then
    /// propagate to convergence.
    ///
    /// A grid with no sources yields an untouched all-unvisited field.
    pub fn run(grid: &Grid, config: &DiffusionConfig) -> DiffusionResult {
        let mut frontier = Self::seed(grid);
        let sources = frontier.len();
        let mut field = DistanceField::for_grid(grid);
        let stats = Self::propagate(&mut field, &mut frontier, config.connectivity);

        DiffusionResult {
            field,
            sources,
            stats,
        }
    }

    /// Scans `grid` once and enqueues every source cell at time 0.
    pub fn seed(grid: &Grid) -> Frontier {
        let mut frontier = Frontier::new();
        for cell in grid.sources() {
            frontier.push(CellTime::new(cell, 0));
        }
        frontier
    }

    /// Drains `frontier` into `field`.
    ///
    /// Each dequeued entry is committed only if it improves on the
    /// cell's recorded time; on commit, all in-bounds neighbors are
    /// enqueued at `time + 1`. An entry whose cell already holds an
    /// equal-or-better time is discarded, which bounds reprocessing:
    /// recorded times only decrease and are non-negative, so the queue
    /// drains in finitely many steps.
    ///
    /// An empty frontier returns immediately with zero counters and an
    /// untouched field.
    pub fn propagate(
        field: &mut DistanceField,
        frontier: &mut Frontier,
        connectivity: Connectivity,
    ) -> PropagationStats {
        let mut stats = PropagationStats::default();

        while let Some(entry) = frontier.pop() {
            stats.dequeued += 1;

            if !field.commit(entry.cell, entry.time) {
                stats.discarded += 1;
                continue;
            }
            stats.committed += 1;

            let next = entry.time + 1;
            for neighbor in connectivity.neighbors(entry.cell, field.rows(), field.cols()) {
                frontier.push(CellTime::new(neighbor, next));
            }
        }

        stats
    }
}
