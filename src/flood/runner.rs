//! Flood-fill execution.

use super::config::FloodConfig;
use crate::grid::{Cell, Grid, GridError};

/// Result of a region fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloodResult {
    /// Number of cells recolored.
    pub filled: usize,
}

/// Executes a region fill.
pub struct FloodRunner;

impl FloodRunner {
    /// Recolors the connected region holding the same marker as
    /// `start` to `color`, mutating `grid` in place.
    ///
    /// A start cell already holding `color` is a no-op; the region
    /// would otherwise never terminate shrinking into itself. An
    /// out-of-bounds start is rejected with
    /// [`GridError::OutOfBounds`].
    pub fn run(
        grid: &mut Grid,
        start: Cell,
        color: i32,
        config: &FloodConfig,
    ) -> Result<FloodResult, GridError> {
        let origin = grid.get(start).ok_or(GridError::OutOfBounds {
            cell: start,
            rows: grid.rows(),
            cols: grid.cols(),
        })?;

        if origin == color {
            return Ok(FloodResult { filled: 0 });
        }

        let mut filled = 0usize;
        let mut stack = vec![start];

        while let Some(cell) = stack.pop() {
            // A cell can sit on the stack more than once; only the
            // first visit still holds the origin color.
            if grid.get(cell) != Some(origin) {
                continue;
            }
            grid.set(cell, color);
            filled += 1;

            for neighbor in config.connectivity.neighbors(cell, grid.rows(), grid.cols()) {
                stack.push(neighbor);
            }
        }

        Ok(FloodResult { filled })
    }
}
