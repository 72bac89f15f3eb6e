//! Coverage execution loop.

use super::config::CoverageConfig;
use crate::grid::{Cell, Grid};

/// Result of a coverage run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageResult {
    /// Days until coverage stopped spreading. `None` when the grid
    /// held no covered cell to spread from; `Some(0)` when the grid
    /// was already saturated.
    pub days: Option<u32>,

    /// Number of cells that became covered during the run.
    pub updated: usize,
}

/// Executes synchronous wavefront coverage.
pub struct CoverageRunner;

impl CoverageRunner {
    /// Expands coverage from the non-zero cells of `grid` one layer
    /// per day until no cell changes, and reports how long it took.
    ///
    /// The input grid is not modified; coverage state lives in a
    /// scratch buffer.
    pub fn run(grid: &Grid, config: &CoverageConfig) -> CoverageResult {
        let cols = grid.cols();
        let mut covered = vec![false; grid.len()];
        let mut current: Vec<Cell> = grid.sources().collect();
        for cell in &current {
            covered[cell.row * cols + cell.col] = true;
        }

        if current.is_empty() {
            return CoverageResult {
                days: None,
                updated: 0,
            };
        }

        let mut days = 0u32;
        let mut updated = 0usize;
        let mut next: Vec<Cell> = Vec::new();

        loop {
            for cell in current.drain(..) {
                for neighbor in
                    config
                        .connectivity
                        .neighbors(cell, grid.rows(), grid.cols())
                {
                    let slot = &mut covered[neighbor.row * cols + neighbor.col];
                    if !*slot {
                        *slot = true;
                        updated += 1;
                        next.push(neighbor);
                    }
                }
            }

            if next.is_empty() {
                break;
            }
            std::mem::swap(&mut current, &mut next);
            days += 1;
        }

        CoverageResult {
            days: Some(days),
            updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffusion::{DiffusionConfig, DiffusionRunner};

    #[test]
    fn test_no_covered_cell_reports_none() {
        let grid = Grid::filled(3, 3, 0).unwrap();
        let result = CoverageRunner::run(&grid, &CoverageConfig::default());
        assert_eq!(
            result,
            CoverageResult {
                days: None,
                updated: 0
            }
        );
    }

    #[test]
    fn test_saturated_grid_takes_zero_days() {
        let grid = Grid::filled(2, 3, 1).unwrap();
        let result = CoverageRunner::run(&grid, &CoverageConfig::default());
        assert_eq!(result.days, Some(0));
        assert_eq!(result.updated, 0);
    }

    #[test]
    fn test_line_grid_days_equal_distance() {
        let grid = Grid::from_rows(vec![vec![1, 0, 0]]).unwrap();
        let result = CoverageRunner::run(&grid, &CoverageConfig::default());
        assert_eq!(result.days, Some(2));
        assert_eq!(result.updated, 2);
    }

    #[test]
    fn test_two_seeds_meet_in_the_middle() {
        // Day 1 covers the cells beside each seed, day 2 the middle.
        let grid = Grid::from_rows(vec![vec![1, 0, 0, 0, 1]]).unwrap();
        let result = CoverageRunner::run(&grid, &CoverageConfig::default());
        assert_eq!(result.days, Some(2));
        assert_eq!(result.updated, 3);
    }

    #[test]
    fn test_days_match_farthest_diffusion_time() {
        let grids = [
            Grid::from_rows(vec![vec![1, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap(),
            Grid::from_rows(vec![vec![0, 0, 0, 1], vec![1, 0, 0, 0]]).unwrap(),
            Grid::from_rows(vec![vec![0, 1, 0], vec![0, 0, 0]]).unwrap(),
        ];

        for grid in &grids {
            for connectivity in [
                crate::grid::Connectivity::FourWay,
                crate::grid::Connectivity::EightWay,
            ] {
                let coverage = CoverageRunner::run(
                    grid,
                    &CoverageConfig::default().with_connectivity(connectivity),
                );
                let diffusion = DiffusionRunner::run(
                    grid,
                    &DiffusionConfig::default().with_connectivity(connectivity),
                );
                let farthest = diffusion.field.farthest().unwrap();

                assert_eq!(
                    coverage.days,
                    Some(farthest.time),
                    "connectivity {connectivity:?}"
                );
            }
        }
    }
}
