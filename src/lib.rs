//! Domain-agnostic grid flood-propagation algorithms.
//!
//! Provides generic implementations of breadth-first diffusion over
//! rectangular integer grids:
//!
//! - **Diffusion**: Multi-source BFS distance fields — the minimum
//!   hop-time from any marked source cell to every other cell, with
//!   configurable four- or eight-way connectivity.
//! - **Placement**: Two-phase farthest-point search — locate the cell
//!   worst served by the current source set, re-propagate from it, and
//!   report the resulting worst-case distance. Approximates the best
//!   single additional source placement.
//! - **Coverage**: Synchronous wavefront expansion — the number of
//!   whole-grid update steps (days) until every cell is covered.
//! - **Flood**: Classic region fill — recolor the connected component
//!   of the start cell's color.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem.
//! It contains no domain-specific concepts — delivery logistics, server
//! rollout, image editing, etc. are all defined by consumers at higher
//! layers, which map their domain onto grids of integer markers.
//!
//! # Example
//!
//! ```
//! use u_gridflow::grid::Grid;
//! use u_gridflow::placement::{PlacementConfig, PlacementRunner};
//!
//! let grid = Grid::from_rows(vec![vec![0, 0], vec![0, 1]]).unwrap();
//! let result = PlacementRunner::run(&grid, &PlacementConfig::default()).unwrap();
//! assert_eq!(result.worst_distance, 1);
//! ```

pub mod coverage;
pub mod diffusion;
pub mod flood;
pub mod grid;
pub mod placement;
