//! Farthest-point placement.
//!
//! Answers "if one more source were placed, how badly served would the
//! worst cell be?": diffuse from the existing sources, find the cell
//! they serve worst, place the new source there, and re-diffuse. A
//! grid with no sources at all falls back to seeding the geometric
//! center.
//!
//! The second phase re-enqueues only the placement cell, not the
//! original sources, and runs over the phase-1 field, whose committed
//! times stand. That is the policy of the algorithm, a farthest-point
//! placement heuristic, not an approximation error.
//!
//! # References
//!
//! - Gonzalez (1985), "Clustering to Minimize the Maximum Intercluster
//!   Distance" (farthest-point traversal)
//! - Hochbaum & Shmoys (1985), "A Best Possible Heuristic for the
//!   k-Center Problem"

mod config;
mod runner;

pub use config::{FallbackSeed, PlacementConfig};
pub use runner::{PlacementResult, PlacementRunner};
