//! Multi-source BFS diffusion.
//!
//! Computes, for every cell of a grid, the minimum hop-time from the
//! nearest source cell: all sources enter the frontier at time 0 and
//! the wavefront expands one hop per step. A plain FIFO queue stands in
//! for a priority queue because every edge weighs exactly 1; the
//! already-committed check on dequeue stands in for a visited set.
//!
//! # References
//!
//! - Moore (1959), "The Shortest Path Through a Maze"
//! - Lee (1961), "An Algorithm for Path Connections and Its Applications"
//! - Rosenfeld & Pfaltz (1966), "Sequential Operations in Digital
//!   Picture Processing" (distance transforms)

mod config;
mod runner;
mod types;

pub use config::DiffusionConfig;
pub use runner::{DiffusionResult, DiffusionRunner};
pub use types::{Frontier, PropagationStats};
