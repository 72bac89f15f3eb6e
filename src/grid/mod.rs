//! Core grid data model.
//!
//! Shared by all algorithm modules in this crate:
//!
//! - **Coordinates**: [`Cell`] and [`CellTime`] — a position, and a
//!   position paired with a BFS time.
//! - **Connectivity**: [`Connectivity`] — fixed relative-offset tables
//!   for four- and eight-way neighborhoods, with a single in-bounds
//!   predicate used by every traversal.
//! - **Board**: [`Grid`] — a validated rectangular board of `i32`
//!   markers (non-zero = source).
//! - **Distances**: [`DistanceField`] — per-cell committed BFS times,
//!   where "unvisited" is a distinct state rather than a sentinel
//!   integer.
//!
//! # Design
//!
//! Construction is the only place malformed input can enter: an empty
//! or jagged row set is rejected with [`GridError`] instead of being
//! read out of bounds later. Out-of-bounds *neighbors* during a
//! traversal are not errors — they are silently skipped by
//! [`Connectivity::neighbors`].

mod field;
mod model;
mod types;

pub use field::DistanceField;
pub use model::Grid;
pub use types::{Cell, CellTime, Connectivity, GridError};
