//! Committed BFS times.

use super::model::Grid;
use super::types::{Cell, CellTime};

/// Per-cell committed BFS times for one propagation run.
///
/// Every cell starts *unvisited* — a distinct state, not a sentinel
/// integer. A cell's time is set by [`commit`](DistanceField::commit),
/// which only ever lowers it, so after propagation each cell holds the
/// true minimum time at which any wavefront reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceField {
    rows: usize,
    cols: usize,
    times: Vec<Option<u32>>,
}

impl DistanceField {
    /// A fresh all-unvisited field with the same dimensions as `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            times: vec![None; grid.len()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// The committed time at `cell`; `None` if unvisited or outside.
    pub fn time(&self, cell: Cell) -> Option<u32> {
        if !self.contains(cell) {
            return None;
        }
        self.times[cell.row * self.cols + cell.col]
    }

    /// Records `time` at `cell` if it improves on the current value.
    ///
    /// The discard comparison is `<=`: a recorded time equal to the
    /// incoming one rejects the commit. This doubles as the visited
    /// check of an unweighted BFS and must not be relaxed to `<`.
    ///
    /// Returns whether the write happened. Out-of-bounds cells are
    /// never committed.
    pub fn commit(&mut self, cell: Cell, time: u32) -> bool {
        if !self.contains(cell) {
            return false;
        }
        let slot = &mut self.times[cell.row * self.cols + cell.col];
        match *slot {
            Some(recorded) if recorded <= time => false,
            _ => {
                *slot = Some(time);
                true
            }
        }
    }

    /// Number of committed (visited) cells.
    pub fn committed(&self) -> usize {
        self.times.iter().filter(|t| t.is_some()).count()
    }

    /// The first committed cell with the maximum time, scanning in
    /// row-major order. `None` when nothing is committed yet.
    pub fn farthest(&self) -> Option<CellTime> {
        let mut best: Option<CellTime> = None;
        for (idx, time) in self.times.iter().enumerate() {
            let Some(time) = *time else { continue };
            let beats = match best {
                Some(b) => time > b.time,
                None => true,
            };
            if beats {
                best = Some(CellTime::new(
                    Cell::new(idx / self.cols, idx % self.cols),
                    time,
                ));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_3x3() -> DistanceField {
        DistanceField::for_grid(&Grid::filled(3, 3, 0).unwrap())
    }

    #[test]
    fn test_fresh_field_unvisited() {
        let field = field_3x3();
        assert_eq!(field.committed(), 0);
        assert_eq!(field.time(Cell::new(1, 1)), None);
        assert_eq!(field.farthest(), None);
    }

    #[test]
    fn test_commit_monotonic() {
        let mut field = field_3x3();
        let cell = Cell::new(0, 0);

        assert!(field.commit(cell, 5));
        assert_eq!(field.time(cell), Some(5));

        // Equal or worse times are no-ops.
        assert!(!field.commit(cell, 5));
        assert!(!field.commit(cell, 7));
        assert_eq!(field.time(cell), Some(5));

        // Strictly better times still land.
        assert!(field.commit(cell, 3));
        assert_eq!(field.time(cell), Some(3));
    }

    #[test]
    fn test_commit_out_of_bounds_rejected() {
        let mut field = field_3x3();
        assert!(!field.commit(Cell::new(3, 0), 0));
        assert_eq!(field.committed(), 0);
    }

    #[test]
    fn test_farthest_first_max_in_row_major_order() {
        let mut field = field_3x3();
        field.commit(Cell::new(0, 1), 4);
        field.commit(Cell::new(1, 0), 4);
        field.commit(Cell::new(2, 2), 2);

        // Both (0, 1) and (1, 0) hold the max; the scan-order first wins.
        assert_eq!(
            field.farthest(),
            Some(CellTime::new(Cell::new(0, 1), 4))
        );
    }

    #[test]
    fn test_farthest_ignores_unvisited() {
        let mut field = field_3x3();
        field.commit(Cell::new(2, 0), 0);
        assert_eq!(
            field.farthest(),
            Some(CellTime::new(Cell::new(2, 0), 0))
        );
    }
}
