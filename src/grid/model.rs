//! Rectangular marker board.

use super::types::{Cell, GridError};

/// A rectangular `rows x cols` board of `i32` markers.
///
/// A non-zero marker designates a source cell; zero is empty. Storage
/// is a single flat row-major vector behind `(row, col)` accessors.
///
/// Dimensions are fixed at construction and validated there: the only
/// way malformed input (empty or jagged rows) enters the crate is as a
/// [`GridError`], never as a later out-of-bounds read.
///
/// # Examples
///
/// ```
/// use u_gridflow::grid::{Cell, Grid};
///
/// let grid = Grid::from_rows(vec![vec![0, 1], vec![0, 0]]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert!(grid.is_source(Cell::new(0, 1)));
/// assert_eq!(grid.sources().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Builds a grid from nested rows.
    ///
    /// Rejects an empty row set, a zero-width first row, and jagged
    /// rows with the corresponding [`GridError`].
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::Empty);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Jagged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        let row_count = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Builds a `rows x cols` grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: i32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects zero-sized boards.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// The marker at `cell`, or `None` outside the board.
    pub fn get(&self, cell: Cell) -> Option<i32> {
        self.contains(cell)
            .then(|| self.cells[cell.row * self.cols + cell.col])
    }

    /// Writes `value` at `cell`. Returns whether the write happened
    /// (false outside the board).
    pub fn set(&mut self, cell: Cell, value: i32) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.cells[cell.row * self.cols + cell.col] = value;
        true
    }

    /// The geometric center `(rows / 2, cols / 2)`.
    pub fn center(&self) -> Cell {
        Cell::new(self.rows / 2, self.cols / 2)
    }

    /// Whether `cell` holds a non-zero marker.
    pub fn is_source(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(v) if v != 0)
    }

    /// Iterates the source cells (non-zero markers) in row-major order.
    pub fn sources(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, &v)| {
            (v != 0).then(|| Cell::new(idx / self.cols, idx % self.cols))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_ok() {
        let grid = Grid::from_rows(vec![vec![1, 0, 0], vec![0, 0, 2]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(Cell::new(1, 2)), Some(2));
    }

    #[test]
    fn test_from_rows_empty_rejected() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn test_from_rows_jagged_rejected() {
        let err = Grid::from_rows(vec![vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Jagged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_filled_zero_dims_rejected() {
        assert_eq!(Grid::filled(0, 3, 0), Err(GridError::Empty));
        assert_eq!(Grid::filled(3, 0, 0), Err(GridError::Empty));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::filled(2, 2, 0).unwrap();
        assert!(grid.set(Cell::new(1, 1), 7));
        assert_eq!(grid.get(Cell::new(1, 1)), Some(7));
        assert!(!grid.set(Cell::new(2, 0), 7));
        assert_eq!(grid.get(Cell::new(0, 2)), None);
    }

    #[test]
    fn test_sources_row_major_order() {
        let grid = Grid::from_rows(vec![vec![0, 5], vec![-1, 0]]).unwrap();
        let sources: Vec<Cell> = grid.sources().collect();
        assert_eq!(sources, vec![Cell::new(0, 1), Cell::new(1, 0)]);
        assert!(grid.is_source(Cell::new(1, 0)));
        assert!(!grid.is_source(Cell::new(0, 0)));
    }

    #[test]
    fn test_center() {
        assert_eq!(
            Grid::filled(3, 3, 0).unwrap().center(),
            Cell::new(1, 1)
        );
        assert_eq!(
            Grid::filled(2, 5, 0).unwrap().center(),
            Cell::new(1, 2)
        );
    }
}
