//! Coordinates, connectivity, and the grid error type.

use std::fmt;

/// A grid coordinate: `row` in `0..rows`, `col` in `0..cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A cell paired with a BFS time.
///
/// Used both as a frontier queue entry (the time at which the cell was
/// discovered) and as the return of a farthest-cell scan (the time at
/// which the cell was committed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellTime {
    pub cell: Cell,
    pub time: u32,
}

impl CellTime {
    pub fn new(cell: Cell, time: u32) -> Self {
        Self { cell, time }
    }
}

/// Neighborhood structure used when expanding a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Von Neumann neighborhood: the four orthogonal neighbors.
    FourWay,

    /// Moore neighborhood: orthogonal plus diagonal neighbors.
    #[default]
    EightWay,
}

const FOUR_WAY: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const EIGHT_WAY: [(i32, i32); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Connectivity {
    /// The relative offsets of this neighborhood.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::FourWay => &FOUR_WAY,
            Connectivity::EightWay => &EIGHT_WAY,
        }
    }

    /// Iterates the in-bounds neighbors of `cell` on a `rows x cols` board.
    ///
    /// Offsets that land outside the board are skipped here, so callers
    /// never see coordinates they would have to bounds-check again.
    pub fn neighbors(
        self,
        cell: Cell,
        rows: usize,
        cols: usize,
    ) -> impl Iterator<Item = Cell> {
        self.offsets().iter().filter_map(move |&(di, dj)| {
            let row = cell.row as i64 + di as i64;
            let col = cell.col as i64 + dj as i64;
            let inside = row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols;
            inside.then(|| Cell::new(row as usize, col as usize))
        })
    }
}

/// Malformed grid input or an out-of-bounds explicit coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The row set was empty, or the first row had zero columns.
    Empty,

    /// A row's length differed from the first row's.
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An explicitly supplied cell lies outside the board.
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::Jagged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "cell {} outside {}x{} grid", cell, rows, cols)
            }
        }
    }
}

impl std::error::Error for GridError {}
