//! Rectangular DP grid.
//!
//! Stored as a flat row-major `Vec` for cache efficiency. Rows are indexed by
//! original-line prefix length `i` (0..=N), columns by target-line prefix
//! length `j` (0..=M). Indexing outside the grid panics: callers only ever
//! address cells the recurrence defines.

use std::ops::{Index, IndexMut};

/// An explicitly-sized `rows × cols` grid, built fresh per computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Table<T> {
    /// Number of rows (N + 1).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (M + 1).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = self.offset(row, col);
        &mut self.cells[offset]
    }
}
