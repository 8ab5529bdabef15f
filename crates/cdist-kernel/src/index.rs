/// A cell position in a row-major grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GridIndex {
    pub row: usize,
    pub col: usize,
}

/// Maps a linear offset into a grid with `cols` columns to its row and
/// column. `linear == rows * cols` decodes to `(rows, 0)`, the position just
/// past the last cell.
///
/// # Panics
/// Panics if `cols == 0`.
#[inline]
pub fn decode(linear: usize, cols: usize) -> GridIndex {
    GridIndex {
        row: linear / cols,
        col: linear % cols,
    }
}

/// Inverse of [`decode`].
#[inline]
pub fn encode(index: GridIndex, cols: usize) -> usize {
    index.row * cols + index.col
}
