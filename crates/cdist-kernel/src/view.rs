use std::ops::Range;

use crate::error::{CdistError, Result};

/// A borrowed, row-major `rows x cols` matrix whose length has been checked
/// once, up front.
#[derive(Debug, Clone, Copy)]
pub struct RowMajor<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
}

impl<'a, T> RowMajor<'a, T> {
    /// Wraps `data`, which must hold exactly `rows * cols` elements.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            CdistError::ShapeMismatch(format!("{} x {} matrix overflows usize", rows, cols))
        })?;
        if data.len() != expected {
            return Err(CdistError::ShapeMismatch(format!(
                "buffer holds {} elements but a {} x {} matrix needs {}",
                data.len(),
                rows,
                cols,
                expected
            )));
        }
        Ok(RowMajor { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Row `i`.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The contiguous block holding rows `range.start..range.end`.
    ///
    /// # Panics
    /// Panics if `range.end > rows()`.
    #[inline]
    pub fn span(&self, range: Range<usize>) -> &'a [T] {
        &self.data[range.start * self.cols..range.end * self.cols]
    }
}
