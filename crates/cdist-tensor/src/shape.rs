use crate::error::{Result, TensorError};
use std::fmt;

/// A tensor shape, wrapping a vector of dimension sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Create a new shape from a vector of dimensions.
    pub fn new(dims: Vec<usize>) -> Self {
        Shape { dims }
    }

    /// Shape of a `rows x cols` matrix.
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Shape {
            dims: vec![rows, cols],
        }
    }

    /// Number of dimensions (rank).
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements (product of all dimension sizes).
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    /// Returns a reference to the underlying dimension sizes.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns `(rows, cols)` for a rank-2 shape, `None` for any other rank.
    pub fn as_matrix(&self) -> Option<(usize, usize)> {
        match self.dims.as_slice() {
            &[rows, cols] => Some((rows, cols)),
            _ => None,
        }
    }

    /// Like [`Shape::as_matrix`], but reports the offending shape on failure.
    pub fn expect_matrix(&self) -> Result<(usize, usize)> {
        self.as_matrix().ok_or_else(|| {
            TensorError::Other(format!(
                "expected a rank-2 shape, got rank {} shape {}",
                self.ndim(),
                self
            ))
        })
    }

    /// Checks that `len` elements exactly fill this shape.
    pub fn check_len(&self, len: usize) -> Result<()> {
        let numel = self.numel();
        if len != numel {
            return Err(TensorError::LengthMismatch {
                len,
                shape: self.dims.clone(),
                numel,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_shape() {
        let s = Shape::new(vec![2, 3, 4]);
        assert_eq!(s.ndim(), 3);
        assert_eq!(s.numel(), 24);
        assert_eq!(s.dims(), &[2, 3, 4]);
    }

    #[test]
    fn test_scalar_shape() {
        let s = Shape::new(vec![]);
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.numel(), 1); // product of empty = 1
        assert!(s.as_matrix().is_none());
    }

    #[test]
    fn test_as_matrix() {
        assert_eq!(Shape::matrix(2, 3).as_matrix(), Some((2, 3)));
        assert_eq!(Shape::new(vec![0, 5]).as_matrix(), Some((0, 5)));
        assert!(Shape::new(vec![2, 3, 1]).as_matrix().is_none());
        assert!(Shape::new(vec![6]).as_matrix().is_none());
    }

    #[test]
    fn test_expect_matrix_error_names_shape() {
        let err = Shape::new(vec![6]).expect_matrix().unwrap_err();
        assert!(err.to_string().contains("[6]"));
    }

    #[test]
    fn test_check_len() {
        let s = Shape::matrix(2, 3);
        assert!(s.check_len(6).is_ok());
        assert_eq!(
            s.check_len(5),
            Err(TensorError::LengthMismatch {
                len: 5,
                shape: vec![2, 3],
                numel: 6
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::matrix(2, 3).to_string(), "[2, 3]");
        assert_eq!(Shape::new(vec![]).to_string(), "[]");
    }
}
