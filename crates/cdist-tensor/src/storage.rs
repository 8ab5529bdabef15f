use std::fmt::Debug;

use crate::dtype::DType;
use crate::error::{Result, TensorError};

/// CPU-side tensor storage.
#[derive(Debug, Clone, PartialEq)]
pub enum CpuStorage {
    /// 32-bit floating point storage.
    F32(Vec<f32>),
    /// 64-bit floating point storage.
    F64(Vec<f64>),
}

impl CpuStorage {
    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        match self {
            CpuStorage::F32(v) => v.len(),
            CpuStorage::F64(v) => v.len(),
        }
    }

    /// Returns true if the storage contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create zero-filled storage for the given dtype and element count.
    pub fn zeros(dtype: DType, n: usize) -> Self {
        match dtype {
            DType::F32 => CpuStorage::F32(vec![0.0; n]),
            DType::F64 => CpuStorage::F64(vec![0.0; n]),
        }
    }

    /// Returns the dtype of this storage.
    pub fn dtype(&self) -> DType {
        match self {
            CpuStorage::F32(_) => DType::F32,
            CpuStorage::F64(_) => DType::F64,
        }
    }

    /// Returns the data as a `T` slice.
    ///
    /// # Errors
    /// Returns [`TensorError::DTypeMismatch`] if the storage does not hold `T`.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        T::slice(self).ok_or_else(|| self.dtype_mismatch::<T>())
    }

    /// Returns the data as a mutable `T` slice.
    ///
    /// # Errors
    /// Returns [`TensorError::DTypeMismatch`] if the storage does not hold `T`.
    pub fn as_mut_slice<T: Element>(&mut self) -> Result<&mut [T]> {
        let err = self.dtype_mismatch::<T>();
        T::slice_mut(self).ok_or(err)
    }

    fn dtype_mismatch<T: Element>(&self) -> TensorError {
        TensorError::DTypeMismatch {
            expected: T::DTYPE.to_string(),
            got: self.dtype().to_string(),
        }
    }
}

/// A Rust scalar type that maps onto one [`CpuStorage`] variant.
pub trait Element: Copy + Send + Sync + Debug + PartialEq + 'static {
    const DTYPE: DType;

    fn slice(storage: &CpuStorage) -> Option<&[Self]>;

    fn slice_mut(storage: &mut CpuStorage) -> Option<&mut [Self]>;

    fn into_storage(data: Vec<Self>) -> CpuStorage;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    fn slice(storage: &CpuStorage) -> Option<&[f32]> {
        match storage {
            CpuStorage::F32(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn slice_mut(storage: &mut CpuStorage) -> Option<&mut [f32]> {
        match storage {
            CpuStorage::F32(v) => Some(v.as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(data: Vec<f32>) -> CpuStorage {
        CpuStorage::F32(data)
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    fn slice(storage: &CpuStorage) -> Option<&[f64]> {
        match storage {
            CpuStorage::F64(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn slice_mut(storage: &mut CpuStorage) -> Option<&mut [f64]> {
        match storage {
            CpuStorage::F64(v) => Some(v.as_mut_slice()),
            _ => None,
        }
    }

    fn into_storage(data: Vec<f64>) -> CpuStorage {
        CpuStorage::F64(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_storage() {
        let s = f32::into_storage(vec![1.0, 2.0, 3.0]);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.as_slice::<f32>().unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_zeros() {
        let s = CpuStorage::zeros(DType::F64, 5);
        assert_eq!(s.dtype(), DType::F64);
        assert_eq!(s.as_slice::<f64>().unwrap(), &[0.0; 5]);
    }

    #[test]
    fn test_wrong_element_type() {
        let s = CpuStorage::zeros(DType::F32, 2);
        match s.as_slice::<f64>() {
            Err(TensorError::DTypeMismatch { expected, got }) => {
                assert_eq!(expected, "f64");
                assert_eq!(got, "f32");
            }
            other => panic!("expected dtype mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_mut_slice() {
        let mut s = f64::into_storage(vec![1.0, 2.0]);
        let slice = s.as_mut_slice::<f64>().unwrap();
        slice[0] = 42.0;
        assert_eq!(s.as_slice::<f64>().unwrap()[0], 42.0);
        assert!(s.as_mut_slice::<f32>().is_err());
    }
}
