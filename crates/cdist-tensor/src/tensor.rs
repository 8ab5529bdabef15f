use crate::dtype::DType;
use crate::error::Result;
use crate::shape::Shape;
use crate::storage::{CpuStorage, Element};

/// A tensor backed by CPU storage.
///
/// Holds contiguous, row-major data with an associated shape. The dtype is
/// carried by the storage variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    storage: CpuStorage,
    shape: Shape,
}

impl Tensor {
    /// Create a new tensor from data and a shape.
    ///
    /// # Errors
    /// Returns [`crate::TensorError::LengthMismatch`] if `data.len() != shape.numel()`.
    pub fn from_vec<T: Element>(data: Vec<T>, shape: Shape) -> Result<Self> {
        shape.check_len(data.len())?;
        Ok(Tensor {
            storage: T::into_storage(data),
            shape,
        })
    }

    /// Create a zero-filled tensor with the given dtype and shape.
    pub fn zeros(dtype: DType, shape: Shape) -> Self {
        Tensor {
            storage: CpuStorage::zeros(dtype, shape.numel()),
            shape,
        }
    }

    /// Returns a reference to the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the tensor's data type.
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Returns the underlying data as a `T` slice.
    pub fn data<T: Element>(&self) -> Result<&[T]> {
        self.storage.as_slice()
    }

    /// Returns the underlying data as a mutable `T` slice.
    pub fn data_mut<T: Element>(&mut self) -> Result<&mut [T]> {
        self.storage.as_mut_slice()
    }

    /// Returns the underlying storage reference.
    pub fn storage(&self) -> &CpuStorage {
        &self.storage
    }
}
