//! `cdist-tensor` - Dense tensors consumed by the cdist kernel.
//!
//! This crate provides:
//! - A `Tensor` type backed by contiguous row-major CPU storage
//! - Shape utilities, including the rank-2 view the distance kernel needs
//! - Data type definitions (F32, F64) and the `Element` trait tying Rust
//!   scalars to storage variants

pub mod dtype;
pub mod error;
pub mod shape;
pub mod storage;
pub mod tensor;

// Re-export primary types at the crate root for convenience.
pub use dtype::DType;
pub use error::{Result, TensorError};
pub use shape::Shape;
pub use storage::{CpuStorage, Element};
pub use tensor::Tensor;
