use cdist_tensor::TensorError;
use thiserror::Error;

/// Errors raised while configuring or running the cdist operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CdistError {
    #[error("unsupported metric: {0:?}")]
    UnsupportedMetric(String),
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("tensor error: {0}")]
    Tensor(#[from] TensorError),
}

pub type Result<T> = std::result::Result<T, CdistError>;
