use std::fmt;
use std::str::FromStr;

use crate::error::CdistError;
use crate::float::{sq_euclidean_scalar, Float};

/// Vectors at least this long go through the vectorized routine; shorter ones
/// use the plain loop, where SIMD setup costs more than it saves.
pub const VECTORIZED_MIN_LEN: usize = 8;

/// Distance metrics the operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// `sum_k (a[k] - b[k])^2`
    SqEuclidean,
}

impl Metric {
    /// The identifier used in operator attributes.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::SqEuclidean => "sqeuclidean",
        }
    }
}

impl FromStr for Metric {
    type Err = CdistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqeuclidean" => Ok(Metric::SqEuclidean),
            other => Err(CdistError::UnsupportedMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which per-pair routine a call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    Scalar,
    Vectorized,
}

impl Kernel {
    /// Picks the routine for vectors of length `n`. Resolved once per call.
    pub fn select(n: usize) -> Kernel {
        if n >= VECTORIZED_MIN_LEN {
            Kernel::Vectorized
        } else {
            Kernel::Scalar
        }
    }
}

/// A per-pair distance routine, resolved at compile time so the inner loop
/// carries no dispatch.
pub trait PairDistance<T>: 'static {
    /// Distance between two equal-length rows. Never mutates its inputs.
    fn distance(a: &[T], b: &[T]) -> T;
}

/// Squared Euclidean distance, plain accumulation loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarSqEuclidean;

/// Squared Euclidean distance, wide-register reduction.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideSqEuclidean;

impl<T: Float> PairDistance<T> for ScalarSqEuclidean {
    #[inline]
    fn distance(a: &[T], b: &[T]) -> T {
        sq_euclidean_scalar(a, b)
    }
}

impl<T: Float> PairDistance<T> for WideSqEuclidean {
    #[inline]
    fn distance(a: &[T], b: &[T]) -> T {
        T::sq_euclidean_wide(a, b)
    }
}
