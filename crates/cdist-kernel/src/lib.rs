//! `cdist-kernel` - Pairwise distance matrices between two sets of vectors.
//!
//! Given `A` (`ma x n`) and `B` (`mb x n`), fills `C` (`ma x mb`) with
//! `C[i, j] = distance(A[i], B[j])`. The output grid is flattened and split
//! into contiguous, disjoint slices that run on a borrowed worker pool
//! without locking.
//!
//! This crate provides:
//! - Scalar and vectorized squared-Euclidean routines (`float`, `metric`)
//! - Row/column decoding of the flattened output space (`index`)
//! - Cost-balanced splitting of that space across workers (`partition`)
//! - A minimal fork-join `Executor` capability, implemented for rayon pools
//! - The sequential reference path and the parallel path
//! - The `CDist` operator, which validates shapes and dispatches

pub mod config;
pub mod error;
pub mod executor;
pub mod float;
pub mod index;
pub mod metric;
pub mod op;
pub mod parallel;
pub mod partition;
pub mod sequential;
pub mod view;

pub use config::CdistConfig;
pub use error::{CdistError, Result};
pub use executor::{Executor, Task};
pub use float::Float;
pub use index::GridIndex;
pub use metric::{Kernel, Metric, PairDistance, ScalarSqEuclidean, WideSqEuclidean};
pub use op::CDist;
pub use view::RowMajor;
