use cdist_tensor::{DType, Shape, Tensor, TensorError};
use tracing::debug;

use crate::config::CdistConfig;
use crate::error::{CdistError, Result};
use crate::executor::Executor;
use crate::float::Float;
use crate::metric::{Kernel, Metric, PairDistance, ScalarSqEuclidean, WideSqEuclidean};
use crate::parallel::cdist_parallel;
use crate::sequential::cdist_sequential;
use crate::view::RowMajor;

/// Pairwise distance operator.
///
/// Built once from its attributes, then called any number of times. Holds no
/// state between calls; each call borrows its inputs, its output and,
/// optionally, a worker pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CDist {
    metric: Metric,
    min_task_cost: u64,
}

impl CDist {
    /// Builds the operator, rejecting unknown metrics before any data is seen.
    pub fn new(config: &CdistConfig) -> Result<Self> {
        let metric: Metric = config.metric.parse()?;
        debug!(%metric, min_task_cost = config.min_task_cost, "created cdist operator");
        Ok(CDist {
            metric,
            min_task_cost: config.min_task_cost,
        })
    }

    /// Shorthand for [`CDist::new`] with default partitioning.
    pub fn from_metric(metric: &str) -> Result<Self> {
        Self::new(&CdistConfig::new(metric))
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn min_task_cost(&self) -> u64 {
        self.min_task_cost
    }

    /// Distances between the rows of `a` (`ma x n`) and `b` (`mb x n`),
    /// written row-major into `out` (`ma x mb`).
    ///
    /// Buffer lengths are checked first; on error `out` is not touched.
    /// Without an executor the call runs on the current thread.
    #[allow(clippy::too_many_arguments)]
    pub fn compute_slices<T: Float>(
        &self,
        a: &[T],
        b: &[T],
        out: &mut [T],
        ma: usize,
        mb: usize,
        n: usize,
        executor: Option<&dyn Executor>,
    ) -> Result<()> {
        let a = RowMajor::new(a, ma, n)
            .map_err(|e| CdistError::ShapeMismatch(format!("first input: {}", shape_detail(e))))?;
        let b = RowMajor::new(b, mb, n)
            .map_err(|e| CdistError::ShapeMismatch(format!("second input: {}", shape_detail(e))))?;
        let cells = ma.checked_mul(mb).ok_or_else(|| {
            CdistError::ShapeMismatch(format!("{} x {} output overflows usize", ma, mb))
        })?;
        if out.len() != cells {
            return Err(CdistError::ShapeMismatch(format!(
                "output holds {} elements but {} x {} distances need {}",
                out.len(),
                ma,
                mb,
                cells
            )));
        }

        self.run(a, b, out, executor);
        Ok(())
    }

    /// Tensor entry point: `a` is `[ma, n]`, `b` is `[mb, n]`, `out` must be
    /// a `[ma, mb]` tensor of the same dtype. `out` is left untouched on error.
    pub fn compute_into(
        &self,
        a: &Tensor,
        b: &Tensor,
        out: &mut Tensor,
        executor: Option<&dyn Executor>,
    ) -> Result<()> {
        let output_shape = output_shape(a.shape(), b.shape())?;
        if out.shape() != &output_shape {
            return Err(CdistError::ShapeMismatch(format!(
                "output has shape {}, expected {}",
                out.shape(),
                output_shape
            )));
        }
        check_dtypes(a, b, out)?;

        match a.dtype() {
            DType::F32 => self.compute_typed::<f32>(a, b, out, executor),
            DType::F64 => self.compute_typed::<f64>(a, b, out, executor),
        }
    }

    /// Like [`CDist::compute_into`], allocating the `[ma, mb]` output.
    pub fn compute(
        &self,
        a: &Tensor,
        b: &Tensor,
        executor: Option<&dyn Executor>,
    ) -> Result<Tensor> {
        let output_shape = output_shape(a.shape(), b.shape())?;
        let mut out = Tensor::zeros(a.dtype(), output_shape);
        self.compute_into(a, b, &mut out, executor)?;
        Ok(out)
    }

    fn compute_typed<T: Float>(
        &self,
        a: &Tensor,
        b: &Tensor,
        out: &mut Tensor,
        executor: Option<&dyn Executor>,
    ) -> Result<()> {
        let (ma, n) = a.shape().expect_matrix()?;
        let (mb, _) = b.shape().expect_matrix()?;
        let a = a.data::<T>()?;
        let b = b.data::<T>()?;
        let out = out.data_mut::<T>()?;
        self.compute_slices(a, b, out, ma, mb, n, executor)
    }

    fn run<T: Float>(
        &self,
        a: RowMajor<'_, T>,
        b: RowMajor<'_, T>,
        out: &mut [T],
        executor: Option<&dyn Executor>,
    ) {
        let kernel = Kernel::select(a.cols());
        debug!(
            metric = %self.metric,
            ?kernel,
            dtype = %T::DTYPE,
            ma = a.rows(),
            mb = b.rows(),
            n = a.cols(),
            threads = executor.map(|e| e.num_threads()),
            "computing pairwise distances"
        );

        match (self.metric, kernel) {
            (Metric::SqEuclidean, Kernel::Scalar) => {
                self.dispatch::<T, ScalarSqEuclidean>(a, b, out, executor)
            }
            (Metric::SqEuclidean, Kernel::Vectorized) => {
                self.dispatch::<T, WideSqEuclidean>(a, b, out, executor)
            }
        }
    }

    fn dispatch<T: Float, M: PairDistance<T>>(
        &self,
        a: RowMajor<'_, T>,
        b: RowMajor<'_, T>,
        out: &mut [T],
        executor: Option<&dyn Executor>,
    ) {
        match executor {
            Some(executor) => cdist_parallel::<T, M>(a, b, out, executor, self.min_task_cost),
            None => cdist_sequential::<T, M>(a, b, out),
        }
    }
}

/// Output shape `[ma, mb]` for inputs `[ma, n]` and `[mb, n]`.
pub fn output_shape(a: &Shape, b: &Shape) -> Result<Shape> {
    let (ma, na) = a.as_matrix().ok_or_else(|| {
        CdistError::ShapeMismatch(format!("first input must be rank 2, got shape {}", a))
    })?;
    let (mb, nb) = b.as_matrix().ok_or_else(|| {
        CdistError::ShapeMismatch(format!("second input must be rank 2, got shape {}", b))
    })?;
    if na != nb {
        return Err(CdistError::ShapeMismatch(format!(
            "inner dimensions differ: {} and {}",
            a, b
        )));
    }
    Ok(Shape::matrix(ma, mb))
}

fn check_dtypes(a: &Tensor, b: &Tensor, out: &Tensor) -> Result<()> {
    for other in [b, out] {
        if other.dtype() != a.dtype() {
            return Err(TensorError::DTypeMismatch {
                expected: a.dtype().to_string(),
                got: other.dtype().to_string(),
            }
            .into());
        }
    }
    Ok(())
}

fn shape_detail(err: CdistError) -> String {
    match err {
        CdistError::ShapeMismatch(detail) => detail,
        other => other.to_string(),
    }
}
