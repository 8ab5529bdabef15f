use std::ops::Range;

use tracing::{debug, trace};

use crate::executor::{Executor, Task};
use crate::float::Float;
use crate::index;
use crate::metric::PairDistance;
use crate::partition;
use crate::view::RowMajor;

/// Fills the cells `range` of the flattened `a.rows() x b.rows()` output.
///
/// `out` is the caller's slice of exactly those cells: `out[k]` receives cell
/// `range.start + k`. The range may start and end mid-row.
pub fn fill_range<T: Float, M: PairDistance<T>>(
    a: RowMajor<'_, T>,
    b: RowMajor<'_, T>,
    range: Range<usize>,
    out: &mut [T],
) {
    debug_assert_eq!(out.len(), range.len());
    if range.is_empty() {
        return;
    }

    let n = a.cols();
    if n == 0 {
        out.fill(T::ZERO);
        return;
    }

    let mb = b.rows();
    let first = index::decode(range.start, mb);
    let last = index::decode(range.end, mb);

    if first.row == last.row {
        fill_row::<T, M>(a.row(first.row), b.span(first.col..last.col), n, out);
        return;
    }

    let (head, rest) = out.split_at_mut(mb - first.col);
    fill_row::<T, M>(a.row(first.row), b.span(first.col..mb), n, head);

    let (middle, tail) = rest.split_at_mut((last.row - first.row - 1) * mb);
    for (i, out_row) in (first.row + 1..last.row).zip(middle.chunks_exact_mut(mb)) {
        fill_row::<T, M>(a.row(i), b.data(), n, out_row);
    }

    debug_assert_eq!(tail.len(), last.col);
    // `last.row` may be one past the final row when the range ends the grid.
    if last.col > 0 {
        fill_row::<T, M>(a.row(last.row), b.span(0..last.col), n, tail);
    }
}

/// One row segment: `out[k] = M::distance(a_row, b_rows[k])`.
#[inline]
fn fill_row<T: Float, M: PairDistance<T>>(a_row: &[T], b_rows: &[T], n: usize, out: &mut [T]) {
    debug_assert_eq!(b_rows.len(), out.len() * n);
    for (slot, b_row) in out.iter_mut().zip(b_rows.chunks_exact(n)) {
        *slot = M::distance(a_row, b_row);
    }
}

/// Computes the full output on `executor`.
///
/// The flattened grid is split across `executor.num_threads() + 1`
/// participants, since the calling thread works too. Every task owns a
/// disjoint sub-slice of `out`, so nothing is shared mutably and the only
/// synchronization is the final join. A split that yields one task runs
/// inline without touching the pool.
pub fn cdist_parallel<T: Float, M: PairDistance<T>>(
    a: RowMajor<'_, T>,
    b: RowMajor<'_, T>,
    out: &mut [T],
    executor: &dyn Executor,
    min_task_cost: u64,
) {
    debug_assert_eq!(a.cols(), b.cols());
    debug_assert_eq!(out.len(), a.rows() * b.rows());

    let total = out.len();
    let workers = executor.num_threads() + 1;
    let ranges = partition::split(total, workers, partition::cell_cost(a.cols()), min_task_cost);
    debug!(total, workers, tasks = ranges.len(), "partitioned output grid");

    match ranges.len() {
        0 => return,
        1 => {
            fill_range::<T, M>(a, b, 0..total, out);
            return;
        }
        _ => {}
    }

    let mut rest = out;
    let mut tasks: Vec<Task<'_>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        rest = tail;
        tasks.push(Box::new(move || {
            trace!(start = range.start, end = range.end, "filling range");
            fill_range::<T, M>(a, b, range, chunk);
        }));
    }
    debug_assert!(rest.is_empty());

    executor.run_all(tasks);
}
