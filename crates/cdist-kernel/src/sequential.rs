use crate::float::Float;
use crate::metric::PairDistance;
use crate::view::RowMajor;

/// Single-threaded reference path.
///
/// Walks rows of `a`, then rows of `b`, writing
/// `out[i * b.rows() + j] = M::distance(a.row(i), b.row(j))` in linear order.
/// `out` must hold `a.rows() * b.rows()` elements and `a` and `b` must share
/// a column count; [`crate::CDist`] checks both before calling.
pub fn cdist_sequential<T: Float, M: PairDistance<T>>(
    a: RowMajor<'_, T>,
    b: RowMajor<'_, T>,
    out: &mut [T],
) {
    debug_assert_eq!(a.cols(), b.cols());
    debug_assert_eq!(out.len(), a.rows() * b.rows());
    if out.is_empty() {
        return;
    }

    let n = a.cols();
    if n == 0 {
        out.fill(T::ZERO);
        return;
    }

    for (a_row, out_row) in a.data().chunks_exact(n).zip(out.chunks_exact_mut(b.rows())) {
        for (slot, b_row) in out_row.iter_mut().zip(b.data().chunks_exact(n)) {
            *slot = M::distance(a_row, b_row);
        }
    }
}
