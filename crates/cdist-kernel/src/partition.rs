use std::ops::Range;

/// Smallest amount of estimated work, in cost units, worth handing to a
/// separate task. Below it the call keeps fewer, larger tasks.
pub const DEFAULT_MIN_TASK_COST: u64 = 40_000;

/// Estimated cost of one output cell for vectors of length `n`: a subtract,
/// a multiply and an add per element, plus a unit for the store.
#[inline]
pub fn cell_cost(n: usize) -> u64 {
    (n as u64).saturating_mul(3).saturating_add(1)
}

/// Splits `0..total` into contiguous, non-overlapping ranges for `workers`
/// participants.
///
/// The number of ranges is the number of `min_task_cost`-sized tasks the
/// estimated work fills, clamped to `1..=min(workers, total)`. A
/// `min_task_cost` of 0 or 1 disables the floor. Cells cost the same, so
/// range lengths differ by at most one. `total == 0` yields no ranges.
pub fn split(total: usize, workers: usize, cell_cost: u64, min_task_cost: u64) -> Vec<Range<usize>> {
    if total == 0 {
        return Vec::new();
    }

    let max_tasks = workers.max(1).min(total);
    let wanted = if min_task_cost <= 1 {
        max_tasks
    } else {
        let work = (total as u64).saturating_mul(cell_cost.max(1));
        usize::try_from(work.div_ceil(min_task_cost)).unwrap_or(usize::MAX)
    };
    let tasks = wanted.clamp(1, max_tasks);

    let base = total / tasks;
    let extra = total % tasks;
    let mut ranges = Vec::with_capacity(tasks);
    let mut start = 0;
    for t in 0..tasks {
        let len = base + usize::from(t < extra);
        ranges.push(start..start + len);
        start += len;
    }
    debug_assert_eq!(start, total);
    ranges
}
