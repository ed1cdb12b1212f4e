use std::ops::Range;
use tracing::warn;

/// Splits `[0, n)` into `workers` contiguous ranges.
///
/// Every range gets `n / workers` items and the first `n % workers` ranges get
/// one extra. Ranges are returned in index order; some are empty when
/// `n < workers`. A `workers` of zero is treated as one.
pub fn partition(n: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk_size = n / workers;
    let remainder = n % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut current = 0;
    for i in 0..workers {
        let begin = current;
        let mut end = begin + chunk_size;
        if i < remainder {
            end += 1;
        }
        ranges.push(begin..end);
        current = end;
    }

    assert_eq!(current, n, "partition does not cover the index range");
    ranges
}

/// Number of hardware threads, or 1 when the platform cannot tell.
pub fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Resolves a requested worker count, clamping to at least one.
pub fn resolve_workers(requested: Option<usize>) -> usize {
    match requested {
        Some(0) => {
            warn!("worker count 0 requested, clamping to 1");
            1
        }
        Some(n) => n,
        None => available_workers(),
    }
}
