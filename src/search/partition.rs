//! Static work partitioning over lane 0.
//!
//! The combination space is split by slicing only the first lane's index
//! range into contiguous windows, one per worker; every other lane is
//! cycled completely by each worker. The remainder of an uneven split is
//! spread over the leading windows so no single worker absorbs it all.

/// Splits `0..len` into `workers` contiguous windows.
///
/// The first `len % workers` windows get one extra index. When `workers`
/// exceeds `len`, the surplus windows come out empty (`lo == hi`) — the
/// corresponding workers legitimately have nothing to do.
pub(crate) fn windows(len: usize, workers: usize) -> Vec<(usize, usize)> {
    let base = len / workers;
    let remainder = len % workers;
    let mut result = Vec::with_capacity(workers);
    let mut lo = 0;
    for k in 0..workers {
        let hi = lo + base + usize::from(k < remainder);
        result.push((lo, hi));
        lo = hi;
    }
    result
}
