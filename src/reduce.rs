//! Parallel Reduction: an illustrative fork/join skeleton over a
//! half-open range, assuming associativity and promising no particular
//! evaluation order.

use crate::leaves::parallel_invoke;

/// `sum(array, l, r, threshold)`: sums `array[l..r]` (half-open),
/// sequentially below `threshold`, forked via structured fork/join above
/// it. The overflow-safe midpoint `l + (r - l) / 2` avoids the
/// intermediate overflow a naive `(l + r) / 2` risks for large ranges.
pub fn sum<T>(array: &[T], l: usize, r: usize, threshold: usize) -> T
where
    T: Copy + Send + Sync + std::iter::Sum + std::ops::Add<Output = T>,
{
    if l >= r {
        return std::iter::empty::<T>().sum();
    }
    if r - l <= threshold {
        return array[l..r].iter().copied().sum();
    }
    let m = l + (r - l) / 2;
    let (sum_l, sum_r) = parallel_invoke(
        || sum(array, l, m, threshold),
        || sum(array, m, r, threshold),
    );
    sum_l + sum_r
}
