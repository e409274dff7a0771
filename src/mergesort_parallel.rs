//! Parallel Merge-Sort Driver: identical recursion to the serial kernel,
//! with the two child calls dispatched through fork/join above an
//! autoscaled leaf threshold, and delegated to the serial kernel below it.

use crate::config::DEFAULT_LEAF_THRESHOLD;
use crate::leaves::parallel_invoke;
use crate::merge::merge_parallel;
use crate::mergesort_serial::merge_sort_serial;

/// Raises `baseline` to `n / num_cpus` once `n` exceeds `baseline *
/// num_cpus`, so the recursion doesn't fork far past the point where
/// there are enough leaves to keep every core busy.
pub fn autoscaled_threshold(n: usize, baseline: usize) -> usize {
    let cores = num_cpus::get().max(1);
    if n > baseline.saturating_mul(cores) {
        (n / cores).max(1)
    } else {
        baseline
    }
}

fn recurse<T>(src: &mut [T], dst: &mut [T], src_to_dst: bool, threshold: usize)
where
    T: Ord + Clone + Send,
{
    let n = src.len();
    if n == 0 {
        return;
    }
    if n == 1 {
        if src_to_dst {
            dst[0] = src[0].clone();
        }
        return;
    }
    if n <= threshold {
        merge_sort_serial(src, dst, src_to_dst);
        return;
    }

    let m = n / 2;
    let (src_l, src_r) = src.split_at_mut(m);
    let (dst_l, dst_r) = dst.split_at_mut(m);
    parallel_invoke(
        || recurse(src_l, dst_l, !src_to_dst, threshold),
        || recurse(src_r, dst_r, !src_to_dst, threshold),
    );

    if src_to_dst {
        merge_parallel(src_l, src_r, dst);
    } else {
        merge_parallel(dst_l, dst_r, src);
    }
}

/// `sort(src, l, r, dst)`: sorts `src[l..=r]`, leaving the result in
/// `dst[l..=r]`. A no-op when `r < l`.
pub fn sort<T>(src: &mut [T], l: usize, r: usize, dst: &mut [T])
where
    T: Ord + Clone + Send,
{
    if r < l {
        return;
    }
    let threshold = autoscaled_threshold(r - l + 1, DEFAULT_LEAF_THRESHOLD);
    recurse(&mut src[l..=r], &mut dst[l..=r], true, threshold);
}

/// `sort_pseudo_inplace(src, l, r, aux)`: sorts `src[l..=r]` using `aux`
/// as scratch space, leaving the result back in `src[l..=r]`.
pub fn sort_pseudo_inplace<T>(src: &mut [T], l: usize, r: usize, aux: &mut [T])
where
    T: Ord + Clone + Send,
{
    if r < l {
        return;
    }
    let threshold = autoscaled_threshold(r - l + 1, DEFAULT_LEAF_THRESHOLD);
    recurse(&mut src[l..=r], &mut aux[l..=r], false, threshold);
}
