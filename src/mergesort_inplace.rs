//! In-Place Merge-Sort Driver: recursive fork/join over `src[l..=r]`
//! combined via the truly-in-place merge, with insertion-sort leaves and
//! no auxiliary buffer. Stable, since insertion sort and the rotation
//! merge are both stable.

use crate::config::{DEFAULT_LEAF_THRESHOLD, INSERTION_SORT_CUTOFF};
use crate::leaves::{parallel_invoke, sort_small};
use crate::merge_inplace::merge_in_place;
use crate::mergesort_parallel::autoscaled_threshold;

fn recurse_sequential<T: Ord + Send>(slice: &mut [T]) {
    let n = slice.len();
    if n <= INSERTION_SORT_CUTOFF + 1 {
        sort_small(slice);
        return;
    }
    let m = n / 2;
    let (left, right) = slice.split_at_mut(m);
    recurse_sequential(left);
    recurse_sequential(right);
    merge_in_place(slice, m);
}

fn recurse_parallel<T: Ord + Send>(slice: &mut [T], threshold: usize) {
    let n = slice.len();
    if n <= threshold {
        recurse_sequential(slice);
        return;
    }
    let m = n / 2;
    let (left, right) = slice.split_at_mut(m);
    parallel_invoke(
        || recurse_parallel(left, threshold),
        || recurse_parallel(right, threshold),
    );
    merge_in_place(slice, m);
}

/// `sort_inplace(src, l, r, stable)`: sorts `src[l..=r]` with no
/// auxiliary buffer. `stable` is accepted for symmetry with the other
/// drivers' signatures; this driver is always stable regardless of its
/// value, since no unstable in-place path exists here.
pub fn sort_inplace<T: Ord + Send>(src: &mut [T], l: usize, r: usize, _stable: bool) {
    if r < l {
        return;
    }
    let threshold = autoscaled_threshold(r - l + 1, DEFAULT_LEAF_THRESHOLD);
    recurse_parallel(&mut src[l..=r], threshold);
}
