//! Parallel-Merge: the scratch-variant merge used by the not-in-place
//! merge-sort drivers, with a sequential two-finger fallback below a
//! cutoff.

use crate::config::MERGE_SEQUENTIAL_CUTOFF;
use crate::leaves::parallel_invoke;

/// First index in `slice` whose element is not less than `key` (standard
/// lower bound: every element of `slice[..idx]` is `< key`).
pub(crate) fn lower_bound<T: Ord>(slice: &[T], key: &T) -> usize {
    slice.partition_point(|x| x < key)
}

/// First index in `slice` whose element is greater than `key` (standard
/// upper bound: every element of `slice[..idx]` is `<= key`).
pub(crate) fn upper_bound<T: Ord>(slice: &[T], key: &T) -> usize {
    slice.partition_point(|x| x <= key)
}

/// Stable two-finger merge of two sorted runs into `dst`. `a[i] <= b[j]`
/// draws from `a` first, so ties preserve `a`'s elements ahead of `b`'s.
///
/// Used directly by the fully-sequential merge-sort kernel, and as the
/// below-cutoff fallback inside `merge_parallel`.
pub(crate) fn merge_sequential<T: Ord + Clone>(a: &[T], b: &[T], dst: &mut [T]) {
    debug_assert_eq!(dst.len(), a.len() + b.len());
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            dst[k] = a[i].clone();
            i += 1;
        } else {
            dst[k] = b[j].clone();
            j += 1;
        }
        k += 1;
    }
    if i < a.len() {
        dst[k..].clone_from_slice(&a[i..]);
    } else if j < b.len() {
        dst[k..].clone_from_slice(&b[j..]);
    }
}

/// Stably merges two already-sorted runs `a` and `b` into `dst`
/// (`dst.len() == a.len() + b.len()`), in parallel divide-and-conquer
/// fashion above `MERGE_SEQUENTIAL_CUTOFF`, with a sequential two-finger
/// merge below it.
///
/// The longer run is chosen as the pivot side and split at its midpoint;
/// the split point in the other run is found by binary search, using
/// lower-bound when `a` is the pivot and upper-bound when `b` is, so that
/// equal keys keep `a`'s elements ahead of `b`'s across the recursion.
pub fn merge_parallel<T>(a: &[T], b: &[T], dst: &mut [T])
where
    T: Ord + Clone + Send,
{
    debug_assert_eq!(dst.len(), a.len() + b.len());

    if a.is_empty() {
        dst.clone_from_slice(b);
        return;
    }
    if b.is_empty() {
        dst.clone_from_slice(a);
        return;
    }
    if a.len() + b.len() <= MERGE_SEQUENTIAL_CUTOFF {
        merge_sequential(a, b, dst);
        return;
    }

    let (a_left, a_right, b_left, b_right) = if a.len() >= b.len() {
        let mid = a.len() / 2;
        let pivot = &a[mid];
        let split = lower_bound(b, pivot);
        (&a[..mid], &a[mid..], &b[..split], &b[split..])
    } else {
        let mid = b.len() / 2;
        let pivot = &b[mid];
        let split = upper_bound(a, pivot);
        (&a[..split], &a[split..], &b[..mid], &b[mid..])
    };

    let left_len = a_left.len() + b_left.len();
    let (dst_left, dst_right) = dst.split_at_mut(left_len);

    parallel_invoke(
        || merge_parallel(a_left, b_left, dst_left),
        || merge_parallel(a_right, b_right, dst_right),
    );
}
