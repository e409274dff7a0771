//! Radix-hybrid variant of the Parallel Merge-Sort Driver: identical
//! fork/join recursion, with LSD-Radix Permute substituting insertion
//! sort at the leaves, giving linear-time leaves for 32-bit keys.

use crate::config::DEFAULT_RADIX_LEAF_THRESHOLD;
use crate::leaves::parallel_invoke;
use crate::merge::merge_parallel;
use crate::mergesort_parallel::autoscaled_threshold;
use crate::radix::sort_radix_lsd;

fn recurse(src: &mut [u32], dst: &mut [u32], src_to_dst: bool, threshold: usize) {
    let n = src.len();
    if n == 0 {
        return;
    }
    if n == 1 {
        if src_to_dst {
            dst[0] = src[0];
        }
        return;
    }
    if n <= threshold {
        if src_to_dst {
            sort_radix_lsd(src, dst);
        } else {
            let mut tmp = vec![0u32; n];
            sort_radix_lsd(src, &mut tmp);
            src.copy_from_slice(&tmp);
        }
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

/// Sorts `src[l..=r]` using `dst` as scratch space, leaving the result
/// back in `src[l..=r]`.
pub fn sort_radix_hybrid(src: &mut [u32], l: usize, r: usize, dst: &mut [u32]) {
    if r < l {
        return;
    }
    let threshold = autoscaled_threshold(r - l + 1, DEFAULT_RADIX_LEAF_THRESHOLD);
    recurse(&mut src[l..=r], &mut dst[l..=r], false, threshold);
}
