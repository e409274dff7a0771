//! In-place radix-hybrid driver: parallel fork/join recursion combined
//! via the truly-in-place merge, with the MSD radix sort as its leaf
//! instead of insertion sort, for 32-bit keys under memory pressure.
//! Unstable, since MSD radix is.

use crate::config::DEFAULT_RADIX_LEAF_THRESHOLD;
use crate::leaves::{msd_radix_inplace, parallel_invoke};
use crate::merge_inplace::merge_in_place;
use crate::mergesort_parallel::autoscaled_threshold;

fn recurse(slice: &mut [u32], threshold: usize) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    if n <= threshold {
        msd_radix_inplace(slice);
        return;
    }
    let m = n / 2;
    let (left, right) = slice.split_at_mut(m);
    parallel_invoke(
        || recurse(left, threshold),
        || recurse(right, threshold),
    );
    merge_in_place(slice, m);
}

/// Sorts `src[l..=r]` in place, unstably, using MSD radix leaves.
pub fn sort_inplace_radix_hybrid(src: &mut [u32], l: usize, r: usize) {
    if r < l {
        return;
    }
    let threshold = autoscaled_threshold(r - l + 1, DEFAULT_RADIX_LEAF_THRESHOLD);
    recurse(&mut src[l..=r], threshold);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn sorts_matching_std_sort() {
        let mut rng = StdRng::seed_from_u64(73);
        let mut src: Vec<u32> = (0..300_000).map(|_| rng.gen()).collect();
        let mut expected = src.clone();
        expected.sort();

        let n = src.len();
        sort_inplace_radix_hybrid(&mut src, 0, n - 1);
        assert_eq!(src, expected);
    }

    #[test]
    fn empty_range_is_a_no_op() {
        let mut src: Vec<u32> = Vec::new();
        sort_inplace_radix_hybrid(&mut src, 1, 0);
        assert!(src.is_empty());
    }
}
