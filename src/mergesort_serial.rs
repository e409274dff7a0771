//! Serial Merge-Sort Kernel: the base recursion the parallel driver
//! generalises with fork/join, also used directly once a parallel
//! driver's recursion bottoms out at its leaf threshold.

use crate::config::INSERTION_SORT_CUTOFF;
use crate::leaves::sort_small;
use crate::merge::merge_sequential;

/// Recursively sorts `src`, leaving the result in `dst` if `src_to_dst`,
/// or back in `src` otherwise. `src.len()` must equal `dst.len()`.
pub fn merge_sort_serial<T: Ord + Clone>(src: &mut [T], dst: &mut [T], src_to_dst: bool) {
    debug_assert_eq!(src.len(), dst.len());
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
    if n <= INSERTION_SORT_CUTOFF + 1 {
        sort_small(src);
        if src_to_dst {
            dst.clone_from_slice(src);
        }
        return;
    }

    let m = n / 2;
    let (src_l, src_r) = src.split_at_mut(m);
    let (dst_l, dst_r) = dst.split_at_mut(m);
    merge_sort_serial(src_l, dst_l, !src_to_dst);
    merge_sort_serial(src_r, dst_r, !src_to_dst);

    if src_to_dst {
        merge_sequential(src_l, src_r, dst);
    } else {
        merge_sequential(dst_l, dst_r, src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn sorts_into_dst_and_matches_std_sort() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut src: Vec<i32> = (0..5000).map(|_| rng.gen_range(0..100_000)).collect();
        let mut expected = src.clone();
        expected.sort();

        let mut dst = vec![0; src.len()];
        merge_sort_serial(&mut src, &mut dst, true);
        assert_eq!(dst, expected);
    }

    #[test]
    fn sorts_back_into_src_when_not_src_to_dst() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut src: Vec<i32> = (0..5000).map(|_| rng.gen_range(0..100_000)).collect();
        let mut expected = src.clone();
        expected.sort();

        let mut dst = vec![0; src.len()];
        merge_sort_serial(&mut src, &mut dst, false);
        assert_eq!(src, expected);
    }

    #[test]
    fn handles_empty_and_singleton() {
        let mut src: Vec<i32> = Vec::new();
        let mut dst: Vec<i32> = Vec::new();
        merge_sort_serial(&mut src, &mut dst, true);
        assert!(dst.is_empty());

        let mut src = vec![5];
        let mut dst = vec![0];
        merge_sort_serial(&mut src, &mut dst, true);
        assert_eq!(dst, vec![5]);
    }
}
