//! Truly in-place merge of two adjacent sorted runs, via block rotation
//! rather than an auxiliary buffer. Consolidates what this crate's
//! ancestor implementation split across several preventative/adaptive
//! in-place merge variants into one recursive algorithm.

use crate::config::MERGE_SEQUENTIAL_CUTOFF;
use crate::merge::{lower_bound, upper_bound};

/// Sequential in-place merge below the parallel cutoff: repeatedly rotate
/// a misordered element from the right run into place among the left.
/// Quadratic in the worst case, bounded by `MERGE_SEQUENTIAL_CUTOFF`.
fn merge_in_place_sequential<T: Ord>(slice: &mut [T], mid: usize) {
    let (mut i, mut j) = (0, mid);
    while i < j && j < slice.len() {
        if slice[i] <= slice[j] {
            i += 1;
        } else {
            slice[i..=j].rotate_right(1);
            i += 1;
            j += 1;
        }
    }
}

/// Merges the two sorted runs `slice[..mid]` and `slice[mid..]` in place.
///
/// The longer run is the pivot side; its midpoint element is located in
/// the other run by binary search, and the block between the two
/// midpoints is rotated so the two halves become contiguous, sorted
/// sub-ranges that can be merged independently and in parallel.
pub fn merge_in_place<T: Ord + Send>(slice: &mut [T], mid: usize) {
    let len = slice.len();
    let (a_len, b_len) = (mid, len - mid);
    if a_len == 0 || b_len == 0 {
        return;
    }
    if a_len + b_len <= MERGE_SEQUENTIAL_CUTOFF {
        merge_in_place_sequential(slice, mid);
        return;
    }

    let (p, q) = if a_len >= b_len {
        let p = mid / 2;
        let split = {
            let pivot = &slice[p];
            lower_bound(&slice[mid..], pivot)
        };
        (p, mid + split)
    } else {
        let b_pivot_idx = mid + b_len / 2;
        let split = {
            let pivot = &slice[b_pivot_idx];
            upper_bound(&slice[..mid], pivot)
        };
        (split, b_pivot_idx)
    };

    let rotate_amount = mid - p;
    slice[p..q].rotate_left(rotate_amount);

    let new_boundary = p + (q - mid);
    let (left, right) = slice.split_at_mut(new_boundary);
    let mid_left = p;
    let mid_right = mid - p;

    crate::leaves::parallel_invoke(
        || merge_in_place(left, mid_left),
        || merge_in_place(right, mid_right),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn merges_empty_runs() {
        let mut slice = vec![1, 2, 3];
        merge_in_place(&mut slice, 0);
        assert_eq!(slice, vec![1, 2, 3]);

        let mut slice = vec![1, 2, 3];
        merge_in_place(&mut slice, 3);
        assert_eq!(slice, vec![1, 2, 3]);
    }

    #[test]
    fn merges_large_runs_matching_std_sort() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut a: Vec<i32> = (0..10_000).map(|_| rng.gen_range(0..500_000)).collect();
        let mut b: Vec<i32> = (0..10_000).map(|_| rng.gen_range(0..500_000)).collect();
        a.sort();
        b.sort();

        let mut expected: Vec<i32> = a.iter().chain(b.iter()).cloned().collect();
        expected.sort();

        let mut combined = a;
        let mid = combined.len();
        combined.extend(b);
        merge_in_place(&mut combined, mid);
        assert_eq!(combined, expected);
    }
}
