//! In-tree implementations of the collaborator primitives the sort
//! drivers treat as externally supplied: structured fork/join, a
//! sequential small-input sort, and a truly in-place MSD radix sort.

use rayon::prelude::*;

use crate::config::{INSERTION_SORT_CUTOFF, RADIX_BINS};

/// Structured fork/join: both closures run to completion, possibly on
/// separate worker threads, before this call returns. A thin wrapper over
/// `rayon::join`, isolated here so neither the merge-sort nor the radix
/// modules depend on `rayon` directly.
pub fn parallel_invoke<RA, RB, A, B>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

/// Sequential in-place insertion sort, used as the leaf of every
/// divide-and-conquer driver in this crate once a subproblem is small
/// enough to make the lower asymptotic complexity not worth the overhead.
pub fn sort_small<T: Ord>(slice: &mut [T]) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && slice[j] < slice[j - 1] {
            slice.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Parallel fill, used by benchmarks exercising the reduction; not used
/// by any sort driver itself.
pub fn parallel_fill<T: Clone + Send + Sync>(slice: &mut [T], value: T) {
    slice.par_iter_mut().for_each(|slot| *slot = value.clone());
}

fn digit(value: u32, byte: u32) -> usize {
    ((value >> (byte * 8)) & 0xff) as usize
}

/// Truly in-place, unstable MSD radix sort over `u32` keys (American flag
/// sort). Used as the leaf of the in-place radix-hybrid adaptive driver
/// when memory pressure rules out the not-in-place LSD path.
pub fn msd_radix_inplace(slice: &mut [u32]) {
    msd_radix_recurse(slice, 3);
}

fn msd_radix_recurse(slice: &mut [u32], byte: u32) {
    if slice.len() <= INSERTION_SORT_CUTOFF {
        sort_small(slice);
        return;
    }

    let mut counts = [0usize; RADIX_BINS];
    for &v in slice.iter() {
        counts[digit(v, byte)] += 1;
    }

    let mut starts = [0usize; RADIX_BINS];
    let mut ends = [0usize; RADIX_BINS];
    let mut acc = 0;
    for bin in 0..RADIX_BINS {
        starts[bin] = acc;
        acc += counts[bin];
        ends[bin] = acc;
    }

    let mut cursor = starts;
    for bin in 0..RADIX_BINS {
        while cursor[bin] < ends[bin] {
            let mut v = slice[cursor[bin]];
            let mut home = digit(v, byte);
            while home != bin {
                let dst = cursor[home];
                std::mem::swap(&mut slice[dst], &mut v);
                cursor[home] += 1;
                home = digit(v, byte);
            }
            slice[cursor[bin]] = v;
            cursor[bin] += 1;
        }
    }

    if byte == 0 {
        return;
    }

    for bin in 0..RADIX_BINS {
        let (s, e) = (starts[bin], ends[bin]);
        if e - s > 1 {
            msd_radix_recurse(&mut slice[s..e], byte - 1);
        }
    }
}
