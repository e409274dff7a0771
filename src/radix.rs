//! LSD-Radix Permute: a stable, not-in-place, linear-time sort of `u32`
//! keys over four 8-bit digits, using a per-bin de-randomization write
//! buffer so each digit pass turns scattered writes into sequential
//! bursts. Has no dependency on either merge-sort driver; the drivers
//! depend on this module, not the reverse.

use crate::config::{RADIX_BINS, RADIX_BUFFER_DEPTH, RADIX_DIGITS, RADIX_SMALL_INPUT_CUTOFF};
use crate::leaves::sort_small;

fn digit(value: u32, d: usize) -> usize {
    ((value >> (d * 8)) & 0xff) as usize
}

/// One pass over `input`, building all `RADIX_DIGITS` digit-count tables
/// simultaneously.
fn histogram(input: &[u32]) -> [[usize; RADIX_BINS]; RADIX_DIGITS] {
    let mut counts = [[0usize; RADIX_BINS]; RADIX_DIGITS];
    for &v in input {
        for (d, table) in counts.iter_mut().enumerate() {
            table[digit(v, d)] += 1;
        }
    }
    counts
}

/// Per-bin staging area: values are buffered up to `RADIX_BUFFER_DEPTH`
/// deep before being flushed to `output` as one contiguous write, turning
/// what would otherwise be one random write per element into a sequential
/// burst per `RADIX_BUFFER_DEPTH` elements.
struct DerandomizeBuffers {
    slots: Vec<[u32; RADIX_BUFFER_DEPTH]>,
    occupancy: [usize; RADIX_BINS],
}

impl DerandomizeBuffers {
    fn new() -> Self {
        Self {
            slots: vec![[0u32; RADIX_BUFFER_DEPTH]; RADIX_BINS],
            occupancy: [0; RADIX_BINS],
        }
    }

    fn push(&mut self, bin: usize, value: u32, output: &mut [u32], end_of_bin: &mut [usize; RADIX_BINS]) {
        if self.occupancy[bin] < RADIX_BUFFER_DEPTH {
            self.slots[bin][self.occupancy[bin]] = value;
            self.occupancy[bin] += 1;
        } else {
            let start = end_of_bin[bin];
            output[start..start + RADIX_BUFFER_DEPTH].copy_from_slice(&self.slots[bin]);
            end_of_bin[bin] += RADIX_BUFFER_DEPTH;
            self.slots[bin][0] = value;
            self.occupancy[bin] = 1;
        }
    }

    fn flush_all(&mut self, output: &mut [u32], end_of_bin: &mut [usize; RADIX_BINS]) {
        for bin in 0..RADIX_BINS {
            let n = self.occupancy[bin];
            output[end_of_bin[bin]..end_of_bin[bin] + n].copy_from_slice(&self.slots[bin][..n]);
            end_of_bin[bin] += n;
            self.occupancy[bin] = 0;
        }
    }
}

/// Permutes `input` through an internal ping-pong pair of scratch buffers
/// and leaves the final sorted copy in `dst`.
fn permute(input: &[u32], dst: &mut [u32]) {
    let n = input.len();
    let counts = histogram(input);
    let mut buffers = DerandomizeBuffers::new();

    let mut buf_a: Vec<u32> = input.to_vec();
    let mut buf_b: Vec<u32> = vec![0u32; n];

    for (d, count_table) in counts.iter().enumerate() {
        let mut end_of_bin = [0usize; RADIX_BINS];
        let mut acc = 0;
        for bin in 0..RADIX_BINS {
            end_of_bin[bin] = acc;
            acc += count_table[bin];
        }

        for &value in buf_a.iter() {
            let bin = digit(value, d);
            buffers.push(bin, value, &mut buf_b, &mut end_of_bin);
        }
        buffers.flush_all(&mut buf_b, &mut end_of_bin);
        std::mem::swap(&mut buf_a, &mut buf_b);
    }

    dst.copy_from_slice(&buf_a);
}

/// `sort_radix_lsd(src, dst)`: sorts 32-bit unsigned keys from `src`,
/// leaving the stably sorted result in `dst`. Not in place; falls back to
/// insertion sort for inputs smaller than `RADIX_SMALL_INPUT_CUTOFF`.
pub fn sort_radix_lsd(src: &[u32], dst: &mut [u32]) {
    debug_assert_eq!(src.len(), dst.len());
    let n = src.len();
    if n == 0 {
        return;
    }
    if n < RADIX_SMALL_INPUT_CUTOFF {
        dst.copy_from_slice(src);
        sort_small(dst);
        return;
    }
    permute(src, dst);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn sorts_matching_std_sort() {
        let mut rng = StdRng::seed_from_u64(21);
        let src: Vec<u32> = (0..200_000).map(|_| rng.gen()).collect();
        let mut expected = src.clone();
        expected.sort();

        let mut dst = vec![0u32; src.len()];
        sort_radix_lsd(&src, &mut dst);
        assert_eq!(dst, expected);
    }

    #[test]
    fn handles_small_inputs_via_insertion_sort_path() {
        let src = vec![9u32, 3, 7, 1, 0, 42];
        let mut dst = vec![0u32; src.len()];
        sort_radix_lsd(&src, &mut dst);
        assert_eq!(dst, vec![0, 1, 3, 7, 9, 42]);
    }

    #[test]
    fn output_is_a_permutation_of_input_with_many_duplicates() {
        let n = 50_000;
        let src: Vec<u32> = (0..n).map(|i| (i % 13) as u32).collect();
        let mut dst = vec![0u32; src.len()];
        sort_radix_lsd(&src, &mut dst);
        assert!(dst.windows(2).all(|w| w[0] <= w[1]));

        let mut input_counts = [0usize; 13];
        let mut output_counts = [0usize; 13];
        for &v in &src {
            input_counts[v as usize] += 1;
        }
        for &v in &dst {
            output_counts[v as usize] += 1;
        }
        assert_eq!(input_counts, output_counts);
    }

    #[test]
    fn handles_empty_input() {
        let src: Vec<u32> = Vec::new();
        let mut dst: Vec<u32> = Vec::new();
        sort_radix_lsd(&src, &mut dst);
        assert!(dst.is_empty());
    }
}
