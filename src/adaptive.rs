//! Adaptive Top Driver: measures anticipated memory pressure against a
//! configured fraction of total physical memory and dispatches to
//! whichever of the not-in-place and in-place drivers best fits it,
//! degrading to in-place whenever the auxiliary buffer fails to allocate.

use crate::config::AdaptiveConfig;
use crate::memory::{MemoryProbe, SystemMemoryProbe};
use crate::mergesort_inplace::sort_inplace;
use crate::mergesort_inplace_radix::sort_inplace_radix_hybrid;
use crate::mergesort_radix_hybrid::sort_radix_hybrid;
use crate::radix::sort_radix_lsd;

/// Fraction of total physical memory anticipated to be in use once an
/// auxiliary buffer of `n` `u32`s is allocated on top of what's already
/// used. A probe reading of `(0, _)` is the "unknown" sentinel and is
/// treated as memory being plentiful.
fn anticipated_fraction(n: usize, probe: &dyn MemoryProbe) -> f64 {
    let (total_mb, used_mb) = probe.physical_memory();
    if total_mb == 0 {
        return 0.0;
    }
    let additional_mb = (n as u64 * std::mem::size_of::<u32>() as u64) / (1024 * 1024);
    (used_mb + additional_mb) as f64 / total_mb as f64
}

fn try_alloc_u32(n: usize) -> Option<Vec<u32>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n).ok()?;
    buf.resize(n, 0);
    Some(buf)
}

/// `sort_radix_adaptive(src, mem_fraction)`: unstable. Prefers the
/// not-in-place linear-time LSD radix sort, falling back to a truly
/// in-place MSD-radix-leaved fork/join driver under memory pressure or
/// allocation failure.
pub fn sort_radix_adaptive_with(src: &mut [u32], config: &AdaptiveConfig, probe: &dyn MemoryProbe) {
    let n = src.len();
    if n <= 1 {
        return;
    }
    let fraction = anticipated_fraction(n, probe);
    if config.verbose {
        eprintln!(
            "sort_radix_adaptive: anticipated memory fraction = {fraction:.3} (threshold {})",
            config.memory_fraction
        );
    }
    if fraction > config.memory_fraction {
        if config.verbose {
            eprintln!("sort_radix_adaptive: memory pressure high, running in-place MSD radix-hybrid");
        }
        sort_inplace_radix_hybrid(src, 0, n - 1);
        return;
    }
    match try_alloc_u32(n) {
        Some(mut aux) => {
            if config.verbose {
                eprintln!("sort_radix_adaptive: running not-in-place LSD radix sort");
            }
            sort_radix_lsd(src, &mut aux);
            src.copy_from_slice(&aux);
        }
        None => {
            if config.verbose {
                eprintln!("sort_radix_adaptive: allocation failed, running in-place MSD radix-hybrid");
            }
            sort_inplace_radix_hybrid(src, 0, n - 1);
        }
    }
}

pub fn sort_radix_adaptive(src: &mut [u32], mem_fraction: f64) {
    let config = AdaptiveConfig {
        memory_fraction: mem_fraction,
        ..AdaptiveConfig::default()
    };
    sort_radix_adaptive_with(src, &config, &SystemMemoryProbe);
}

/// `sort_linear_inplace_adaptive(src, stable, mem_fraction)`: always
/// stable. Prefers the linear-time parallel radix-hybrid merge-sort
/// driver, falling back to the in-place merge-sort driver under memory
/// pressure or allocation failure, since no known linear-time in-place
/// stable sort exists.
pub fn sort_linear_inplace_adaptive_with(
    src: &mut [u32],
    stable: bool,
    config: &AdaptiveConfig,
    probe: &dyn MemoryProbe,
) {
    let n = src.len();
    if n <= 1 {
        return;
    }
    let fraction = anticipated_fraction(n, probe);
    if config.verbose {
        eprintln!(
            "sort_linear_inplace_adaptive: anticipated memory fraction = {fraction:.3} (threshold {})",
            config.memory_fraction
        );
    }
    if fraction > config.memory_fraction {
        if config.verbose {
            eprintln!("sort_linear_inplace_adaptive: memory pressure high, running in-place merge sort");
        }
        sort_inplace(src, 0, n - 1, stable);
        return;
    }
    match try_alloc_u32(n) {
        Some(mut aux) => {
            if config.verbose {
                eprintln!("sort_linear_inplace_adaptive: running radix-hybrid parallel merge sort");
            }
            sort_radix_hybrid(src, 0, n - 1, &mut aux);
        }
        None => {
            if config.verbose {
                eprintln!("sort_linear_inplace_adaptive: allocation failed, running in-place merge sort");
            }
            sort_inplace(src, 0, n - 1, stable);
        }
    }
}

pub fn sort_linear_inplace_adaptive(src: &mut [u32], stable: bool, mem_fraction: f64) {
    let config = AdaptiveConfig {
        memory_fraction: mem_fraction,
        ..AdaptiveConfig::default()
    };
    sort_linear_inplace_adaptive_with(src, stable, &config, &SystemMemoryProbe);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::FixedMemoryProbe;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn plentiful_probe() -> FixedMemoryProbe {
        FixedMemoryProbe { total_mb: 1_000_000, used_mb: 10 }
    }

    fn scarce_probe() -> FixedMemoryProbe {
        FixedMemoryProbe { total_mb: 100, used_mb: 95 }
    }

    #[test]
    fn sort_radix_adaptive_sorts_under_plentiful_memory() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut src: Vec<u32> = (0..50_000).map(|_| rng.gen()).collect();
        let mut expected = src.clone();
        expected.sort();

        let config = AdaptiveConfig::default();
        sort_radix_adaptive_with(&mut src, &config, &plentiful_probe());
        assert_eq!(src, expected);
    }

    #[test]
    fn sort_radix_adaptive_sorts_under_scarce_memory() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut src: Vec<u32> = (0..50_000).map(|_| rng.gen()).collect();
        let mut expected = src.clone();
        expected.sort();

        let config = AdaptiveConfig::default();
        sort_radix_adaptive_with(&mut src, &config, &scarce_probe());
        assert_eq!(src, expected);
    }

    #[test]
    fn sort_linear_inplace_adaptive_sorts_under_both_pressures() {
        let mut rng = StdRng::seed_from_u64(8);
        let src: Vec<u32> = (0..50_000).map(|_| rng.gen()).collect();
        let mut expected = src.clone();
        expected.sort();

        let config = AdaptiveConfig::default();

        let mut plentiful = src.clone();
        sort_linear_inplace_adaptive_with(&mut plentiful, true, &config, &plentiful_probe());
        assert_eq!(plentiful, expected);

        let mut scarce = src.clone();
        sort_linear_inplace_adaptive_with(&mut scarce, true, &config, &scarce_probe());
        assert_eq!(scarce, expected);
    }

    #[test]
    fn unknown_memory_reading_is_treated_as_plentiful() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut src: Vec<u32> = (0..20_000).map(|_| rng.gen()).collect();
        let mut expected = src.clone();
        expected.sort();

        let config = AdaptiveConfig::default();
        let unknown = FixedMemoryProbe { total_mb: 0, used_mb: 0 };
        sort_radix_adaptive_with(&mut src, &config, &unknown);
        assert_eq!(src, expected);
    }
}
