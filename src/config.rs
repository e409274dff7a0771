//! Tunable thresholds for the sort drivers, and a validated builder for
//! the adaptive top drivers' configuration.

use crate::error::{SortError, SortResult};

/// Default leaf-size threshold (in elements) below which the parallel
/// merge-sort and in-place merge-sort drivers stop forking and fall back
/// to a sequential leaf. Autoscaled up per-call when `n > threshold *
/// num_cpus`.
pub const DEFAULT_LEAF_THRESHOLD: usize = 16 * 1024;

/// Leaf threshold baseline used by the radix-hybrid parallel drivers.
pub const DEFAULT_RADIX_LEAF_THRESHOLD: usize = 24 * 1024;

/// Span (in elements, inclusive-range length minus one) at or below which
/// the merge-sort kernels switch to insertion sort.
pub const INSERTION_SORT_CUTOFF: usize = 48;

/// Span (in elements) at or below which the LSD radix permute defers
/// entirely to insertion sort.
pub const RADIX_SMALL_INPUT_CUTOFF: usize = 100;

/// Span (in elements) at or below which a merge's own divide-and-conquer
/// falls back to a sequential two-finger merge.
pub const MERGE_SEQUENTIAL_CUTOFF: usize = 2048;

/// Default fraction of total physical memory above which the adaptive
/// drivers prefer an in-place strategy over allocating an auxiliary
/// buffer.
pub const DEFAULT_MEMORY_FRACTION: f64 = 0.75;

/// Radix width in bits (256 bins) and digit count (4, covering a `u32`
/// key), both fixed by the data model.
pub const RADIX_BITS: u32 = 8;
pub const RADIX_BINS: usize = 1 << RADIX_BITS;
pub const RADIX_DIGITS: usize = 4;

/// De-randomization write-buffer depth, per bin, for the LSD radix
/// permute.
pub const RADIX_BUFFER_DEPTH: usize = 128;

/// Tunables for the adaptive top drivers.
#[derive(Debug, Clone)]
pub struct AdaptiveConfig {
    /// Fraction of total physical memory above which an in-place strategy
    /// is preferred over allocating an auxiliary buffer.
    pub memory_fraction: f64,
    /// Leaf threshold baseline handed to the merge-sort drivers this
    /// config dispatches to.
    pub leaf_threshold: usize,
    /// Emit `eprintln!` diagnostics describing the dispatch decision.
    pub verbose: bool,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            memory_fraction: DEFAULT_MEMORY_FRACTION,
            leaf_threshold: DEFAULT_LEAF_THRESHOLD,
            verbose: false,
        }
    }
}

/// Builder mirroring the validated-construction pattern used for other
/// configuration in this crate's ancestry, adapted to the adaptive
/// drivers' handful of tunables.
#[derive(Debug, Default)]
pub struct AdaptiveConfigBuilder {
    config: AdaptiveConfig,
}

impl AdaptiveConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AdaptiveConfig::default(),
        }
    }

    pub fn memory_fraction(mut self, fraction: f64) -> SortResult<Self> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(SortError::InvalidMemoryFraction { fraction });
        }
        self.config.memory_fraction = fraction;
        Ok(self)
    }

    pub fn leaf_threshold(mut self, threshold: usize) -> SortResult<Self> {
        if threshold == 0 {
            return Err(SortError::InvalidLeafThreshold);
        }
        self.config.leaf_threshold = threshold;
        Ok(self)
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> AdaptiveConfig {
        self.config
    }
}
