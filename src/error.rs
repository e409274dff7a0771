//! Error handling for the small set of genuinely fallible operations this
//! crate performs internally.
//!
//! No public sort entry point ever returns an error: allocation failure
//! and memory-probe degeneracy are both caught locally and turned into a
//! conservative fallback strategy (see `adaptive`). `SortError` exists for
//! the handful of internal operations that are fallible before that
//! degradation is applied, and for validating user-supplied tunables.

use thiserror::Error;

/// Internal error type. Never returned from a public sort entry point.
#[derive(Error, Debug)]
pub enum SortError {
    #[error("failed to allocate auxiliary buffer for {requested} elements")]
    AllocationFailed { requested: usize },

    #[error("memory fraction must be in (0.0, 1.0]; got {fraction}")]
    InvalidMemoryFraction { fraction: f64 },

    #[error("leaf threshold must be non-zero")]
    InvalidLeafThreshold,
}

pub type SortResult<T> = Result<T, SortError>;
