//! Generic parallel merge-sort and LSD radix-sort library with
//! memory-adaptive dispatch.
//!
//! The crate is organised around a handful of independent drivers that
//! share two building blocks: the not-in-place merge (`merge`) and the
//! truly in-place merge (`merge_inplace`). Each driver forks recursively
//! via structured fork/join (`leaves::parallel_invoke`) down to a leaf,
//! combining results with whichever merge matches its residency contract:
//!
//! - [`sort`] / [`sort_pseudo_inplace`]: parallel merge sort, not in
//!   place and pseudo-in-place respectively.
//! - [`sort_inplace`]: parallel merge sort with no auxiliary buffer.
//! - [`sort_radix_lsd`]: stable, linear-time LSD radix sort over 32-bit
//!   keys.
//! - [`sort_radix_adaptive`] / [`sort_linear_inplace_adaptive`]: drivers
//!   that measure anticipated memory pressure against a configurable
//!   fraction of total physical memory and choose the not-in-place or
//!   in-place path accordingly, degrading to in-place on allocation
//!   failure.
//! - [`sum`]: a parallel reduction, included as a second instance of the
//!   fork/join skeleton the sort drivers build on.

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod memory;

mod leaves;
mod merge;
mod merge_inplace;
mod mergesort_inplace;
mod mergesort_inplace_radix;
mod mergesort_parallel;
mod mergesort_radix_hybrid;
mod mergesort_serial;
pub mod radix;
pub mod reduce;

pub mod adaptive;

pub use config::AdaptiveConfig;
pub use error::{SortError, SortResult};
pub use leaves::parallel_fill;
pub use memory::{FixedMemoryProbe, MemoryProbe, SystemMemoryProbe};

pub use adaptive::{
    sort_linear_inplace_adaptive, sort_linear_inplace_adaptive_with, sort_radix_adaptive,
    sort_radix_adaptive_with,
};
pub use mergesort_inplace::sort_inplace;
pub use mergesort_parallel::{sort, sort_pseudo_inplace};
pub use radix::sort_radix_lsd;
pub use reduce::sum;
