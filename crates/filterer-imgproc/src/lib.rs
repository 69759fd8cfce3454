#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// per-pixel filter implementations.
pub mod engine;

/// filter identities, their ranges and pipeline steps.
pub mod filter_kind;

/// module containing parallelization utilities.
pub mod parallel;

/// ordered application of filters to an image.
pub mod pipeline;

pub use crate::filter_kind::{FilterKind, FilterRange, FilterStep, ParseFilterError};
pub use crate::parallel::ExecutionStrategy;
pub use crate::pipeline::FilterPipeline;
