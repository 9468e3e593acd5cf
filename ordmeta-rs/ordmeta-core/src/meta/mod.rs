//! Meta-analysis entry points.
//!
//! `combine` pools p-values with the order-statistic rule, `combine_signed`
//! folds two-sided p-values by effect direction first, and `combine_batch`
//! runs many independent combinations in parallel.

pub mod assembler;
pub mod batch;
pub mod config;
pub mod directional;

pub use assembler::{combine, combine_with, MetaResult};
pub use batch::combine_batch;
pub use config::{CombineConfig, InstabilityPolicy};
pub use directional::{combine_signed, combine_signed_with, one_sided_pvalues};
