//! Parallel combination of many independent p-value sets.
//!
//! Each row (one gene, region or test set) is combined on its own; rows
//! share nothing, so they are distributed over the rayon pool.

use rayon::prelude::*;
use tracing::info;

use super::assembler::{combine_with, MetaResult};
use super::config::CombineConfig;
use crate::error::Result;

/// Combine every row, preserving row order in the output.
pub fn combine_batch(rows: &[Vec<f64>], config: &CombineConfig) -> Vec<Result<MetaResult>> {
    info!("Combining {} p-value sets", rows.len());
    rows.par_iter().map(|row| combine_with(row, config)).collect()
}
