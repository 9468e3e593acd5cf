//! ordmeta-core: order-statistic meta-analysis of p-values
//!
//! Pools p-values from independent studies by locating the order
//! statistic that is most extreme relative to its Beta null and computing
//! the exact null probability of that event through recursive integration
//! in rational arithmetic.

pub mod error;
pub mod integration;
pub mod meta;
pub mod order_stat;
pub mod util;

pub use error::MetaError;
pub use meta::{
    combine, combine_batch, combine_signed, combine_signed_with, combine_with, CombineConfig,
    InstabilityPolicy, MetaResult,
};
