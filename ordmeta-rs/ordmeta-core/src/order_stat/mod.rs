//! Order statistics of uniform p-values.
//!
//! Under the global null the k-th smallest of n independent Uniform(0,1)
//! p-values follows Beta(k, n - k + 1). The evaluator scores each observed
//! order statistic against that law; the quantile resolver inverts it to
//! produce the thresholds of the exact integration.

pub mod evaluator;
pub mod quantile;

pub use evaluator::{most_extreme, order_statistics, ExtremeOrderStatistic, OrderStatistic};
pub use quantile::beta_quantile;
