//! Meta p-value assembler.
//!
//! Validates and partitions the input, locates the most extreme order
//! statistic, runs the exact integration and packages the result with
//! the contributing and missing positions (1-based, input order).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::{CombineConfig, InstabilityPolicy};
use crate::error::{MetaError, Result};
use crate::integration::engine::ordmeta_pvalue;
use crate::order_stat::evaluator::most_extreme;
use crate::util::math::{clamp, excursion};
use crate::util::missing::{indices_at_or_below, partition_missing, sorted_present, validate_pvalues};

/// Combined p-value with its diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaResult {
    /// Meta-analysis p-value.
    pub p: f64,
    /// Positions whose p-value is at or below the base threshold.
    pub contributing_indices: Vec<usize>,
    /// Positions of missing (NaN) inputs.
    pub missing_indices: Vec<usize>,
}

/// Combine p-values with the default configuration (hard fail on
/// numeric instability).
pub fn combine(pvalues: &[f64]) -> Result<MetaResult> {
    combine_with(pvalues, &CombineConfig::default())
}

/// Combine p-values. `NaN` entries are treated as missing.
pub fn combine_with(pvalues: &[f64], config: &CombineConfig) -> Result<MetaResult> {
    validate_pvalues(pvalues)?;

    let (missing_indices, present) = partition_missing(pvalues);
    if present.is_empty() {
        return Err(MetaError::EmptyInput);
    }
    let sorted = sorted_present(&present);
    let n = sorted.len();

    let extreme = most_extreme(&sorted)?;
    let contributing_indices = indices_at_or_below(pvalues, extreme.base_p);

    let tail = ordmeta_pvalue(extreme.min_p, n as u32)?;
    let p = checked_pvalue(tail.null_mass, tail.pvalue, config)?;

    debug!(
        "Combined {} p-values ({} missing): p={:.6e}, {} contributing",
        n,
        missing_indices.len(),
        p,
        contributing_indices.len()
    );

    Ok(MetaResult {
        p,
        contributing_indices,
        missing_indices,
    })
}

/// Apply the instability policy to the integrated null mass.
fn checked_pvalue(null_mass: f64, pvalue: f64, config: &CombineConfig) -> Result<f64> {
    let off = excursion(null_mass, 0.0, 1.0);
    if off > config.tolerance {
        match config.instability {
            InstabilityPolicy::Fail => {
                return Err(MetaError::NumericInstability { value: null_mass });
            }
            InstabilityPolicy::Clamp => {
                warn!(
                    "Null mass {:.6e} outside [0, 1] by {:.3e}; clamping p-value",
                    null_mass, off
                );
            }
        }
    }
    Ok(clamp(pvalue, 0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let result = combine(&[0.042]).unwrap();
        assert!((result.p - 0.042).abs() < 1e-14);
        assert_eq!(result.contributing_indices, vec![1]);
        assert!(result.missing_indices.is_empty());
    }

    #[test]
    fn test_contributing_in_input_order() {
        let result = combine(&[0.5, 0.01, 0.2]).unwrap();
        assert_eq!(result.contributing_indices, vec![2]);
        assert!(result.missing_indices.is_empty());
    }

    #[test]
    fn test_missing_positions_reported() {
        let result = combine(&[f64::NAN, 0.01, f64::NAN, 0.3]).unwrap();
        assert_eq!(result.missing_indices, vec![1, 3]);
        assert_eq!(result.contributing_indices, vec![2]);
    }

    #[test]
    fn test_empty_and_all_missing() {
        assert_eq!(combine(&[]), Err(MetaError::EmptyInput));
        assert_eq!(combine(&[f64::NAN, f64::NAN]), Err(MetaError::EmptyInput));
    }

    #[test]
    fn test_domain_error_before_anything_else() {
        assert_eq!(
            combine(&[0.1, f64::NAN, -0.2]),
            Err(MetaError::DomainError { index: 3, value: -0.2 })
        );
        assert!(matches!(
            combine(&[f64::INFINITY]),
            Err(MetaError::DomainError { index: 1, .. })
        ));
    }

    #[test]
    fn test_instability_policy() {
        let strict = CombineConfig::default();
        let lenient = CombineConfig::clamping();

        // Within tolerance: clamped silently under either policy.
        assert_eq!(checked_pvalue(1.0 + 1e-12, -1e-12, &strict).unwrap(), 0.0);

        // Beyond tolerance: only the clamping policy continues.
        assert_eq!(
            checked_pvalue(1.5, -0.5, &strict),
            Err(MetaError::NumericInstability { value: 1.5 })
        );
        assert_eq!(checked_pvalue(1.5, -0.5, &lenient).unwrap(), 0.0);
        assert_eq!(checked_pvalue(-0.25, 1.25, &lenient).unwrap(), 1.0);
    }

    #[test]
    fn test_all_ones() {
        let result = combine(&[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(result.p, 1.0);
        assert_eq!(result.contributing_indices, vec![1, 2, 3]);
    }
}
