//! Missing-value bookkeeping for p-value vectors.
//!
//! `NaN` is the missing marker. Positions are reported 1-based in the
//! caller's original order.

use crate::error::{MetaError, Result};

/// Whether a value is the missing marker.
pub fn is_missing(x: f64) -> bool {
    x.is_nan()
}

/// Check that every non-missing entry is a finite value in [0, 1].
pub fn validate_pvalues(pvalues: &[f64]) -> Result<()> {
    for (i, &p) in pvalues.iter().enumerate() {
        if is_missing(p) {
            continue;
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(MetaError::DomainError {
                index: i + 1,
                value: p,
            });
        }
    }
    Ok(())
}

/// Split a p-value vector into its missing positions and the present values.
///
/// Present values keep their input order; the missing positions are 1-based.
pub fn partition_missing(pvalues: &[f64]) -> (Vec<usize>, Vec<f64>) {
    let mut missing = Vec::new();
    let mut present = Vec::with_capacity(pvalues.len());
    for (i, &p) in pvalues.iter().enumerate() {
        if is_missing(p) {
            missing.push(i + 1);
        } else {
            present.push(p);
        }
    }
    (missing, present)
}

/// Ascending copy of the present values.
pub fn sorted_present(present: &[f64]) -> Vec<f64> {
    let mut sorted = present.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// 1-based positions of non-missing entries with value <= `threshold`.
pub fn indices_at_or_below(pvalues: &[f64], threshold: f64) -> Vec<usize> {
    pvalues
        .iter()
        .enumerate()
        .filter(|(_, &p)| !is_missing(p) && p <= threshold)
        .map(|(i, _)| i + 1)
        .collect()
}
