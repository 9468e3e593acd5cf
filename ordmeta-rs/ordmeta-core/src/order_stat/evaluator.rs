//! Order-statistic evaluator.
//!
//! For sorted p-values p_(1) <= ... <= p_(n), rank j is scored by
//!   P_j = I_{p_(j)}(j, n - j + 1)
//! the null CDF of the j-th uniform order statistic. The minimum over
//! ranks is the combination statistic; its p_(j) is the base threshold.
//! Ranks are compared on the log scale, so the ordering survives when
//! P_j itself is below the f64 range.

use serde::Serialize;
use tracing::debug;

use crate::error::{MetaError, Result};
use crate::util::math::ln_beta_cdf_tails;

/// Null probability of a single observed order statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderStatistic {
    /// 1-based rank in the sorted sequence.
    pub rank: usize,
    /// P(U_(rank) <= pvalue) for n i.i.d. uniforms.
    pub probability: f64,
    /// Natural log of `probability`.
    pub ln_probability: f64,
    /// Observed p-value at this rank.
    pub pvalue: f64,
}

/// The order statistic that is most extreme relative to its own null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtremeOrderStatistic {
    /// 1-based rank that attains the minimum.
    pub rank: usize,
    /// Minimal per-rank null probability (minP).
    pub min_p: f64,
    /// Observed p-value at that rank (base threshold).
    pub base_p: f64,
}

/// Score every rank of an ascending p-value sequence.
pub fn order_statistics(sorted: &[f64]) -> Vec<OrderStatistic> {
    let n = sorted.len();
    sorted
        .iter()
        .enumerate()
        .map(|(j, &p)| {
            let rank = j + 1;
            let (ln_probability, _) = ln_beta_cdf_tails(p, rank as u32, (n - j) as u32);
            OrderStatistic {
                rank,
                probability: ln_probability.exp(),
                ln_probability,
                pvalue: p,
            }
        })
        .collect()
}

/// Find the rank with the smallest null probability.
///
/// Ranks are scanned in ascending order and only a strictly smaller
/// probability replaces the current minimum, so the lowest rank wins ties.
pub fn most_extreme(sorted: &[f64]) -> Result<ExtremeOrderStatistic> {
    let stats = order_statistics(sorted);
    let mut iter = stats.iter();
    let first = iter.next().ok_or(MetaError::EmptyInput)?;

    let best = iter.fold(*first, |best, stat| {
        if stat.ln_probability < best.ln_probability {
            *stat
        } else {
            best
        }
    });

    debug!(
        "Most extreme order statistic: rank {}/{}, minP={:.6e}, baseP={:.6e}",
        best.rank,
        sorted.len(),
        best.probability,
        best.pvalue
    );

    Ok(ExtremeOrderStatistic {
        rank: best.rank,
        min_p: best.probability,
        base_p: best.pvalue,
    })
}
