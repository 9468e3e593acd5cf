//! Directional wrapper: fold two-sided p-values by effect sign.
//!
//! With `decreasing = true`, a non-negative effect keeps p / 2 and a
//! negative effect becomes 1 - p / 2; `decreasing = false` swaps the two.
//! The folded vector goes to the assembler unchanged.

use tracing::debug;

use super::assembler::{combine_with, MetaResult};
use super::config::CombineConfig;
use crate::error::{MetaError, Result};
use crate::util::missing::{is_missing, validate_pvalues};

/// One-sided p-values for the chosen direction.
///
/// Missing p-values stay missing. A present p-value without an effect
/// size has no direction and is reported as missing as well. Raw values
/// outside [0, 1] are rejected before folding.
pub fn one_sided_pvalues(pvalues: &[f64], effect_size: &[f64], decreasing: bool) -> Result<Vec<f64>> {
    if pvalues.len() != effect_size.len() {
        return Err(MetaError::LengthMismatch {
            pvalues: pvalues.len(),
            effects: effect_size.len(),
        });
    }
    validate_pvalues(pvalues)?;

    let folded = pvalues
        .iter()
        .zip(effect_size.iter())
        .enumerate()
        .map(|(i, (&p, &beta))| {
            if is_missing(p) {
                return p;
            }
            if beta.is_nan() {
                debug!("Position {}: p-value without effect size treated as missing", i + 1);
                return f64::NAN;
            }
            let primary = (beta >= 0.0) == decreasing;
            if primary {
                p / 2.0
            } else {
                1.0 - p / 2.0
            }
        })
        .collect();

    Ok(folded)
}

/// Directional combination with the default configuration.
pub fn combine_signed(pvalues: &[f64], effect_size: &[f64], decreasing: bool) -> Result<MetaResult> {
    combine_signed_with(pvalues, effect_size, decreasing, &CombineConfig::default())
}

/// Directional combination.
pub fn combine_signed_with(
    pvalues: &[f64],
    effect_size: &[f64],
    decreasing: bool,
    config: &CombineConfig,
) -> Result<MetaResult> {
    let folded = one_sided_pvalues(pvalues, effect_size, decreasing)?;
    combine_with(&folded, config)
}
