//! Recursive exact integration engine.
//!
//! With thresholds LB_j = Q(minP; j + 1, n - j), j = 0..n-1, the null mass
//! of the event "every order statistic exceeds its threshold" is
//!
//!   F_0(x)     = 1
//!   F_{j+1}(y) = (j + 1) * integral_{LB_j}^{y} F_j(x) dx     j = 0..n-2
//!   D          = n * integral_{LB_{n-1}}^{1} F_{n-1}(x) dx
//!
//! and the combined p-value is 1 - D. Thresholds enter as the exact
//! rational value of their f64 representation; every subsequent
//! operation, including the final subtraction, is exact.
//!
//! Each threshold brings its own power-of-two denominator, so coefficient
//! bit-length grows with n and so does the cost of every step: about 1 s
//! at n = 100 and 12 s at n = 200. Inputs above `LARGE_INPUT_COUNT` are
//! still computed exactly but log a warning.

use num_rational::BigRational;
use num_traits::{One, ToPrimitive};
use tracing::{debug, trace, warn};

use super::polynomial::{rational_from_f64, Polynomial};
use crate::error::{MetaError, Result};
use crate::order_stat::quantile::beta_quantile;

/// Input count above which the exact recursion becomes noticeably slow.
pub const LARGE_INPUT_COUNT: u32 = 100;

/// Outcome of the exact integration, rounded to f64 once at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailProbability {
    /// D: null mass above every threshold.
    pub null_mass: f64,
    /// 1 - D, computed before rounding.
    pub pvalue: f64,
}

/// Integration thresholds LB_0..LB_{n-1} for level `min_p` and `n` inputs.
pub fn integration_bounds(min_p: f64, n: u32) -> Result<Vec<f64>> {
    (0..n).map(|j| beta_quantile(min_p, j + 1, n - j)).collect()
}

/// One recursion step: integrate the state from `lower` to the free
/// variable and multiply by `weight`.
///
/// Consumes the previous state and returns the next one.
pub fn integrate_step(state: Polynomial, lower: &BigRational, weight: u32) -> Polynomial {
    state.integrate_from(lower).scale(u64::from(weight))
}

/// Exact null mass D above the given increasing thresholds.
pub fn null_mass_above(bounds: &[f64]) -> Result<BigRational> {
    let n = bounds.len();
    let (last, inner) = bounds.split_last().ok_or(MetaError::EmptyInput)?;

    let to_rational = |x: f64| rational_from_f64(x).ok_or(MetaError::NumericInstability { value: x });

    let mut state = Polynomial::one();
    for (j, &lb) in inner.iter().enumerate() {
        state = integrate_step(state, &to_rational(lb)?, j as u32 + 1);
        trace!("Step {}: LB={:.6e}, degree {}, F(x) = {}", j + 1, lb, state.degree(), state);
    }

    let mass = state.integrate_between(&to_rational(*last)?, &BigRational::one())
        * BigRational::from_integer(n.into());
    Ok(mass)
}

/// Combined p-value for minimal order-statistic probability `min_p`
/// among `n` non-missing inputs.
pub fn ordmeta_pvalue(min_p: f64, n: u32) -> Result<TailProbability> {
    if n == 0 {
        return Err(MetaError::EmptyInput);
    }
    if n > LARGE_INPUT_COUNT {
        warn!(
            "Exact integration over {} inputs; cost grows steeply beyond {}",
            n, LARGE_INPUT_COUNT
        );
    }

    let bounds = integration_bounds(min_p, n)?;
    debug!("Integration bounds for n={}, minP={:.6e}: {:?}", n, min_p, bounds);

    let mass = null_mass_above(&bounds)?;
    let pvalue = BigRational::one() - &mass;

    let null_mass = mass.to_f64().unwrap_or(f64::NAN);
    let pvalue = pvalue.to_f64().unwrap_or(f64::NAN);
    if null_mass.is_nan() || pvalue.is_nan() {
        return Err(MetaError::NumericInstability { value: null_mass });
    }

    Ok(TailProbability { null_mass, pvalue })
}
