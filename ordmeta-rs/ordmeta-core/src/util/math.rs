//! Mathematical utility functions.

use statrs::function::beta::ln_beta;
use statrs::function::factorial::ln_factorial;

/// Clamp a value to a range.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// Distance by which `x` lies outside `[lo, hi]` (0 inside the range).
pub fn excursion(x: f64, lo: f64, hi: f64) -> f64 {
    (x - clamp(x, lo, hi)).abs()
}

/// Log-sum-exp over log-probabilities. Empty input, or all -infinity,
/// gives -infinity.
pub fn log_sum_exp(terms: &[f64]) -> f64 {
    let max = terms.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return max;
    }
    max + terms.iter().map(|t| (t - max).exp()).sum::<f64>().ln()
}

/// Log of binomial coefficient: ln(C(n, k))
pub fn ln_choose(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

/// Both tails of the Beta(a, b) CDF at x on the log scale, for integer
/// shapes a, b >= 1: `(ln I_x(a, b), ln(1 - I_x(a, b)))`.
///
/// Uses I_x(a, b) = P(Bin(a + b - 1, x) >= a). Each binomial term is formed
/// in log space and the smaller tail is summed directly, so neither tail
/// underflows or cancels before the f64 range runs out.
pub fn ln_beta_cdf_tails(x: f64, a: u32, b: u32) -> (f64, f64) {
    if x <= 0.0 {
        return (f64::NEG_INFINITY, 0.0);
    }
    if x >= 1.0 {
        return (0.0, f64::NEG_INFINITY);
    }

    let m = u64::from(a) + u64::from(b) - 1;
    let a = u64::from(a);
    let (ln_x, ln_1mx) = (x.ln(), (-x).ln_1p());
    let ln_term = |k: u64| ln_choose(m, k) + k as f64 * ln_x + (m - k) as f64 * ln_1mx;

    let lower: Vec<f64> = (0..a).map(ln_term).collect();
    let upper: Vec<f64> = (a..=m).map(ln_term).collect();
    let ln_below = log_sum_exp(&lower);
    let ln_above = log_sum_exp(&upper);

    if ln_above <= ln_below {
        (ln_above, (-ln_above.exp()).ln_1p())
    } else {
        ((-ln_below.exp()).ln_1p(), ln_below)
    }
}

/// Regularized incomplete Beta function I_x(a, b) for integer shapes.
pub fn beta_cdf(x: f64, a: u32, b: u32) -> f64 {
    ln_beta_cdf_tails(x, a, b).0.exp()
}

/// Log of the Beta(a, b) density at x.
///
/// Returns -infinity outside [0, 1] and at endpoints where the density
/// vanishes, +infinity where it diverges (a < 1 or b < 1).
pub fn ln_beta_pdf(x: f64, a: f64, b: f64) -> f64 {
    if !(0.0..=1.0).contains(&x) {
        return f64::NEG_INFINITY;
    }
    if x == 0.0 {
        return if a < 1.0 {
            f64::INFINITY
        } else if a == 1.0 {
            b.ln()
        } else {
            f64::NEG_INFINITY
        };
    }
    if x == 1.0 {
        return if b < 1.0 {
            f64::INFINITY
        } else if b == 1.0 {
            a.ln()
        } else {
            f64::NEG_INFINITY
        };
    }
    (a - 1.0) * x.ln() + (b - 1.0) * (-x).ln_1p() - ln_beta(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excursion() {
        assert_eq!(excursion(0.5, 0.0, 1.0), 0.0);
        assert!((excursion(1.25, 0.0, 1.0) - 0.25).abs() < 1e-15);
        assert!((excursion(-0.5, 0.0, 1.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_log_sum_exp() {
        let result = log_sum_exp(&[2.0_f64.ln(), 3.0_f64.ln()]);
        assert!((result - 5.0_f64.ln()).abs() < 1e-14);
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
        assert_eq!(log_sum_exp(&[f64::NEG_INFINITY; 3]), f64::NEG_INFINITY);
        // Far below the f64 range, still exact on the log scale.
        assert!((log_sum_exp(&[-2000.0, -2000.0]) - (-2000.0 + 2.0_f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn test_ln_choose() {
        assert!((ln_choose(5, 2) - 10.0_f64.ln()).abs() < 1e-12);
        assert_eq!(ln_choose(4, 0), 0.0);
        assert_eq!(ln_choose(2, 3), f64::NEG_INFINITY);
    }

    #[test]
    fn test_beta_cdf_closed_forms() {
        // n = 3 order statistics: I(1,3) = 1 - (1-x)^3, I(2,2) = 3x^2 - 2x^3, I(3,1) = x^3
        let x: f64 = 0.2;
        assert!((beta_cdf(x, 1, 3) - (1.0 - 0.8_f64.powi(3))).abs() < 1e-14);
        assert!((beta_cdf(x, 2, 2) - (3.0 * x * x - 2.0 * x.powi(3))).abs() < 1e-14);
        assert!((beta_cdf(x, 3, 1) - x.powi(3)).abs() < 1e-15);
        assert!((beta_cdf(0.3, 1, 1) - 0.3).abs() < 1e-15);
    }

    #[test]
    fn test_beta_cdf_endpoints() {
        assert_eq!(beta_cdf(0.0, 2, 5), 0.0);
        assert_eq!(beta_cdf(1.0, 2, 5), 1.0);
        assert_eq!(ln_beta_cdf_tails(0.0, 3, 3), (f64::NEG_INFINITY, 0.0));
        assert_eq!(ln_beta_cdf_tails(1.0, 3, 3), (0.0, f64::NEG_INFINITY));
    }

    #[test]
    fn test_beta_cdf_tiny_arguments() {
        // I_x(1, 3) ~ 3x and I_x(2, 2) ~ 3x^2 as x -> 0.
        for &x in &[1e-17, 1e-20, 1e-100, 1e-300] {
            let first = beta_cdf(x, 1, 3);
            assert!((first / (3.0 * x) - 1.0).abs() < 1e-12, "x={x:e}: {first:e}");
        }
        let (ln_i, _) = ln_beta_cdf_tails(1e-200, 2, 2);
        let expected = 3.0_f64.ln() + 2.0 * (1e-200_f64).ln();
        assert!((ln_i - expected).abs() < 1e-12, "{ln_i} vs {expected}");
    }

    #[test]
    fn test_beta_cdf_upper_tail_near_one() {
        // 1 - I_x(3, 1) = 1 - x^3 stays accurate as x -> 1.
        let x = 1.0 - 1e-12;
        let (ln_i, ln_upper) = ln_beta_cdf_tails(x, 3, 1);
        assert!((ln_upper.exp() / 3e-12 - 1.0).abs() < 1e-3);
        assert!(ln_i < 0.0 && ln_i > -1e-11);
    }

    #[test]
    fn test_ln_beta_pdf_matches_polynomial_form() {
        // Beta(2, 3): 12 x (1 - x)^2
        let x: f64 = 0.4;
        let expected = 12.0 * x * (1.0 - x).powi(2);
        assert!((ln_beta_pdf(x, 2.0, 3.0).exp() - expected).abs() < 1e-12);
        assert!((ln_beta_pdf(0.3, 1.0, 1.0)).abs() < 1e-12);
        assert_eq!(ln_beta_pdf(0.0, 1.0, 4.0), 4.0_f64.ln());
        assert_eq!(ln_beta_pdf(1.5, 1.0, 1.0), f64::NEG_INFINITY);
    }
}
