//! Univariate polynomials with arbitrary-precision rational coefficients.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Exact rational value of a finite f64 (every finite double is a dyadic rational).
pub fn rational_from_f64(x: f64) -> Option<BigRational> {
    BigRational::from_float(x)
}

/// Polynomial in one free variable, coefficients in ascending powers.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<BigRational>,
}

impl Polynomial {
    /// Build from ascending coefficients. Trailing zeros are dropped.
    pub fn from_coeffs(coeffs: Vec<BigRational>) -> Self {
        let mut p = Self { coeffs };
        p.trim();
        p
    }

    pub fn constant(c: BigRational) -> Self {
        Self::from_coeffs(vec![c])
    }

    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    pub fn coeffs(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// Degree, with the zero polynomial reported as degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluate at a rational point (Horner).
    pub fn eval(&self, x: &BigRational) -> BigRational {
        self.coeffs
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, c| acc * x + c)
    }

    /// Antiderivative with zero constant term.
    pub fn antiderivative(&self) -> Polynomial {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(BigRational::zero());
        for (k, c) in self.coeffs.iter().enumerate() {
            coeffs.push(c / BigRational::from_integer(BigInt::from(k + 1)));
        }
        Polynomial::from_coeffs(coeffs)
    }

    /// G(y) = integral of self(x) dx from `lower` to the free variable y.
    ///
    /// The result is again a polynomial in the free variable.
    pub fn integrate_from(&self, lower: &BigRational) -> Polynomial {
        let mut anti = self.antiderivative();
        let at_lower = anti.eval(lower);
        if anti.coeffs.is_empty() {
            anti.coeffs.push(BigRational::zero());
        }
        anti.coeffs[0] -= at_lower;
        anti.trim();
        anti
    }

    /// Definite integral of self(x) dx from `lower` to `upper`.
    pub fn integrate_between(&self, lower: &BigRational, upper: &BigRational) -> BigRational {
        let anti = self.antiderivative();
        anti.eval(upper) - anti.eval(lower)
    }

    /// Multiply every coefficient by an integer factor.
    pub fn scale(mut self, factor: u64) -> Polynomial {
        let k = BigRational::from_integer(BigInt::from(factor));
        for c in self.coeffs.iter_mut() {
            *c *= &k;
        }
        self.trim();
        self
    }

    fn trim(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(k, c)| match k {
                0 => format!("{}", c),
                1 => format!("({})*x", c),
                _ => format!("({})*x^{}", c, k),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}
