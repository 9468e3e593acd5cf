//! Exact recursive integration over uniform order-statistic densities.
//!
//! The null probability that every order statistic clears its threshold
//! is a nested integral of the joint density n! on the ordered simplex.
//! Integrating one variable at a time keeps the integrand a polynomial,
//! so the whole recursion is carried out in exact rational arithmetic
//! and only the final value is rounded to f64.

pub mod engine;
pub mod polynomial;

pub use engine::{integrate_step, integration_bounds, null_mass_above, ordmeta_pvalue, TailProbability};
pub use polynomial::{rational_from_f64, Polynomial};
