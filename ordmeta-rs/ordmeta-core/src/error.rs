//! Error type shared by every combination entry point.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetaError {
    #[error("No usable p-values: input is empty or every entry is missing")]
    EmptyInput,

    #[error("Length mismatch: {pvalues} p-values but {effects} effect sizes")]
    LengthMismatch { pvalues: usize, effects: usize },

    #[error("P-value {value} at position {index} is outside [0, 1]")]
    DomainError { index: usize, value: f64 },

    #[error("Integrated null mass {value:.3e} is outside [0, 1] beyond tolerance")]
    NumericInstability { value: f64 },

    #[error("Beta shapes must be positive integers, got ({a}, {b})")]
    InvalidShape { a: u32, b: u32 },

    #[error("Beta({a}, {b}) quantile at q={q:.3e} did not converge")]
    QuantileNotConverged { q: f64, a: u32, b: u32 },
}

pub type Result<T> = std::result::Result<T, MetaError>;
