//! Shared numeric and missing-value helpers.

pub mod math;
pub mod missing;
