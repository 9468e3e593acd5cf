//! Subcommands and the value parsing/printing they share.

pub mod batch;
pub mod combine;
pub mod signed;

use anyhow::{Context, Result};
use clap::Args;

use ordmeta_core::{CombineConfig, InstabilityPolicy, MetaError, MetaResult};

/// Tokens accepted as a missing value.
const MISSING_TOKENS: &[&str] = &["NA", "NaN", "nan", "."];

/// Options shared by every subcommand.
#[derive(Args)]
pub struct OutputArgs {
    /// Print results as JSON instead of tab-separated text
    #[arg(long)]
    json: bool,

    /// Clamp out-of-range integration results instead of failing
    #[arg(long)]
    clamp: bool,

    /// Allowed excursion of the integrated mass outside [0, 1]
    #[arg(long, default_value = "1e-9")]
    tolerance: f64,
}

impl OutputArgs {
    pub fn config(&self) -> CombineConfig {
        CombineConfig {
            instability: if self.clamp {
                InstabilityPolicy::Clamp
            } else {
                InstabilityPolicy::Fail
            },
            tolerance: self.tolerance,
        }
    }

    /// Format one unlabelled result.
    pub fn format(&self, result: &MetaResult) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string(result)?);
        }
        Ok(format!(
            "{}\t{}\t{}",
            result.p,
            join_indices(&result.contributing_indices),
            join_indices(&result.missing_indices)
        ))
    }

    /// Format one labelled batch row. A row that could not be combined
    /// keeps its line, with `NA` (JSON `null`) as p and the error message.
    pub fn format_row(
        &self,
        label: &str,
        outcome: &std::result::Result<MetaResult, MetaError>,
    ) -> Result<String> {
        if self.json {
            let value = match outcome {
                Ok(result) => {
                    let mut value = serde_json::to_value(result)?;
                    value["label"] = serde_json::Value::from(label);
                    value
                }
                Err(err) => serde_json::json!({
                    "label": label,
                    "p": null,
                    "error": err.to_string(),
                }),
            };
            return Ok(serde_json::to_string(&value)?);
        }
        Ok(match outcome {
            Ok(result) => format!("{}\t{}\t-", label, self.format(result)?),
            Err(err) => format!("{}\tNA\t-\t-\t{}", label, err),
        })
    }

    pub fn header(&self, labelled: bool) -> Option<&'static str> {
        match (self.json, labelled) {
            (true, _) => None,
            (false, true) => Some("label\tp\tcontributing\tmissing\terror"),
            (false, false) => Some("p\tcontributing\tmissing"),
        }
    }
}

/// Parse a single value; missing tokens become NaN.
pub fn parse_value(token: &str) -> Result<f64> {
    let token = token.trim();
    if MISSING_TOKENS.contains(&token) {
        return Ok(f64::NAN);
    }
    token
        .parse::<f64>()
        .with_context(|| format!("Invalid number: '{}'", token))
}

pub fn parse_values(tokens: &[String]) -> Result<Vec<f64>> {
    tokens.iter().map(|t| parse_value(t)).collect()
}

fn join_indices(indices: &[usize]) -> String {
    if indices.is_empty() {
        return "-".to_string();
    }
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
