//! Combine one set of p-values.
//!
//! ordmeta combine 0.01 NA 0.3

use anyhow::Result;
use clap::Args;
use tracing::info;

use ordmeta_core::combine_with;

use super::{parse_values, OutputArgs};

#[derive(Args)]
pub struct CombineArgs {
    /// P-values in study order (NA, NaN or . for missing)
    #[arg(required = true, num_args = 1.., value_delimiter = ',')]
    pvalues: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

pub fn run(args: CombineArgs) -> Result<()> {
    let pvalues = parse_values(&args.pvalues)?;
    info!("Combining {} p-values", pvalues.len());

    let result = combine_with(&pvalues, &args.output.config())?;

    if let Some(header) = args.output.header(false) {
        println!("{}", header);
    }
    println!("{}", args.output.format(&result)?);
    Ok(())
}
