//! Directional combination.
//!
//! ordmeta signed --pvalues 0.02,0.4 --effects 0.3,-1.1 [--increasing]

use anyhow::Result;
use clap::Args;
use tracing::info;

use ordmeta_core::combine_signed_with;

use super::{parse_values, OutputArgs};

#[derive(Args)]
pub struct SignedArgs {
    /// Two-sided p-values in study order (NA, NaN or . for missing)
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    pvalues: Vec<String>,

    /// Effect sizes, one per p-value
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',', allow_negative_numbers = true)]
    effects: Vec<String>,

    /// Treat negative effects as the primary direction
    #[arg(long)]
    increasing: bool,

    #[command(flatten)]
    output: OutputArgs,
}

pub fn run(args: SignedArgs) -> Result<()> {
    let pvalues = parse_values(&args.pvalues)?;
    let effects = parse_values(&args.effects)?;
    let decreasing = !args.increasing;
    info!(
        "Combining {} p-values, primary direction: {}",
        pvalues.len(),
        if decreasing { "positive" } else { "negative" }
    );

    let result = combine_signed_with(&pvalues, &effects, decreasing, &args.output.config())?;

    if let Some(header) = args.output.header(false) {
        println!("{}", header);
    }
    println!("{}", args.output.format(&result)?);
    Ok(())
}
