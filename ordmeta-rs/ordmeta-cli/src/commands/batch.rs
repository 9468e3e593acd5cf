//! Combine one set of p-values per input line.
//!
//! cat pvalues.txt | ordmeta batch [--labelled]
//!
//! Values are separated by whitespace or commas; blank lines and lines
//! starting with '#' are skipped. Every remaining line yields one output
//! row, including rows that fail to combine.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use ordmeta_core::combine_batch;

use super::{parse_value, OutputArgs};

#[derive(Args)]
pub struct BatchArgs {
    /// First field of each line is a row label (gene, region, ...)
    #[arg(long)]
    labelled: bool,

    #[command(flatten)]
    output: OutputArgs,
}

struct Row {
    label: String,
    pvalues: Vec<f64>,
}

fn parse_row(line: &str, line_no: usize, labelled: bool) -> Result<Row> {
    let mut fields = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|f| !f.is_empty());
    let label = if labelled {
        fields
            .next()
            .with_context(|| format!("Line {}: missing label", line_no))?
            .to_string()
    } else {
        line_no.to_string()
    };
    let pvalues = fields
        .map(parse_value)
        .collect::<Result<Vec<f64>>>()
        .with_context(|| format!("Line {}", line_no))?;
    Ok(Row { label, pvalues })
}

pub fn run(args: BatchArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let mut rows = Vec::new();
    for (i, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        rows.push(parse_row(trimmed, i + 1, args.labelled)?);
    }
    info!("Read {} rows", rows.len());

    let pvalues: Vec<Vec<f64>> = rows.iter().map(|r| r.pvalues.clone()).collect();
    let results = combine_batch(&pvalues, &args.output.config());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Some(header) = args.output.header(true) {
        writeln!(out, "{}", header)?;
    }
    let mut n_failed = 0;
    for (row, outcome) in rows.iter().zip(results.iter()) {
        if let Err(err) = outcome {
            warn!("Row {}: {}", row.label, err);
            n_failed += 1;
        }
        writeln!(out, "{}", args.output.format_row(&row.label, outcome)?)?;
    }
    if n_failed > 0 {
        warn!("{} of {} rows could not be combined", n_failed, rows.len());
    }
    Ok(())
}
