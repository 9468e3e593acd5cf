//! ordmeta: order-statistic meta-analysis of p-values.
//!
//! CLI entry point using clap for argument parsing.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ordmeta",
    version,
    about = "Combine per-study p-values with the order-statistic meta-analysis rule",
    long_about = "Finds the order statistic of the sorted p-values that is most extreme under\n\
                   its Beta null and reports the exact probability of that event."
)]
struct Cli {
    /// Number of threads to use
    #[arg(long, default_value = "1", global = true)]
    threads: usize,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine one set of p-values
    Combine(commands::combine::CombineArgs),

    /// Fold two-sided p-values by effect direction, then combine
    Signed(commands::signed::SignedArgs),

    /// Combine one set of p-values per stdin line
    Batch(commands::batch::BatchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Set up thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build_global()
        .ok();

    tracing::info!("ordmeta v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Using {} threads", cli.threads);

    match cli.command {
        Commands::Combine(args) => commands::combine::run(args),
        Commands::Signed(args) => commands::signed::run(args),
        Commands::Batch(args) => commands::batch::run(args),
    }
}
