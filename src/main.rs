use anyhow::{Context, Result};
use clap::Parser;
use kscreen::{ScreenConfig, DEFAULT_KMER_LENGTH, DEFAULT_QUERY, DEFAULT_REFERENCE_PATH};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Screen a nucleotide query for reference k-mers and reverse-complement pairs",
    long_about = None
)]
struct Cli {
    /// Path to reference file containing one k-mer per line
    #[arg(default_value = DEFAULT_REFERENCE_PATH)]
    reference: PathBuf,

    /// Query sequence to scan (uppercase A/C/G/T)
    #[arg(short = 's', long = "sequence", default_value = DEFAULT_QUERY)]
    sequence: String,

    /// K-mer length (must not exceed the query length)
    #[arg(short = 'k', long = "kmer-length", default_value_t = DEFAULT_KMER_LENGTH as u64, value_parser = clap::value_parser!(u64).range(1..))]
    kmer_length: u64,

    /// Path to output file (- for stdout)
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Path to JSON summary file
    #[arg(long = "summary")]
    summary: Option<PathBuf>,

    /// Suppress progress reporting
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ScreenConfig::new(&cli.reference)
        .with_query(cli.sequence)
        .with_kmer_length(cli.kmer_length as usize)
        .with_output(cli.output)
        .with_quiet(cli.quiet);

    if let Some(summary) = &cli.summary {
        config = config.with_summary(summary);
    }

    config.execute().context("Failed to run k-mer screen")?;

    Ok(())
}
