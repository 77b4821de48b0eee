use crate::reference::{read_lines, ReferenceSet};
use crate::scan::{revcomp_pairs, scan, window_count};
use crate::ScreenConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

/// JSON summary of a screen run
#[derive(Serialize, Deserialize)]
pub struct ScreenSummary {
    pub version: String,
    pub reference: String,
    pub query: String,
    pub k: usize,
    pub reference_kmers: usize,
    pub windows_scanned: usize,
    pub matches: usize,
    pub revcomp_pairs: usize,
    pub time: f64,
}

/// Check the reference path exists before making the user wait for a load
fn check_reference_path(config: &ScreenConfig) -> Result<()> {
    if !config.reference_path.exists() {
        return Err(anyhow::anyhow!(
            "Reference file does not exist: {}",
            config.reference_path.display()
        ));
    }
    Ok(())
}

/// Create a writer for the output path (stdout for "-")
fn get_writer(output_path: &str) -> Result<Box<dyn Write>> {
    if output_path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(output_path)
            .context(format!("Failed to create output file {}", output_path))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

pub fn run(config: &ScreenConfig) -> Result<()> {
    let start_time = Instant::now();
    let version = env!("CARGO_PKG_VERSION");

    if !config.quiet {
        eprintln!(
            "kscreen v{}; reference: {}; query length: {}; k={}",
            version,
            config.reference_path.display(),
            config.query.len(),
            config.kmer_length
        );
    }

    check_reference_path(config)?;

    // Load the reference set once; it is immutable for the rest of the run
    let lines = read_lines(&config.reference_path)?;
    let reference = ReferenceSet::from_lines(lines, config.kmer_length);

    let load_time = start_time.elapsed();
    if !config.quiet {
        eprintln!(
            "Loaded {} reference k-mers (k={}) in {:.2?}",
            reference.len(),
            config.kmer_length,
            load_time
        );
    }

    let matches = scan(&config.query, config.kmer_length, &reference)?;
    let pairs = revcomp_pairs(&matches)?;

    let mut writer = get_writer(&config.output_path)?;
    for kmer in &matches {
        writeln!(writer, "{}", kmer)?;
    }
    for (kmer, rc) in &pairs {
        writeln!(writer, "kmer: {}, revc: {}", kmer, rc)?;
    }
    writer.flush()?;

    let total_time = start_time.elapsed();
    let windows = window_count(config.query.len(), config.kmer_length);
    if !config.quiet {
        eprintln!(
            "Scanned {} windows: {} matched, {} reverse-complement pair(s) in {:.2?}",
            windows,
            matches.len(),
            pairs.len(),
            total_time
        );
    }

    // Build and write JSON summary if path provided
    if let Some(summary_file) = &config.summary_path {
        let summary = ScreenSummary {
            version: format!("kscreen {}", version),
            reference: config.reference_path.to_string_lossy().to_string(),
            query: config.query.clone(),
            k: config.kmer_length,
            reference_kmers: reference.len(),
            windows_scanned: windows,
            matches: matches.len(),
            revcomp_pairs: pairs.len(),
            time: total_time.as_secs_f64(),
        };

        let file = File::create(summary_file)
            .context(format!("Failed to create summary: {:?}", summary_file))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &summary).context("Failed to write summary")?;

        if !config.quiet {
            eprintln!("Summary saved to {:?}", summary_file);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_roundtrip() {
        let summary = ScreenSummary {
            version: "kscreen 0.1.0".to_string(),
            reference: "data/res_7_20_4_0.txt".to_string(),
            query: "ACACCGTAGCCTCCAGATGC".to_string(),
            k: 7,
            reference_kmers: 41,
            windows_scanned: 14,
            matches: 1,
            revcomp_pairs: 0,
            time: 0.01,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let parsed: ScreenSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.k, 7);
        assert_eq!(parsed.windows_scanned, 14);
        assert_eq!(parsed.matches, 1);
    }

    #[test]
    fn test_missing_reference_is_error() {
        let config = ScreenConfig::new("no/such/reference.txt").with_quiet(true);
        assert!(run(&config).is_err());
    }
}
