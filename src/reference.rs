use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default reference k-mer file shipped with the crate
pub const DEFAULT_REFERENCE_PATH: &str = "data/res_7_20_4_0.txt";

/// Read a newline-delimited reference file into trimmed lines, in file order
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file =
        File::open(path).context(format!("Failed to open reference file {:?}", path))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context(format!("Error reading reference file {:?}", path))?;
        lines.push(line.trim_end().to_string());
    }
    Ok(lines)
}

/// Immutable set of reference k-mers, loaded once at startup
pub struct ReferenceSet {
    kmers: FxHashSet<String>,
    kmer_length: usize,
}

impl ReferenceSet {
    /// Build a reference set from trimmed lines, keeping only lines of
    /// length exactly k. Duplicate lines collapse to a single entry.
    pub fn from_lines(lines: Vec<String>, kmer_length: usize) -> Self {
        let kmers: FxHashSet<String> = lines
            .into_iter()
            .filter(|line| line.len() == kmer_length)
            .collect();
        ReferenceSet { kmers, kmer_length }
    }

    /// Load a reference set directly from a file path
    pub fn from_path<P: AsRef<Path>>(path: P, kmer_length: usize) -> Result<Self> {
        let lines = read_lines(path)?;
        Ok(Self::from_lines(lines, kmer_length))
    }

    /// Test whether a k-mer is present
    pub fn contains(&self, kmer: &str) -> bool {
        self.kmers.contains(kmer)
    }

    /// Number of distinct reference k-mers
    pub fn len(&self) -> usize {
        self.kmers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }

    /// Get k
    pub fn kmer_length(&self) -> usize {
        self.kmer_length
    }
}
