//! # kscreen
//!
//! Screen a nucleotide query sequence for k-mers present in a reference
//! set, and report matched k-mers whose reverse complement is also among
//! the matches.
//!
//! This crate provides both a library and a binary.
//!
#![doc = include_str!("../README.md")]

pub mod reference;
pub mod revcomp;
pub mod scan;
pub mod screen;

// Re-export the important structures and functions for library users
pub use reference::{read_lines, ReferenceSet, DEFAULT_REFERENCE_PATH};
pub use revcomp::{reverse_complement, RevCompError};
pub use scan::{revcomp_pairs, scan, window_count, ScanError, DEFAULT_KMER_LENGTH, DEFAULT_QUERY};
pub use screen::{run as run_screen, ScreenSummary};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Configuration for a screen run
pub struct ScreenConfig {
    /// Path to the newline-delimited reference k-mer file
    pub reference_path: PathBuf,

    /// Query sequence to scan (uppercase A/C/G/T)
    pub query: String,

    /// Window width k
    pub kmer_length: usize,

    /// Path to output file (- for stdout)
    pub output_path: String,

    /// Path to JSON summary file
    pub summary_path: Option<PathBuf>,

    /// Suppress progress reporting
    pub quiet: bool,
}

impl ScreenConfig {
    /// Create a new screen configuration with the specified reference path
    pub fn new<P: AsRef<Path>>(reference_path: P) -> Self {
        Self {
            reference_path: reference_path.as_ref().to_path_buf(),
            query: DEFAULT_QUERY.to_string(),
            kmer_length: DEFAULT_KMER_LENGTH,
            output_path: "-".to_string(),
            summary_path: None,
            quiet: false,
        }
    }

    /// Set the query sequence
    pub fn with_query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = query.into();
        self
    }

    /// Set the window width
    pub fn with_kmer_length(mut self, kmer_length: usize) -> Self {
        self.kmer_length = kmer_length;
        self
    }

    /// Set the output path
    pub fn with_output<S: Into<String>>(mut self, output_path: S) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Set the summary path
    pub fn with_summary<P: AsRef<Path>>(mut self, summary_path: P) -> Self {
        self.summary_path = Some(summary_path.as_ref().to_path_buf());
        self
    }

    /// Set quiet mode
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Execute the screen with this configuration
    pub fn execute(&self) -> Result<()> {
        screen::run(self)
    }
}
