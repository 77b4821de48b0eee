use crate::reference::ReferenceSet;
use crate::revcomp::{reverse_complement, RevCompError};
use thiserror::Error;

/// Default window width for the bundled 7-mer reference set
pub const DEFAULT_KMER_LENGTH: usize = 7;

/// Default query sequence
pub const DEFAULT_QUERY: &str = "ACACCGTAGCCTCCAGATGC";

/// Errors returned by the window scanner.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// k must satisfy 1 <= k <= query length.
    #[error("k-mer length {k} is out of range for query of length {query_len}")]
    KmerLengthOutOfRange { k: usize, query_len: usize },
}

/// Slide a window of width k over the query and collect every window
/// present in the reference set, in scan order.
///
/// Duplicates are kept: a k-mer occurring at several offsets appears once
/// per offset. NOTE: assumes ASCII nucleotides; slicing uses byte indices.
pub fn scan(
    query: &str,
    kmer_length: usize,
    reference: &ReferenceSet,
) -> Result<Vec<String>, ScanError> {
    let query_len = query.len();
    if kmer_length == 0 || kmer_length > query_len {
        return Err(ScanError::KmerLengthOutOfRange {
            k: kmer_length,
            query_len,
        });
    }

    let mut matches = Vec::new();
    for i in 0..=query_len - kmer_length {
        let kmer = &query[i..i + kmer_length];
        if reference.contains(kmer) {
            matches.push(kmer.to_string());
        }
    }
    Ok(matches)
}

/// Number of windows a scan of this query visits
pub fn window_count(query_len: usize, kmer_length: usize) -> usize {
    query_len.saturating_sub(kmer_length) + 1
}

/// For each match (in scan order, duplicates included), reverse-complement
/// it and report the pair if the reverse complement is itself an element of
/// the matches list.
///
/// Membership is tested against the matches list, not the reference set.
pub fn revcomp_pairs(matches: &[String]) -> Result<Vec<(String, String)>, RevCompError> {
    let mut pairs = Vec::new();
    for kmer in matches {
        let rc = reverse_complement(kmer)?;
        if matches.iter().any(|m| *m == rc) {
            pairs.push((kmer.clone(), rc));
        }
    }
    Ok(pairs)
}
