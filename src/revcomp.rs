use thiserror::Error;

/// Errors produced by the reverse-complement transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RevCompError {
    /// A symbol outside the {A,C,G,T} alphabet was encountered.
    #[error("invalid base '{base}' in k-mer {kmer:?}: expected one of A, C, G, T")]
    InvalidBase { base: char, kmer: String },
}

/// Complement a single uppercase nucleotide (A<->T, C<->G).
#[inline]
fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        _ => None,
    }
}

/// Reverse-complement a k-mer: complement each base, then reverse.
///
/// Fails on any symbol without a complement mapping rather than emitting a
/// partially mapped string. Lowercase bases are rejected; the reference set
/// and query are uppercase by contract.
pub fn reverse_complement(kmer: &str) -> Result<String, RevCompError> {
    // NOTE: assumes ASCII nucleotides; iteration uses byte indices.
    let mut out = Vec::with_capacity(kmer.len());
    for &base in kmer.as_bytes().iter().rev() {
        match complement(base) {
            Some(c) => out.push(c),
            None => {
                return Err(RevCompError::InvalidBase {
                    base: base as char,
                    kmer: kmer.to_string(),
                });
            }
        }
    }
    // Safe: output bytes are drawn from the ACGT alphabet
    Ok(String::from_utf8(out).unwrap())
}
