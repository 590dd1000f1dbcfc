//! Fuzz target for canonical k-mer computation.
//!
//! Tests that canonical form has the expected properties:
//! 1. Is idempotent
//! 2. A k-mer and its reverse complement have the same canonical form
//! 3. Canonical form is lexicographically smallest

#![no_main]

use cortex_graph::alphabet::{canonical, revcomp};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 64 {
        return;
    }

    for &byte in data {
        if !matches!(byte, b'A' | b'C' | b'G' | b'T') {
            return;
        }
    }

    let Ok(kmer) = std::str::from_utf8(data) else {
        return;
    };

    let canonical_kmer = canonical(kmer).expect("valid DNA string should canonicalize");

    // Property 1: canonical is idempotent.
    let twice = canonical(&canonical_kmer).expect("canonical output should itself canonicalize");
    assert_eq!(canonical_kmer, twice, "canonical is not idempotent");

    // Property 2: a k-mer and its reverse complement share a canonical form.
    let rc = revcomp(kmer).expect("valid DNA string should reverse-complement");
    let rc_canonical = canonical(&rc).expect("reverse complement should canonicalize");
    assert_eq!(
        canonical_kmer, rc_canonical,
        "kmer and reverse complement have different canonical forms"
    );

    // Property 3: canonical form is lexicographically no greater than either input.
    assert!(
        canonical_kmer.as_str() <= kmer,
        "canonical {canonical_kmer} > original {kmer}"
    );
    assert!(
        canonical_kmer.as_str() <= rc.as_str(),
        "canonical {canonical_kmer} > reverse complement {rc}"
    );
});
