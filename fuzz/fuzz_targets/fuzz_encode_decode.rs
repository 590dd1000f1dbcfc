//! Fuzz target for the 2-bit pack/unpack roundtrip.
//!
//! Tests that encoding then decoding a k-mer string is the identity
//! operation for valid DNA sequences, across container sizes.

#![no_main]

use cortex_graph::alphabet::{decode_kmer_bases, encode_kmer_bases};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 96 {
        return;
    }

    for &byte in data {
        if !matches!(byte, b'A' | b'C' | b'G' | b'T' | b'a' | b'c' | b'g' | b't') {
            return;
        }
    }

    let Ok(kmer) = std::str::from_utf8(data) else {
        return;
    };

    let container_size = data.len().div_ceil(32).max(1);
    let Ok(words) = encode_kmer_bases(kmer, container_size) else {
        return;
    };
    let decoded = decode_kmer_bases(&words, kmer.len()).expect("decode of just-encoded kmer");

    let normalized: String = kmer.chars().map(|c| c.to_ascii_uppercase()).collect();
    assert_eq!(decoded, normalized, "encode/decode roundtrip failed");
});
