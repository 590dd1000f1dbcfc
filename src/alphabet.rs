//! DNA alphabet primitives: base/complement tables, reverse-complement, and
//! the 2-bit packing codec used to store k-mer bases in fixed-width words.
//!
//! The on-disk k-mer container packs bases MSB-first into a run of
//! little-endian `u64` words: within each word, the first base occupies the
//! top two bits and subsequent bases fill downward. Only the low `k` base
//! slots across the whole container are meaningful; any leading slots are
//! padding and are assumed to be zero.

use crate::error::GraphError;

const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Number of base slots held by `container_size` words.
const fn slots(container_size: usize) -> usize {
    container_size * 32
}

fn base_to_code(base: u8) -> Result<u8, GraphError> {
    match base.to_ascii_uppercase() {
        b'A' => Ok(0),
        b'C' => Ok(1),
        b'G' => Ok(2),
        b'T' => Ok(3),
        other => Err(GraphError::InvalidKmerString {
            string: (other as char).to_string(),
            details: "base must be one of A, C, G, T".to_string(),
        }),
    }
}

const fn code_to_base(code: u8) -> u8 {
    BASES[(code & 0b11) as usize]
}

/// Returns the complementary base: A<->T, C<->G.
pub fn complement(base: u8) -> Result<u8, GraphError> {
    Ok(match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => {
            return Err(GraphError::InvalidKmerString {
                string: (other as char).to_string(),
                details: "base must be one of A, C, G, T".to_string(),
            })
        }
    })
}

/// Reverses a DNA string and complements every base.
pub fn revcomp(kmer: &str) -> Result<String, GraphError> {
    kmer.bytes()
        .rev()
        .map(complement)
        .collect::<Result<Vec<u8>, _>>()
        .map(|bytes| String::from_utf8(bytes).expect("complement table yields only ASCII"))
}

/// Returns the lexicographically smaller of a k-mer and its reverse complement.
pub fn canonical(kmer: &str) -> Result<String, GraphError> {
    let rc = revcomp(kmer)?;
    Ok(if kmer <= rc.as_str() {
        kmer.to_string()
    } else {
        rc
    })
}

/// Decodes `k` DNA bases from a little-endian word container.
///
/// Each word's bits are walked from the most significant pair down to the
/// least significant; words are walked in the order given. Only the last
/// `k` base codes produced (the lowest-order ones) are kept — leading
/// codes are padding.
pub fn decode_kmer_bases(words: &[u64], k: usize) -> Result<String, GraphError> {
    let total = slots(words.len());
    if k > total {
        return Err(GraphError::InvalidKmerString {
            string: String::new(),
            details: format!("kmer size {k} exceeds container capacity {total}"),
        });
    }

    let mut codes = Vec::with_capacity(total);
    for word in words {
        for i in 0..32 {
            let shift = 62 - 2 * i;
            codes.push(((word >> shift) & 0b11) as u8);
        }
    }

    let start = total - k;
    let bytes: Vec<u8> = codes[start..].iter().map(|&c| code_to_base(c)).collect();
    Ok(String::from_utf8(bytes).expect("code table yields only ASCII"))
}

/// Encodes a k-mer string into `container_size` little-endian words, the
/// inverse of [`decode_kmer_bases`].
pub fn encode_kmer_bases(kmer: &str, container_size: usize) -> Result<Vec<u64>, GraphError> {
    let total = slots(container_size);
    let k = kmer.len();
    if k > total {
        return Err(GraphError::InvalidKmerString {
            string: kmer.to_string(),
            details: format!("kmer size {k} exceeds container capacity {total}"),
        });
    }

    let mut codes = vec![0u8; total - k];
    for base in kmer.bytes() {
        codes.push(base_to_code(base)?);
    }

    let mut words = Vec::with_capacity(container_size);
    for chunk in codes.chunks(32) {
        let mut word = 0u64;
        for (i, &code) in chunk.iter().enumerate() {
            let shift = 62 - 2 * i;
            word |= u64::from(code) << shift;
        }
        words.push(word);
    }
    Ok(words)
}
