//! Lazy decode of one fixed-size k-mer record.

use std::cell::OnceCell;

use crate::alphabet::decode_kmer_bases;
use crate::edge_set::EdgeSet;
use crate::error::GraphError;

/// One fixed-size k-mer record, holding its raw bytes plus the geometry
/// needed to decode them.
///
/// `kmer_string`, `coverage`, and `edges` each decode from `raw` on first
/// access and cache the result, so repeated calls (as traversal does,
/// re-reading a branch's current record's edges on every step) don't
/// re-run the decode.
#[derive(Debug)]
pub struct KmerRecord {
    raw: Vec<u8>,
    kmer_size: usize,
    kmer_container_size: usize,
    num_colors: usize,
    kmer_string: OnceCell<String>,
    coverage: OnceCell<Vec<u32>>,
    edges: OnceCell<Vec<EdgeSet>>,
}

impl Clone for KmerRecord {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            kmer_size: self.kmer_size,
            kmer_container_size: self.kmer_container_size,
            num_colors: self.num_colors,
            kmer_string: OnceCell::new(),
            coverage: OnceCell::new(),
            edges: OnceCell::new(),
        }
    }
}

impl KmerRecord {
    /// Wraps a raw record slice. `raw.len()` must equal
    /// `8 * kmer_container_size + 5 * num_colors`.
    #[must_use]
    pub fn new(raw: &[u8], kmer_size: usize, kmer_container_size: usize, num_colors: usize) -> Self {
        Self {
            raw: raw.to_vec(),
            kmer_size,
            kmer_container_size,
            num_colors,
            kmer_string: OnceCell::new(),
            coverage: OnceCell::new(),
            edges: OnceCell::new(),
        }
    }

    fn words(&self) -> Vec<u64> {
        self.raw[..self.kmer_container_size * 8]
            .chunks_exact(8)
            .map(|chunk| u64::from_le_bytes(chunk.try_into().expect("chunk is 8 bytes")))
            .collect()
    }

    /// Decodes the k-mer's DNA string, which on read is always canonical.
    pub fn kmer_string(&self) -> Result<String, GraphError> {
        if let Some(cached) = self.kmer_string.get() {
            return Ok(cached.clone());
        }
        let decoded = decode_kmer_bases(&self.words(), self.kmer_size)?;
        Ok(self.kmer_string.get_or_init(|| decoded).clone())
    }

    /// Per-color coverage counts.
    pub fn coverage(&self) -> Vec<u32> {
        self.coverage
            .get_or_init(|| {
                let start = self.kmer_container_size * 8;
                self.raw[start..start + 4 * self.num_colors]
                    .chunks_exact(4)
                    .map(|chunk| u32::from_le_bytes(chunk.try_into().expect("chunk is 4 bytes")))
                    .collect()
            })
            .clone()
    }

    /// Per-color edge sets, un-permuted from their on-disk nibble layout.
    pub fn edges(&self) -> Vec<EdgeSet> {
        self.edges
            .get_or_init(|| {
                let start = self.kmer_container_size * 8 + 4 * self.num_colors;
                self.raw[start..start + self.num_colors]
                    .iter()
                    .map(|&byte| EdgeSet::from_wire_byte(byte))
                    .collect()
            })
            .clone()
    }
}

impl PartialEq for KmerRecord {
    fn eq(&self, other: &Self) -> bool {
        self.kmer_size == other.kmer_size
            && self.num_colors == other.num_colors
            && self.kmer_string().ok() == other.kmer_string().ok()
            && self.coverage() == other.coverage()
            && self.edges() == other.edges()
    }
}

impl Eq for KmerRecord {}
