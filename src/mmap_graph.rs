//! Memory-mapped random access over a graph file.
//!
//! Offers the same lookup contract as [`crate::random_access::RandomAccess`]
//! but over a memory-mapped byte slice rather than a seekable handle, so
//! each probe is a slice index instead of a `seek`+`read` pair.
//!
//! # Safety
//!
//! Memory mapping relies on the underlying file not being modified while
//! the mapping is active. Modifying a mapped file leads to undefined
//! behavior.

use memmap2::Mmap;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use crate::alphabet::canonical;
use crate::error::GraphError;
use crate::header::Header;
use crate::kmer_record::KmerRecord;

/// A memory-mapped, read-only view of a graph file.
pub struct MmapGraph {
    mmap: Mmap,
    header: Header,
    body_start: usize,
    n_records: u64,
}

impl MmapGraph {
    /// Opens and memory-maps `path`, parsing the header from the mapped
    /// bytes.
    ///
    /// # Safety
    ///
    /// The underlying file must not be modified while this mapping
    /// exists. Modifying a mapped file leads to undefined behavior.
    #[allow(unsafe_code)]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let file = File::open(path)?;
        // SAFETY: we rely on the file not being modified while mapped,
        // documented behavior that callers must ensure.
        let mmap = unsafe { Mmap::map(&file)? };

        let mut cursor = Cursor::new(&mmap[..]);
        let header = Header::from_reader(&mut cursor)?;
        let body_start = cursor.position() as usize;
        let body_size = mmap.len() - body_start;
        let record_size = header.record_size;

        if body_size as u64 % record_size != 0 {
            return Err(GraphError::TruncatedBody {
                remaining: body_size as u64 % record_size,
                record_size,
            });
        }

        Ok(Self {
            n_records: body_size as u64 / record_size,
            header,
            body_start,
            mmap,
        })
    }

    /// The parsed header.
    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Number of records in the body.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.n_records
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n_records == 0
    }

    fn record_bytes(&self, index: u64) -> &[u8] {
        let record_size = self.header.record_size as usize;
        let start = self.body_start + index as usize * record_size;
        &self.mmap[start..start + record_size]
    }

    fn record_at(&self, index: u64) -> KmerRecord {
        KmerRecord::new(
            self.record_bytes(index),
            self.header.kmer_size as usize,
            self.header.kmer_container_size as usize,
            self.header.num_colors as usize,
        )
    }

    /// Reads the record at the given 0-based index.
    pub fn get_index(&self, index: u64) -> Result<KmerRecord, GraphError> {
        if index >= self.n_records {
            return Err(GraphError::IndexOutOfRange {
                index,
                len: self.n_records,
            });
        }
        Ok(self.record_at(index))
    }

    /// Binary searches for a record whose decoded k-mer string exactly
    /// equals `canonical_kmer`.
    pub fn get_by_canonical(&self, canonical_kmer: &str) -> Result<KmerRecord, GraphError> {
        let mut lo = 0u64;
        let mut hi = self.n_records;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let candidate = self.record_at(mid).kmer_string()?;
            if candidate.as_str() < canonical_kmer {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        if lo < self.n_records {
            let record = self.record_at(lo);
            if record.kmer_string()? == canonical_kmer {
                return Ok(record);
            }
        }

        Err(GraphError::NotFound {
            kmer: canonical_kmer.to_string(),
        })
    }

    /// Canonicalizes `kmer` and looks up the result.
    pub fn get(&self, kmer: &str) -> Result<KmerRecord, GraphError> {
        let canonical_kmer = canonical(kmer)?;
        self.get_by_canonical(&canonical_kmer)
    }

    /// Iterates over every record, in body order.
    pub fn iter(&self) -> impl Iterator<Item = KmerRecord> + '_ {
        (0..self.n_records).map(move |i| self.record_at(i))
    }
}
