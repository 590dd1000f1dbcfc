//! Binary-search random access over a sorted, fixed-record-size graph body.

use std::io::{Read, Seek, SeekFrom};

use crate::alphabet::canonical;
use crate::error::GraphError;
use crate::header::Header;
use crate::kmer_record::KmerRecord;

/// Random-access view over a seekable graph file.
///
/// Records in the body are assumed sorted ascending by canonical k-mer
/// string, which is what makes [`RandomAccess::get`] a binary search
/// rather than a linear scan.
pub struct RandomAccess<S> {
    stream: S,
    header: Header,
    body_start: u64,
    n_records: u64,
}

impl<S: Read + Seek> RandomAccess<S> {
    /// Parses the header and computes the body geometry. The stream is
    /// repositioned to the start before parsing.
    ///
    /// The initial seek doubles as a seek-capability probe: a stream whose
    /// `Seek` impl exists but can't actually seek (e.g. a `File` wrapping a
    /// pipe or FIFO, which errors at the syscall level rather than at the
    /// type level) is reported as [`GraphError::Unseekable`] rather than a
    /// bare I/O error.
    pub fn open(mut stream: S) -> Result<Self, GraphError> {
        stream
            .seek(SeekFrom::Start(0))
            .map_err(|_| GraphError::Unseekable)?;
        let header = Header::from_reader(&mut stream)?;
        let body_start = stream.stream_position()?;
        let total_size = stream.seek(SeekFrom::End(0))?;
        let body_size = total_size - body_start;
        let record_size = header.record_size;

        if body_size % record_size != 0 {
            return Err(GraphError::TruncatedBody {
                remaining: body_size % record_size,
                record_size,
            });
        }

        Ok(Self {
            n_records: body_size / record_size,
            header,
            body_start,
            stream,
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

    /// Reads the record at the given 0-based index.
    pub fn get_index(&mut self, index: u64) -> Result<KmerRecord, GraphError> {
        if index >= self.n_records {
            return Err(GraphError::IndexOutOfRange {
                index,
                len: self.n_records,
            });
        }
        let record_size = self.header.record_size;
        self.stream
            .seek(SeekFrom::Start(self.body_start + index * record_size))?;
        let mut buf = vec![0u8; record_size as usize];
        self.stream.read_exact(&mut buf)?;
        Ok(KmerRecord::new(
            &buf,
            self.header.kmer_size as usize,
            self.header.kmer_container_size as usize,
            self.header.num_colors as usize,
        ))
    }

    /// Binary searches for a record whose decoded k-mer string exactly
    /// equals `canonical_kmer`. Uses leftmost-insertion semantics: finds
    /// the smallest index whose k-mer is `>= canonical_kmer`, then checks
    /// for an exact match.
    pub fn get_by_canonical(&mut self, canonical_kmer: &str) -> Result<KmerRecord, GraphError> {
        let mut lo = 0u64;
        let mut hi = self.n_records;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let candidate = self.get_index(mid)?.kmer_string()?;
            if candidate.as_str() < canonical_kmer {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        if lo < self.n_records {
            let record = self.get_index(lo)?;
            if record.kmer_string()? == canonical_kmer {
                return Ok(record);
            }
        }

        Err(GraphError::NotFound {
            kmer: canonical_kmer.to_string(),
        })
    }

    /// Canonicalizes `kmer` (comparing it to its reverse complement) and
    /// looks up the result.
    pub fn get(&mut self, kmer: &str) -> Result<KmerRecord, GraphError> {
        let canonical_kmer = canonical(kmer)?;
        self.get_by_canonical(&canonical_kmer)
    }

    /// Sequential iteration over every record, in body order.
    pub fn iter(&mut self) -> Result<RecordIter<'_, S>, GraphError> {
        self.stream.seek(SeekFrom::Start(self.body_start))?;
        Ok(RecordIter {
            stream: &mut self.stream,
            kmer_size: self.header.kmer_size as usize,
            kmer_container_size: self.header.kmer_container_size as usize,
            num_colors: self.header.num_colors as usize,
            record_size: self.header.record_size as usize,
            remaining: self.n_records,
        })
    }
}

/// Lazy sequential iterator over a graph body.
pub struct RecordIter<'a, S> {
    stream: &'a mut S,
    kmer_size: usize,
    kmer_container_size: usize,
    num_colors: usize,
    record_size: usize,
    remaining: u64,
}

impl<S: Read> Iterator for RecordIter<'_, S> {
    type Item = Result<KmerRecord, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let mut buf = vec![0u8; self.record_size];
        if let Err(e) = self.stream.read_exact(&mut buf) {
            return Some(Err(e.into()));
        }
        self.remaining -= 1;
        Some(Ok(KmerRecord::new(
            &buf,
            self.kmer_size,
            self.kmer_container_size,
            self.num_colors,
        )))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}
