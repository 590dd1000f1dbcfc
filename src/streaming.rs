//! Sequential record iteration over a positioned, possibly non-seekable
//! stream — the body-only counterpart to [`crate::random_access::RandomAccess`]
//! for callers (e.g. reading from stdin) that cannot seek.

use std::io::{ErrorKind, Read};

use crate::error::GraphError;
use crate::header::Header;
use crate::kmer_record::KmerRecord;

/// Lazily reads fixed-size records from a stream positioned immediately
/// after the header, until end of stream.
pub struct RecordStream<R> {
    reader: R,
    kmer_size: usize,
    kmer_container_size: usize,
    num_colors: usize,
    record_size: usize,
}

impl<R: Read> RecordStream<R> {
    /// Builds a record stream from `reader` (already positioned past the
    /// header) and the header's geometry.
    #[must_use]
    pub fn new(reader: R, header: &Header) -> Self {
        Self {
            reader,
            kmer_size: header.kmer_size as usize,
            kmer_container_size: header.kmer_container_size as usize,
            num_colors: header.num_colors as usize,
            record_size: header.record_size as usize,
        }
    }
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = Result<KmerRecord, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = vec![0u8; self.record_size];
        let mut filled = 0;
        loop {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    if filled == buf.len() {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e.into())),
            }
        }

        if filled == 0 {
            return None;
        }
        if filled < buf.len() {
            return Some(Err(GraphError::TruncatedBody {
                remaining: filled as u64,
                record_size: self.record_size as u64,
            }));
        }

        Some(Ok(KmerRecord::new(
            &buf,
            self.kmer_size,
            self.kmer_container_size,
            self.num_colors,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::encode_kmer_bases;
    use std::io::Cursor;

    fn header_for(kmer_size: u32, num_colors: u32) -> Header {
        Header {
            version: 6,
            kmer_size,
            kmer_container_size: 1,
            num_colors,
            mean_read_lengths: vec![0; num_colors as usize],
            total_sequence: vec![0; num_colors as usize],
            sample_names: vec![String::new(); num_colors as usize],
            error_rate: [0u8; 16],
            color_info: vec![],
            record_size: 8 + 5 * u64::from(num_colors),
        }
    }

    #[test]
    fn reads_sequential_records() {
        let header = header_for(3, 1);
        let mut body = Vec::new();
        for kmer in ["AAA", "CCC", "GGG"] {
            let words = encode_kmer_bases(kmer, 1).unwrap();
            body.extend_from_slice(&words[0].to_le_bytes());
            body.extend_from_slice(&1u32.to_le_bytes());
            body.push(0);
        }

        let stream = RecordStream::new(Cursor::new(body), &header);
        let strings: Vec<String> = stream
            .map(|r| r.unwrap().kmer_string().unwrap())
            .collect();
        assert_eq!(strings, vec!["AAA", "CCC", "GGG"]);
    }

    #[test]
    fn empty_stream_yields_nothing() {
        let header = header_for(3, 1);
        let mut stream = RecordStream::new(Cursor::new(Vec::new()), &header);
        assert!(stream.next().is_none());
    }

    #[test]
    fn partial_record_is_truncated_error() {
        let header = header_for(3, 1);
        let mut stream = RecordStream::new(Cursor::new(vec![0u8; 3]), &header);
        let err = stream.next().unwrap().unwrap_err();
        assert!(matches!(err, GraphError::TruncatedBody { .. }));
    }
}
