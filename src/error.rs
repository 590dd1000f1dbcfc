//! Error types for cortex-graph.
//!
//! This module provides an exhaustive, strongly-typed error enum covering
//! every failure mode of header parsing, random access, and traversal,
//! enabling precise error handling and informative messages.

use thiserror::Error;

/// Errors that can occur while reading or traversing a graph file.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Leading magic word did not match `CORTEX`.
    #[error("bad magic word: expected `CORTEX`, found {found:?}")]
    BadMagic { found: [u8; 6] },

    /// Trailing magic word did not match `CORTEX`.
    #[error("bad trailing magic word: expected `CORTEX`, found {found:?}")]
    BadTrailingMagic { found: [u8; 6] },

    /// File format version is not the one this reader understands.
    #[error("unsupported version {found}: only version {expected} is supported")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// `kmer_size` field was zero.
    #[error("invalid kmer size: must be at least 1, found {found}")]
    InvalidKmerSize { found: u32 },

    /// `kmer_container_size` field was zero.
    #[error("invalid kmer container size: must be at least 1, found {found}")]
    InvalidContainerSize { found: u32 },

    /// `num_colors` field was zero.
    #[error("invalid number of colors: must be at least 1, found {found}")]
    InvalidNumColors { found: u32 },

    /// Body length was not an exact multiple of the record size, or a
    /// sequential read hit end-of-file partway through a record.
    #[error("truncated body: {remaining} bytes remain, which is not a multiple of record size {record_size}")]
    TruncatedBody { remaining: u64, record_size: u64 },

    /// A numeric record index fell outside `[0, len)`.
    #[error("index {index} out of range: graph has {len} records")]
    IndexOutOfRange { index: u64, len: u64 },

    /// The requested k-mer is not present in the graph.
    #[error("kmer not found: {kmer}")]
    NotFound { kmer: String },

    /// A k-mer string was the wrong length or contained non-ACGT characters.
    #[error("invalid kmer string {string:?}: {details}")]
    InvalidKmerString { string: String, details: String },

    /// The underlying stream does not support seeking, which random access requires.
    #[error("stream does not support seeking")]
    Unseekable,

    /// An I/O error occurred that is not itself a format violation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_magic_display() {
        let err = GraphError::BadMagic {
            found: *b"XXXXXX",
        };
        assert!(err.to_string().contains("CORTEX"));
    }

    #[test]
    fn unsupported_version_display() {
        let err = GraphError::UnsupportedVersion {
            found: 3,
            expected: 6,
        };
        assert_eq!(
            err.to_string(),
            "unsupported version 3: only version 6 is supported"
        );
    }

    #[test]
    fn invalid_kmer_size_display() {
        let err = GraphError::InvalidKmerSize { found: 0 };
        assert_eq!(
            err.to_string(),
            "invalid kmer size: must be at least 1, found 0"
        );
    }

    #[test]
    fn not_found_display() {
        let err = GraphError::NotFound {
            kmer: "ACGT".to_string(),
        };
        assert_eq!(err.to_string(), "kmer not found: ACGT");
    }

    #[test]
    fn truncated_body_display() {
        let err = GraphError::TruncatedBody {
            remaining: 3,
            record_size: 13,
        };
        assert!(err.to_string().contains("13"));
    }

    #[test]
    fn io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: GraphError = io_err.into();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
