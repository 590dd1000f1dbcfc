//! Shared fixture builder for integration tests: assembles a minimal but
//! valid CORTEX graph file byte-for-byte from a list of records.

use cortex_graph::alphabet::encode_kmer_bases;
use cortex_graph::edge_set::EdgeSet;

/// Builds the bytes of a version-6, single-sample-name-block CORTEX graph
/// file for the given k-mer size and records. Each record is
/// `(kmer, per_color_coverage, per_color_wire_edge_byte)`; the caller is
/// responsible for keeping records sorted ascending by canonical k-mer
/// string, since that invariant is what random access relies on.
pub fn build_graph(k: u32, records: &[(&str, Vec<u32>, Vec<u8>)]) -> Vec<u8> {
    let container_size = k.div_ceil(32).max(1);
    let num_colors = records.first().map_or(1, |(_, cov, _)| cov.len() as u32);

    let mut buf = Vec::new();
    buf.extend_from_slice(b"CORTEX");
    buf.extend_from_slice(&6u32.to_le_bytes());
    buf.extend_from_slice(&k.to_le_bytes());
    buf.extend_from_slice(&container_size.to_le_bytes());
    buf.extend_from_slice(&num_colors.to_le_bytes());
    for _ in 0..num_colors {
        buf.extend_from_slice(&0u32.to_le_bytes()); // mean read length
    }
    for _ in 0..num_colors {
        buf.extend_from_slice(&0u64.to_le_bytes()); // total sequence
    }
    for _ in 0..num_colors {
        buf.extend_from_slice(&0u32.to_le_bytes()); // sample name length
    }
    buf.extend_from_slice(&[0u8; 16]); // error rate blob
    for _ in 0..num_colors {
        buf.extend_from_slice(&[0, 0, 0, 0]); // four cleaning flags
        buf.extend_from_slice(&0u32.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes()); // cleaning name length
    }
    buf.extend_from_slice(b"CORTEX");

    for (kmer, coverage, edges) in records {
        let words = encode_kmer_bases(kmer, container_size as usize).unwrap();
        for w in &words {
            buf.extend_from_slice(&w.to_le_bytes());
        }
        for c in coverage {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        buf.extend_from_slice(edges);
    }
    buf
}

/// Builds the on-disk byte for an edge set from its incoming and outgoing
/// base letters (uppercase, e.g. `"ACG"`), going through the library's own
/// bit-setting API rather than hand-computed bit patterns.
pub fn wire_edges(incoming: &str, outgoing: &str) -> u8 {
    let mut edges = EdgeSet::EMPTY;
    for letter in incoming.chars() {
        edges.add_edge(letter.to_ascii_lowercase()).unwrap();
    }
    for letter in outgoing.chars() {
        edges.add_edge(letter.to_ascii_uppercase()).unwrap();
    }
    edges.to_wire_byte()
}

/// Writes `bytes` to a fresh temp file and returns the handle keeping it alive.
pub fn write_temp_graph(bytes: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::with_suffix(".ctx").unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
